pub mod listing_query;
pub mod property_service;
pub mod reservation_service;
pub mod user_service;
