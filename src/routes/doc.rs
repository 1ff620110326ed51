use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        properties::{NewProperty, PropertyList},
        reservations::ReservationList,
        users::NewUser,
    },
    models::{Property, PropertyWithRating, ReservationWithProperty, User},
    response::{ApiResponse, Meta},
    routes::{health, properties, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        properties::list_properties,
        properties::create_property,
        users::create_user,
        users::find_user_by_email,
        users::get_user,
        users::list_reservations,
    ),
    components(
        schemas(
            User,
            Property,
            PropertyWithRating,
            ReservationWithProperty,
            NewUser,
            NewProperty,
            PropertyList,
            ReservationList,
            health::HealthData,
            Meta,
            ApiResponse<User>,
            ApiResponse<Property>,
            ApiResponse<PropertyList>,
            ApiResponse<ReservationList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Properties", description = "Listing search and creation"),
        (name = "Users", description = "User lookup, registration and reservations"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
