use serde::Serialize;
use utoipa::ToSchema;

use crate::models::ReservationWithProperty;

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ReservationList {
    #[schema(value_type = Vec<ReservationWithProperty>)]
    pub items: Vec<ReservationWithProperty>,
}
