use serde::Serialize;
use utoipa::ToSchema;

/// Listing metadata: the cap that was applied and how many rows came back.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub limit: Option<i64>,
    pub count: Option<i64>,
}

impl Meta {
    pub fn new(limit: i64, count: usize) -> Self {
        Self {
            limit: Some(limit),
            count: Some(count as i64),
        }
    }

    pub fn empty() -> Self {
        Self {
            limit: None,
            count: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
