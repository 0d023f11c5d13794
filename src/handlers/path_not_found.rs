use axum::{body::Body, http::Request};

use crate::model::error::ApiError;

pub async fn handler_404(request: Request<Body>) -> ApiError {
    ApiError::ObjectNotFound(format!("no route for {}", request.uri().path()))
}
