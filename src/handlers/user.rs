use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, State},
    http::{header::LOCATION, request::Parts, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use log::info;

use crate::{
    appstate::AppState,
    middleware::request_tracing::RequestTraceData,
    model::{
        error::ApiError,
        user::{NewUser, User},
    },
};

fn not_found(id: &str) -> ApiError {
    ApiError::ObjectNotFound(format!("Objeto não encontrado! Id: {}", id))
}

/// The `:id` segment of a user route.
///
/// A segment that doesn't decode or doesn't parse can't name a row, so it is
/// rejected as not found rather than as a bad request.
pub struct UserId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => id,
            Err(rejection) => {
                return Err(ApiError::ObjectNotFound(format!(
                    "unreadable id in {}: {}",
                    parts.uri.path(),
                    rejection
                )))
            }
        };

        id.parse::<i64>().map(UserId).map_err(|_| not_found(&id))
    }
}

pub async fn find_all(
    State(app_state): State<Arc<AppState>>,
    Extension(request_trace_data): Extension<RequestTraceData>,
) -> Result<Json<Vec<User>>, ApiError> {
    info!("[{}] find_all users", request_trace_data.get_id());

    let users = app_state.get_db().find_all_users()?;
    Ok(Json(users))
}

pub async fn find_by_id(
    State(app_state): State<Arc<AppState>>,
    UserId(id): UserId,
    Extension(request_trace_data): Extension<RequestTraceData>,
) -> Result<Json<User>, ApiError> {
    info!("[{}] find_by_id {}", request_trace_data.get_id(), id);

    let user = app_state
        .get_db()
        .find_user_by_id(id)?
        .ok_or_else(|| not_found(&id.to_string()))?;

    Ok(Json(user))
}

pub async fn insert(
    State(app_state): State<Arc<AppState>>,
    Extension(request_trace_data): Extension<RequestTraceData>,
    Json(new_user): Json<NewUser>,
) -> Result<impl IntoResponse, ApiError> {
    info!(
        "[{}] insert called with {:?}",
        request_trace_data.get_id(),
        new_user
    );

    let user = app_state.get_db().insert_user(new_user)?;
    let location = format!("/users/{}", user.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(user)))
}

pub async fn update(
    State(app_state): State<Arc<AppState>>,
    UserId(id): UserId,
    Extension(request_trace_data): Extension<RequestTraceData>,
    Json(new_user): Json<NewUser>,
) -> Result<Json<User>, ApiError> {
    info!(
        "[{}] update {} called with {:?}",
        request_trace_data.get_id(),
        id,
        new_user
    );

    let user = app_state
        .get_db()
        .update_user(id, new_user)?
        .ok_or_else(|| not_found(&id.to_string()))?;

    Ok(Json(user))
}

pub async fn delete(
    State(app_state): State<Arc<AppState>>,
    UserId(id): UserId,
    Extension(request_trace_data): Extension<RequestTraceData>,
) -> Result<StatusCode, ApiError> {
    info!("[{}] delete {}", request_trace_data.get_id(), id);

    if !app_state.get_db().delete_user(id)? {
        return Err(not_found(&id.to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
