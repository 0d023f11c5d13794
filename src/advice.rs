//! Central translation of handler errors into response bodies.
//!
//! [`ExceptionHandlers`] maps an [`ErrorKind`] to the function that renders
//! it. The table is consulted by
//! [`exception_advice`](crate::middleware::exception_advice::exception_advice)
//! for every response that carries an [`ApiError`].

use std::{collections::HashMap, fmt};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::model::{
    error::{ApiError, ErrorKind},
    standard_error::StandardError,
};

pub const NOT_FOUND_MESSAGE: &str = "Não Encontrado...";

/// Renders an error raised while serving the request at `path`.
pub type Translator = fn(&ApiError, &str) -> Response;

#[derive(Clone)]
pub struct ExceptionHandlers {
    translators: HashMap<ErrorKind, Translator>,
}

impl fmt::Debug for ExceptionHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.translators.keys()).finish()
    }
}

impl ExceptionHandlers {
    /// A registry with no translators; every error keeps its provisional response.
    pub fn new() -> ExceptionHandlers {
        ExceptionHandlers {
            translators: HashMap::new(),
        }
    }

    pub fn register(mut self, kind: ErrorKind, translator: Translator) -> ExceptionHandlers {
        self.translators.insert(kind, translator);
        self
    }

    pub fn translator_for(&self, kind: ErrorKind) -> Option<Translator> {
        self.translators.get(&kind).copied()
    }

    pub fn translate(&self, error: &ApiError, path: &str) -> Option<Response> {
        self.translator_for(error.kind())
            .map(|translator| translator(error, path))
    }
}

impl Default for ExceptionHandlers {
    fn default() -> ExceptionHandlers {
        ExceptionHandlers::new().register(ErrorKind::ObjectNotFound, object_not_found)
    }
}

pub fn object_not_found(_error: &ApiError, path: &str) -> Response {
    let status = StatusCode::NOT_FOUND;
    let err = StandardError::new(status, NOT_FOUND_MESSAGE, path);
    (status, Json(err)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> serde_json::Value {
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn object_not_found_renders_standard_error() {
        let error = ApiError::ObjectNotFound(String::from("Objeto não encontrado! Id: 999"));

        let response = object_not_found(&error, "/users/999");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: StandardError = serde_json::from_value(body_of(response).await).unwrap();
        assert_eq!(body.status, 404);
        assert_eq!(body.message, NOT_FOUND_MESSAGE);
        assert_eq!(body.path, "/users/999");
    }

    #[test]
    fn default_registry_only_knows_object_not_found() {
        let handlers = ExceptionHandlers::default();

        assert!(handlers.translator_for(ErrorKind::ObjectNotFound).is_some());
        assert!(handlers.translator_for(ErrorKind::Internal).is_none());
        assert!(handlers
            .translate(&ApiError::InternalError(String::from("Internal Error")), "/users")
            .is_none());
    }

    #[test]
    fn empty_registry_translates_nothing() {
        let handlers = ExceptionHandlers::new();

        assert!(handlers
            .translate(&ApiError::ObjectNotFound(String::from("gone")), "/users/1")
            .is_none());
    }

    #[test]
    fn registered_translator_replaces_default() {
        fn teapot(_error: &ApiError, _path: &str) -> Response {
            StatusCode::IM_A_TEAPOT.into_response()
        }

        let handlers = ExceptionHandlers::default().register(ErrorKind::ObjectNotFound, teapot);
        let response = handlers
            .translate(&ApiError::ObjectNotFound(String::from("gone")), "/users/1")
            .unwrap();

        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    }
}
