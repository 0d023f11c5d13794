use std::net::SocketAddr;

use axum::{
    extract::ConnectInfo,
    http::{header::USER_AGENT, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use log::info;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

#[derive(Clone)]
pub struct RequestTraceData {
    id: String,
}

impl RequestTraceData {
    pub fn get_id(&self) -> String {
        self.id.clone()
    }
}

fn get_remote_ip_addr<T>(req: &Request<T>) -> String {
    match req.extensions().get::<ConnectInfo<SocketAddr>>() {
        Some(ConnectInfo(socket_addr)) => socket_addr.ip().to_string(),
        None => String::from("unknown"),
    }
}

fn get_user_agent<T>(req: &Request<T>) -> &str {
    req.headers()
        .get(USER_AGENT)
        .and_then(|header| header.to_str().ok())
        .unwrap_or("not-set")
}

pub async fn request_tracing<T>(mut req: Request<T>, next: Next<T>) -> Response {
    let request_id = nanoid::nanoid!(10);

    info!(
        "[{}] {} '{}' {} {}",
        request_id,
        get_remote_ip_addr(&req),
        get_user_agent(&req),
        req.method().as_str(),
        req.uri(),
    );

    req.extensions_mut().insert(RequestTraceData {
        id: request_id.clone(),
    });
    let mut response = next.run(req).await;

    info!("[{}] responded {}", request_id, response.status());

    // nanoid's default alphabet is header-safe
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
