pub mod exception_advice;
pub mod request_tracing;
