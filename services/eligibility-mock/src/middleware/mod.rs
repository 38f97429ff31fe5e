pub mod request_id;
pub mod tracing;
