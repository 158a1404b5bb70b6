mod query_handler;
mod query_transport;
mod response_log;

pub use query_handler::QueryHandler;
pub use query_transport::QueryTransport;
pub use response_log::ResponseLog;

// Re-export for convenience
pub use rudns_domain::{Query, Response};
