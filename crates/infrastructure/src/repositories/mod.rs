pub mod response_log;

pub use response_log::FileResponseLog;
