//! RU-DNS Infrastructure Layer
pub mod repositories;
pub mod server;
pub mod tables;
pub mod transport;
