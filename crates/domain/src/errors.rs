use crate::codec::FormatError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed message: {0}")]
    Format(#[from] FormatError),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport connection reset by {server}")]
    TransportConnectionReset { server: String },

    #[error("Peer {server} closed the connection without answering")]
    EmptyReply { server: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Response log error: {0}")]
    ResponseLog(String),
}

impl DomainError {
    /// True for every failure that happened on the wire rather than in the payload.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::TransportConnectionReset { .. }
                | DomainError::EmptyReply { .. }
                | DomainError::Io(_)
        )
    }
}
