use super::{classify_io_error, read_message, write_message};
use async_trait::async_trait;
use rudns_application::ports::QueryTransport;
use rudns_domain::codec::{decode_response_bytes, encode_query};
use rudns_domain::{DomainError, Query, Response};
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::debug;

/// One connection per exchange, every step bounded by the same timeout.
pub struct TcpTransport {
    timeout: Duration,
    max_message_size: usize,
}

impl TcpTransport {
    pub fn new(timeout: Duration, max_message_size: usize) -> Self {
        Self {
            timeout,
            max_message_size,
        }
    }

    fn timed_out(server: &str) -> DomainError {
        DomainError::TransportTimeout {
            server: server.to_string(),
        }
    }

    async fn connect(
        &self,
        host: &str,
        port: u16,
        server: &str,
    ) -> Result<TcpStream, DomainError> {
        let stream = tokio::time::timeout(self.timeout, TcpStream::connect((host, port)))
            .await
            .map_err(|_| Self::timed_out(server))?
            .map_err(|e| classify_io_error(server, e))?;

        stream
            .set_nodelay(true)
            .map_err(|e| classify_io_error(server, e))?;

        Ok(stream)
    }
}

#[async_trait]
impl QueryTransport for TcpTransport {
    async fn exchange(
        &self,
        host: &str,
        port: u16,
        query: &Query,
    ) -> Result<Response, DomainError> {
        let server = format!("{}:{}", host, port);
        let mut stream = self.connect(host, port, &server).await?;

        let message = encode_query(query);
        tokio::time::timeout(self.timeout, write_message(&mut stream, &message))
            .await
            .map_err(|_| Self::timed_out(&server))?
            .map_err(|e| classify_io_error(&server, e))?;

        debug!(server = %server, query = %message, "Query sent");

        let mut buf = vec![0u8; self.max_message_size];
        let received = tokio::time::timeout(self.timeout, read_message(&mut stream, &mut buf))
            .await
            .map_err(|_| Self::timed_out(&server))?
            .map_err(|e| classify_io_error(&server, e))?;

        if received == 0 {
            return Err(DomainError::EmptyReply { server });
        }

        let response = decode_response_bytes(&buf[..received])?;
        debug!(server = %server, response = %response, "Response received");

        Ok(response)
    }
}
