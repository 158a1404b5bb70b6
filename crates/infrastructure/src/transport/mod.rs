pub mod tcp;

pub use tcp::TcpTransport;

use rudns_domain::DomainError;
use std::io;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Writes one message. Messages carry no length prefix or terminator.
pub(crate) async fn write_message<S>(stream: &mut S, message: &str) -> io::Result<()>
where
    S: AsyncWriteExt + Unpin,
{
    stream.write_all(message.as_bytes()).await?;
    stream.flush().await
}

/// Reads one message with a single read into `buf`. `Ok(0)` means the peer
/// closed the connection.
pub(crate) async fn read_message<S>(stream: &mut S, buf: &mut [u8]) -> io::Result<usize>
where
    S: AsyncReadExt + Unpin,
{
    loop {
        match stream.read(buf).await {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}

pub(crate) fn classify_io_error(server: &str, error: io::Error) -> DomainError {
    let server = server.to_string();
    match error.kind() {
        io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused { server },
        io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::BrokenPipe => DomainError::TransportConnectionReset { server },
        io::ErrorKind::TimedOut => DomainError::TransportTimeout { server },
        _ => DomainError::Io(format!("{}: {}", server, error)),
    }
}
