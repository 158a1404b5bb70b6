use crate::transport::{read_message, write_message};
use rudns_application::ports::QueryHandler;
use rudns_domain::codec::{decode_query_bytes, encode_response};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// TCP front end shared by the root and TLD server roles.
///
/// Every accepted connection runs on its own task. Within a connection
/// queries are answered strictly in arrival order.
pub struct RuDnsServer {
    listener: TcpListener,
    handler: Arc<dyn QueryHandler>,
    max_message_size: usize,
}

impl RuDnsServer {
    pub async fn bind(
        addr: &str,
        handler: Arc<dyn QueryHandler>,
        max_message_size: usize,
    ) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            handler,
            max_message_size,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub async fn run(self, shutdown: CancellationToken) {
        let role = self.handler.role();
        match self.listener.local_addr() {
            Ok(addr) => info!(role, bind_address = %addr, "RU-DNS server listening"),
            Err(e) => warn!(role, error = %e, "RU-DNS server listening on unknown address"),
        }

        loop {
            let accepted = tokio::select! {
                _ = shutdown.cancelled() => break,
                accepted = self.listener.accept() => accepted,
            };

            match accepted {
                Ok((stream, peer)) => {
                    info!(role, peer = %peer, "Accepted connection");
                    let handler = Arc::clone(&self.handler);
                    let shutdown = shutdown.child_token();
                    let max_message_size = self.max_message_size;
                    tokio::spawn(async move {
                        handle_connection(stream, peer, handler, max_message_size, shutdown).await;
                    });
                }
                Err(e) => {
                    error!(role, error = %e, "Accept failed");
                }
            }
        }

        info!(role, "RU-DNS server stopped");
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    handler: Arc<dyn QueryHandler>,
    max_message_size: usize,
    shutdown: CancellationToken,
) {
    let role = handler.role();
    let mut buf = vec![0u8; max_message_size];

    loop {
        let read = tokio::select! {
            _ = shutdown.cancelled() => break,
            read = read_message(&mut stream, &mut buf) => read,
        };

        let received = match read {
            Ok(0) => {
                debug!(role, peer = %peer, "No more data; closing connection");
                break;
            }
            Ok(n) => n,
            Err(e) => {
                warn!(role, peer = %peer, error = %e, "Read failed; closing connection");
                break;
            }
        };

        let query = match decode_query_bytes(&buf[..received]) {
            Ok(query) => query,
            Err(e) => {
                let raw = String::from_utf8_lossy(&buf[..received]);
                warn!(
                    role,
                    peer = %peer,
                    error = %e,
                    raw = %raw.trim(),
                    "Dropping malformed query"
                );
                continue;
            }
        };

        debug!(role, peer = %peer, query = %query, "Query received");
        let response = handler.handle(&query).await;
        let message = encode_response(&response);

        if let Err(e) = write_message(&mut stream, &message).await {
            warn!(role, peer = %peer, error = %e, "Write failed; closing connection");
            break;
        }
        info!(
            role,
            peer = %peer,
            domain = %response.domain,
            id = response.id,
            flag = %response.flag,
            "Response sent"
        );
    }
}
