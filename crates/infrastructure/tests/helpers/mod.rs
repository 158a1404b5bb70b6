#![allow(dead_code)]

use rudns_application::ports::{QueryHandler, ResponseLog};
use rudns_application::use_cases::{AuthoritativeResolverUseCase, RootResolverUseCase};
use rudns_domain::{AddressTable, TldMapping};
use rudns_infrastructure::repositories::FileResponseLog;
use rudns_infrastructure::server::RuDnsServer;
use rudns_infrastructure::transport::TcpTransport;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

pub const TIMEOUT: Duration = Duration::from_millis(500);
pub const MAX_MESSAGE: usize = 1024;

pub struct RunningServer {
    pub addr: SocketAddr,
    pub shutdown: CancellationToken,
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

pub async fn spawn_server(handler: Arc<dyn QueryHandler>) -> RunningServer {
    let server = RuDnsServer::bind("127.0.0.1:0", handler, MAX_MESSAGE)
        .await
        .unwrap();
    let addr = server.local_addr().unwrap();
    let shutdown = CancellationToken::new();
    tokio::spawn(server.run(shutdown.clone()));
    RunningServer { addr, shutdown }
}

pub async fn spawn_tld_server(records: AddressTable, log_path: &Path) -> RunningServer {
    let log: Arc<dyn ResponseLog> =
        Arc::new(FileResponseLog::append_mode(log_path).await.unwrap());
    let handler = AuthoritativeResolverUseCase::new(Arc::new(records), log);
    spawn_server(Arc::new(handler)).await
}

pub async fn spawn_root_server(
    delegations: TldMapping,
    direct: AddressTable,
    default_tld_port: u16,
    log_path: &Path,
) -> RunningServer {
    let log: Arc<dyn ResponseLog> =
        Arc::new(FileResponseLog::append_mode(log_path).await.unwrap());
    let handler = RootResolverUseCase::new(
        Arc::new(delegations),
        Arc::new(direct),
        Arc::new(TcpTransport::new(TIMEOUT, MAX_MESSAGE)),
        log,
        default_tld_port,
    );
    spawn_server(Arc::new(handler)).await
}

/// Accepts connections and never answers.
pub async fn spawn_silent_peer() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    addr
}

/// Answers every message with `reply`.
pub async fn spawn_canned_peer(reply: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 1024];
                while let Ok(n) = stream.read(&mut buf).await {
                    if n == 0 || stream.write_all(reply.as_bytes()).await.is_err() {
                        break;
                    }
                }
            });
        }
    });
    addr
}

/// Answers every message with `reply` and records each message received.
pub async fn spawn_recording_peer(reply: &'static str) -> (SocketAddr, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let received = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&received);
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let seen = Arc::clone(&seen);
            tokio::spawn(async move {
                let mut buf = [0u8; 1024];
                while let Ok(n) = stream.read(&mut buf).await {
                    if n == 0 {
                        break;
                    }
                    let text = String::from_utf8_lossy(&buf[..n]).into_owned();
                    seen.lock().unwrap().push(text);
                    if stream.write_all(reply.as_bytes()).await.is_err() {
                        break;
                    }
                }
            });
        }
    });
    (addr, received)
}

/// Address nothing listens on.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
