//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::Instant;
use url::Url;

use wait_for_node::config::{PollConfig, HEALTHCHECK_PATH};

/// A request seen by a mock node.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    /// First line, e.g. `HEAD /api/v0/node/healthcheck HTTP/1.1`.
    pub request_line: String,
    pub at: Instant,
}

pub type RequestLog = Arc<Mutex<Vec<SeenRequest>>>;

/// Healthcheck URL for a mock node at `addr`.
pub fn healthcheck_url(addr: SocketAddr) -> Url {
    Url::parse(&format!("http://{addr}{HEALTHCHECK_PATH}")).unwrap()
}

/// Poll settings with a short interval for tests that do not check cadence.
#[allow(dead_code)]
pub fn fast_poll() -> PollConfig {
    PollConfig {
        interval_ms: 50,
        request_timeout_ms: Some(1000),
        ..PollConfig::default()
    }
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub fn unused_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// Start a programmable mock node. `f` receives the 1-based request number
/// and returns the status code to answer with.
pub async fn start_programmable_backend<F, Fut>(f: F) -> (SocketAddr, RequestLog)
where
    F: Fn(usize) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = u16> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let log = serve(listener, f);
    (addr, log)
}

/// Serve on an already bound listener.
pub fn serve<F, Fut>(listener: TcpListener, f: F) -> RequestLog
where
    F: Fn(usize) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = u16> + Send + 'static,
{
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let seen = log.clone();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let Some(request_line) = read_request_line(&mut socket).await else {
                        continue;
                    };
                    let number = {
                        let mut seen = seen.lock().unwrap();
                        seen.push(SeenRequest {
                            request_line,
                            at: Instant::now(),
                        });
                        seen.len()
                    };

                    let f = f.clone();
                    tokio::spawn(async move {
                        let status = f(number).await;
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                            status_line(status)
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    log
}

/// Accept connections and never answer them.
#[allow(dead_code)]
pub async fn start_silent_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    addr
}

async fn read_request_line(socket: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = tokio::time::timeout(Duration::from_secs(5), socket.read(&mut chunk))
            .await
            .ok()?
            .ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    let text = String::from_utf8_lossy(&buf);
    text.lines().next().map(str::to_string)
}

fn status_line(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        204 => "204 No Content",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        502 => "502 Bad Gateway",
        503 => "503 Service Unavailable",
        _ => "500 Internal Server Error",
    }
}
