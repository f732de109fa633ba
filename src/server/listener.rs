use std::io;
use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket, lookup_host};
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::http::connection::Connection;
use crate::http::dispatch::Dispatcher;

const LISTEN_BACKLOG: u32 = 5;

/// The accept loop.
///
/// Connections are served strictly one after another: the next accept
/// only happens once the previous connection is closed.
pub struct Listener {
    listener: TcpListener,
    max_request_size: usize,
}

impl Listener {
    pub async fn bind(cfg: &ServerConfig) -> anyhow::Result<Self> {
        let addr = lookup_host((cfg.host.as_str(), cfg.port))
            .await
            .with_context(|| format!("failed to resolve {}", cfg.host))?
            .next()
            .with_context(|| format!("no address for {}", cfg.host))?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket
            .bind(addr)
            .with_context(|| format!("failed to bind {addr}"))?;
        let listener = socket.listen(LISTEN_BACKLOG)?;

        info!("Listening on {}", listener.local_addr()?);
        Ok(Self {
            listener,
            max_request_size: cfg.max_request_size,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves connections until the task is dropped.
    pub async fn run(self, dispatcher: Dispatcher) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!("Accept failed: {}", e);
                    continue;
                }
            };

            let mut conn = Connection::new(socket, peer, self.max_request_size);
            if let Err(e) = conn.run(&dispatcher).await {
                error!("Connection error from {}: {}", peer, e);
            }
        }
    }
}
