use std::net::SocketAddr;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{info, warn};

use crate::http::dispatch::Dispatcher;
use crate::http::writer::ResponseWriter;

/// One accepted client connection.
///
/// A connection carries exactly one request: a single bounded read, one
/// response, then close. There is no keep-alive.
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    buffer: BytesMut,
    max_request_size: usize,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr, max_request_size: usize) -> Self {
        Self {
            stream,
            peer,
            buffer: BytesMut::with_capacity(max_request_size),
            max_request_size,
        }
    }

    pub async fn run(&mut self, dispatcher: &Dispatcher) -> anyhow::Result<()> {
        let n = self.read_request().await?;
        if n == 0 {
            warn!(peer = %self.peer, "Empty request");
            return Ok(());
        }

        info!(peer = %self.peer, request_line = %self.request_line(), "Connection from client");

        let response = dispatcher.respond(&self.buffer).await;
        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await?;

        self.stream.shutdown().await?;
        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<usize> {
        self.buffer.resize(self.max_request_size, 0);
        let n = self.stream.read(&mut self.buffer[..]).await?;
        self.buffer.truncate(n);
        Ok(n)
    }

    fn request_line(&self) -> String {
        let line_end = self
            .buffer
            .windows(2)
            .position(|w| w == b"\r\n")
            .unwrap_or(self.buffer.len());
        String::from_utf8_lossy(&self.buffer[..line_end]).into_owned()
    }
}
