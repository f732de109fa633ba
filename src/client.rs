//! Raw HTTP/1.1 client.
//!
//! Builds a request by hand, sends it over a fresh connection and hands back
//! whatever a single read returns. There is no retry, no redirect handling,
//! and no attempt to read a response past the first chunk.

use std::path::Path;

use anyhow::{Context, Result};
use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::response::HeaderMap;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HOST_HEADER: &str = "127.0.0.1";
pub const MAX_RESPONSE_SIZE: usize = 4096;

/// Where a request goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
    /// Path plus query, always starting with `/`
    pub path: String,
}

/// Builds the request text.
///
/// `Host` is set to `127.0.0.1` when the caller did not supply one.
pub fn create_request(method: &str, path: &str, mut headers: HeaderMap, body: &str) -> String {
    if !headers.contains_key("Host") {
        headers.insert("Host".to_string(), DEFAULT_HOST_HEADER.to_string());
    }

    let header_lines = headers
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join("\r\n");

    format!("{method} {path} HTTP/1.1\r\n{header_lines}\r\n\r\n{body}")
}

/// Sends `request` and returns the first read of the response.
///
/// The result may be truncated at [`MAX_RESPONSE_SIZE`] bytes. Invalid UTF-8
/// is replaced, not rejected.
pub async fn send_request(host: &str, port: u16, request: &str) -> Result<String> {
    let mut stream = TcpStream::connect((host, port))
        .await
        .with_context(|| format!("failed to connect to {host}:{port}"))?;

    stream.write_all(request.as_bytes()).await?;
    stream.flush().await?;

    let mut buf = BytesMut::zeroed(MAX_RESPONSE_SIZE);
    let n = stream.read(&mut buf[..]).await?;
    buf.truncate(n);

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parses `host[:port][/path]`, with or without an `http://` prefix.
///
/// The port defaults to 8080 and the path to `/`.
pub fn parse_target(input: &str) -> Result<Target> {
    let rest = input.strip_prefix("http://").unwrap_or(input);
    if rest.contains("://") {
        anyhow::bail!("unsupported scheme in {input:?}");
    }

    // A scheme without a default port, so an explicit :80 is kept as given.
    let url = url::Url::parse(&format!("tcp://{rest}"))
        .with_context(|| format!("invalid URL {input:?}"))?;
    let host = url
        .host_str()
        .filter(|host| !host.is_empty())
        .with_context(|| format!("URL {input:?} has no host"))?
        .trim_start_matches('[')
        .trim_end_matches(']')
        .to_string();

    let mut path = match url.path() {
        "" => "/".to_string(),
        path => path.to_string(),
    };
    if let Some(query) = url.query() {
        path.push('?');
        path.push_str(query);
    }

    Ok(Target {
        host,
        port: url.port().unwrap_or(DEFAULT_PORT),
        path,
    })
}

/// Parses a `key:value` header argument.
pub fn parse_header(arg: &str) -> Result<(String, String)> {
    let (key, value) = arg
        .split_once(':')
        .with_context(|| format!("header {arg:?} is not in key:value form"))?;
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("header {arg:?} has an empty name");
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Reads the body argument: the contents of the file it names, if there is
/// one, otherwise the argument itself.
pub fn load_body(arg: &str) -> Result<String> {
    let path = Path::new(arg);
    if path.is_file() {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read body file {}", path.display()));
    }
    Ok(arg.to_string())
}
