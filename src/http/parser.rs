use crate::http::request::{Method, Request};

const LINE_END: &str = "\r\n";
const HEAD_END: &str = "\r\n\r\n";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty request")]
    Empty,
    #[error("malformed request line {0:?}")]
    InvalidRequestLine(String),
    #[error("request target {0:?} does not start with '/'")]
    InvalidTarget(String),
}

/// Parses the bytes of one socket read into a [`Request`].
///
/// The buffer is assumed to hold the whole request. Invalid UTF-8 sequences
/// are dropped. The body is whatever follows the first blank line;
/// `Content-Length` is not consulted.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let text = decode_lossy(buf);
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let (head, body) = match text.find(HEAD_END) {
        Some(pos) => (&text[..pos], &text[pos + HEAD_END.len()..]),
        None => (text.as_str(), ""),
    };

    let (request_line, header_block) = head.split_once(LINE_END).unwrap_or((head, ""));

    let parts: Vec<&str> = request_line.split(' ').collect();
    let &[method, path, version] = parts.as_slice() else {
        return Err(ParseError::InvalidRequestLine(request_line.to_string()));
    };

    if !path.starts_with('/') {
        return Err(ParseError::InvalidTarget(path.to_string()));
    }

    Ok(Request {
        method: Method::parse(method),
        path: path.to_string(),
        version: version.to_string(),
        head: header_block.to_string(),
        body: body.as_bytes().to_vec(),
    })
}

/// UTF-8 decoding that skips invalid sequences instead of replacing them.
fn decode_lossy(buf: &[u8]) -> String {
    let mut out = String::with_capacity(buf.len());
    for chunk in buf.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_http_request(req).unwrap();

        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.header("Host"), Some("example.com"));
        assert!(parsed.body.is_empty());
    }

    #[test]
    fn invalid_bytes_are_dropped() {
        let req = b"POST /x HTTP/1.1\r\n\r\nhe\xffllo";

        let parsed = parse_http_request(req).unwrap();

        assert_eq!(parsed.body, b"hello".to_vec());
    }
}
