use indexmap::IndexMap;

/// Response headers, written out in insertion order.
pub type HeaderMap = IndexMap<String, String>;

/// An HTTP status code.
///
/// Any numeric code can be carried; the constants cover the codes the
/// server emits. Codes missing from the reason table render as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// 200 OK
    pub const OK: StatusCode = StatusCode(200);
    /// 204 No Content
    pub const NO_CONTENT: StatusCode = StatusCode(204);
    /// 400 Bad Request
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    /// 403 Forbidden
    pub const FORBIDDEN: StatusCode = StatusCode(403);
    /// 404 Not Found
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    /// 405 Method Not Allowed
    pub const METHOD_NOT_ALLOWED: StatusCode = StatusCode(405);
    /// 500 Internal Server Error
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);

    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use wirehttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::OK.as_u16(), 200);
    /// assert_eq!(StatusCode::NOT_FOUND.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns the reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use wirehttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::OK.reason_phrase(), "OK");
    /// assert_eq!(StatusCode(418).reason_phrase(), "Unknown");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            204 => "No Content",
            400 => "Bad Request",
            403 => "Forbidden",
            404 => "Not Found",
            405 => "Method Not Allowed",
            500 => "Internal Server Error",
            _ => "Unknown",
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers in output order
    pub headers: HeaderMap,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::OK)
///     .header("Content-Type", "text/html")
///     .body(b"<h1>hi</h1>".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// Adds a header, or replaces the value of an existing one in place.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response.
    ///
    /// Appends a Content-Length header based on body size if not already present.
    pub fn build(mut self) -> Response {
        self.headers
            .entry("Content-Length".to_string())
            .or_insert_with(|| self.body.len().to_string());

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// A `text/plain` response with the given status and body.
    pub fn text(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(status)
            .header("Content-Type", "text/plain")
            .body(body)
            .build()
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self::text(StatusCode::NOT_FOUND, "File not found")
    }

    /// Creates a 403 Forbidden response.
    pub fn forbidden() -> Self {
        Self::text(StatusCode::FORBIDDEN, "Forbidden")
    }

    /// Creates a 405 Method Not Allowed response.
    pub fn method_not_allowed() -> Self {
        Self::text(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        Self::text(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }

    /// Merges `extra` into the headers. Existing keys keep their position and
    /// take the new value; new keys go at the end.
    pub fn merge_headers<'a, I>(&mut self, extra: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in extra {
            self.headers.insert(key.to_string(), value.to_string());
        }
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResponseParseError {
    #[error("response has no header terminator")]
    Incomplete,
    #[error("malformed status line {0:?}")]
    InvalidStatusLine(String),
    #[error("malformed header line {0:?}")]
    InvalidHeader(String),
}

/// Decodes response wire bytes back into a [`Response`].
///
/// The body is taken as everything after the blank line, so a truncated
/// read yields a truncated body rather than an error.
pub fn parse_response(buf: &[u8]) -> Result<Response, ResponseParseError> {
    let head_end = buf
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .ok_or(ResponseParseError::Incomplete)?;

    let head = String::from_utf8_lossy(&buf[..head_end]);
    let mut lines = head.split("\r\n");

    let status_line = lines.next().unwrap_or_default();
    let mut parts = status_line.splitn(3, ' ');
    let status = match (parts.next(), parts.next()) {
        (Some(version), Some(code)) if version.starts_with("HTTP/") => code
            .parse::<u16>()
            .map(StatusCode)
            .map_err(|_| ResponseParseError::InvalidStatusLine(status_line.to_string()))?,
        _ => return Err(ResponseParseError::InvalidStatusLine(status_line.to_string())),
    };

    let mut headers = HeaderMap::new();
    for line in lines.filter(|l| !l.is_empty()) {
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| ResponseParseError::InvalidHeader(line.to_string()))?;
        headers.insert(key.trim().to_string(), value.trim().to_string());
    }

    Ok(Response {
        status,
        headers,
        body: buf[head_end + 4..].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_replacement_keeps_position() {
        let mut response = ResponseBuilder::new(StatusCode::OK)
            .header("A", "1")
            .header("B", "2")
            .build();

        response.merge_headers([("A", "3"), ("C", "4")]);

        let keys: Vec<&str> = response.headers.keys().map(String::as_str).collect();
        assert_eq!(keys, ["A", "B", "Content-Length", "C"]);
        assert_eq!(response.header("A"), Some("3"));
    }

    #[test]
    fn parse_response_rejects_garbage_status_line() {
        let result = parse_response(b"hello there\r\n\r\n");

        assert!(matches!(result, Err(ResponseParseError::InvalidStatusLine(_))));
    }
}
