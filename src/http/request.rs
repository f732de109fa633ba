use std::fmt;

/// HTTP request methods.
///
/// The dispatcher only acts on GET, POST and OPTIONS. Every other token is
/// kept verbatim in [`Method::Other`] so it can be logged and rejected with
/// 405 Method Not Allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Submit data
    POST,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// Anything else the client sent, e.g. `PUT` or `BREW`
    Other(String),
}

impl Method {
    /// Maps a request-line token onto a method.
    ///
    /// Matching is case-sensitive, as method tokens are in HTTP/1.1.
    ///
    /// # Example
    ///
    /// ```
    /// # use wirehttp::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::Other("get".into()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "OPTIONS" => Method::OPTIONS,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::OPTIONS => "OPTIONS",
            Method::Other(s) => s,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request decoded from a single socket read.
///
/// Only the request line and the header/body boundary are interpreted. The
/// header block is kept as raw text; [`Request::header`] scans it on demand.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// The request target, always starting with `/` (e.g. "/index.html")
    pub path: String,
    /// Protocol version token from the request line (typically "HTTP/1.1")
    pub version: String,
    /// Unparsed header lines between the request line and the blank line
    pub head: String,
    /// Everything after the first blank line
    pub body: Vec<u8>,
}

impl Request {
    /// Looks up a header in the raw header block, ignoring case.
    ///
    /// Lines without a colon are skipped rather than treated as errors.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.head
            .split("\r\n")
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case(key))
            .map(|(_, value)| value.trim())
    }

    /// The body decoded as text, for logging and echoing.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
