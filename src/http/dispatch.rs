use tracing::{debug, error, info, warn};

use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::http::static_files::{ResolveError, StaticFiles};

/// CORS headers attached to every response.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "https://my-cool-site.com"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// Failures that turn into a 500 at the dispatch boundary.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("bad request: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Io(ResolveError),
}

/// Routes parsed requests to method handlers.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    static_files: StaticFiles,
}

impl Dispatcher {
    pub fn new(static_files: StaticFiles) -> Self {
        Self { static_files }
    }

    /// Turns the raw bytes of one request into a response.
    ///
    /// Never fails: handler errors become 500 Internal Server Error. The
    /// CORS headers are merged into whatever comes out.
    pub async fn respond(&self, raw: &[u8]) -> Response {
        let mut response = match self.dispatch(raw).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Error handling request");
                Response::internal_error()
            }
        };
        response.merge_headers(CORS_HEADERS);
        response
    }

    async fn dispatch(&self, raw: &[u8]) -> Result<Response, HandlerError> {
        let request = parse_http_request(raw)?;
        info!(
            method = %request.method,
            path = %request.path,
            user_agent = request.header("User-Agent").unwrap_or("-"),
            "Received request"
        );

        let response = self.handle(&request).await?;

        info!(
            method = %request.method,
            path = %request.path,
            status = response.status.as_u16(),
            bytes = response.body.len(),
            "Sending response"
        );
        Ok(response)
    }

    /// Handles an already parsed request.
    pub async fn handle(&self, request: &Request) -> Result<Response, HandlerError> {
        match &request.method {
            Method::OPTIONS => Ok(Self::options()),
            Method::GET => self.get(request).await,
            Method::POST => Ok(Self::post(request)),
            Method::Other(_) => Ok(Response::method_not_allowed()),
        }
    }

    fn options() -> Response {
        ResponseBuilder::new(StatusCode::NO_CONTENT)
            .header("Content-Length", "0")
            .build()
    }

    async fn get(&self, request: &Request) -> Result<Response, HandlerError> {
        match self.static_files.resolve(&request.path).await {
            Ok(file) => {
                debug!(file = %file.path.display(), mime_type = file.mime_type, "Serving file");
                Ok(ResponseBuilder::new(StatusCode::OK)
                    .header("Content-Type", file.mime_type)
                    .header("Content-Length", file.contents.len().to_string())
                    .body(file.contents)
                    .build())
            }
            Err(ResolveError::NotFound(path)) => {
                info!(path = %path, "File not found");
                Ok(Response::not_found())
            }
            Err(ResolveError::Forbidden(path)) => {
                warn!(path = %path, "Rejected path outside base directory");
                Ok(Response::forbidden())
            }
            Err(e) => Err(HandlerError::Io(e)),
        }
    }

    fn post(request: &Request) -> Response {
        let body = request.body_text();
        info!(body = %body, "POST body");

        Response::text(
            StatusCode::OK,
            format!("POST received with body: {body}"),
        )
    }
}
