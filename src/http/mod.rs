//! HTTP/1.1 protocol implementation.
//!
//! This module implements a deliberately small HTTP/1.1 server: one request
//! per connection, no keep-alive, no chunked bodies.
//!
//! # Architecture
//!
//! - **`connection`**: Reads one request from a client, writes one response, closes
//! - **`parser`**: Decodes the raw bytes of a request
//! - **`request`**: HTTP request representation
//! - **`dispatch`**: Method routing, CORS headers, and error-to-500 conversion
//! - **`static_files`**: Maps URL paths onto files under the base directory
//! - **`mime`**: MIME type detection based on file extensions
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Request flow
//!
//! ```text
//!   accept ──▶ read (one, bounded) ──▶ parse ──▶ dispatch ──▶ write ──▶ close
//!                    │                              │
//!                    └─ 0 bytes: warn, close        ├─ OPTIONS → 204
//!                                                   ├─ GET     → static file / 404 / 403
//!                                                   ├─ POST    → 200 echo
//!                                                   ├─ other   → 405
//!                                                   └─ error   → 500
//! ```

pub mod connection;
pub mod dispatch;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod static_files;
pub mod writer;
