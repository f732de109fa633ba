//! wirehttp - a hand-rolled HTTP/1.1 server and client
//!
//! Core library for the static file server and the raw request client.

pub mod client;
pub mod config;
pub mod http;
pub mod logging;
pub mod server;
