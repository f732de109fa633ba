use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

pub const DEFAULT_MAX_REQUEST_SIZE: usize = 4096;
/// Upper bound for `max_request_size`; the read buffer is allocated up front.
pub const MAX_REQUEST_SIZE_LIMIT: usize = 1024 * 1024;

/// Command line flags of the server binary.
///
/// Flags left unset fall back to the config file, then to the built-in
/// defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "wirehttp", about = "HTTP 1.1 Server")]
pub struct ServerArgs {
    /// Server host
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Server port
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Base directory for serving files
    #[arg(short = 'd', long = "dir")]
    pub base_dir: Option<PathBuf>,

    /// Log file
    #[arg(short = 'l', long = "log")]
    pub log_file: Option<PathBuf>,

    /// Largest request accepted, in bytes; anything beyond is cut off
    #[arg(long)]
    pub max_request_size: Option<usize>,

    /// YAML config file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub base_dir: PathBuf,
    pub log_file: PathBuf,
    pub max_request_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_dir: PathBuf::from("./static"),
            log_file: PathBuf::from("server.log"),
            max_request_size: DEFAULT_MAX_REQUEST_SIZE,
        }
    }
}

impl ServerConfig {
    /// Builds the effective configuration from command line flags.
    pub fn load(args: &ServerArgs) -> anyhow::Result<Self> {
        let mut cfg = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        cfg.apply_args(args);

        if cfg.max_request_size == 0 || cfg.max_request_size > MAX_REQUEST_SIZE_LIMIT {
            anyhow::bail!(
                "max_request_size must be between 1 and {} bytes, got {}",
                MAX_REQUEST_SIZE_LIMIT,
                cfg.max_request_size
            );
        }
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    fn apply_args(&mut self, args: &ServerArgs) {
        if let Some(host) = &args.host {
            self.host = host.clone();
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(dir) = &args.base_dir {
            self.base_dir = dir.clone();
        }
        if let Some(log) = &args.log_file {
            self.log_file = log.clone();
        }
        if let Some(size) = args.max_request_size {
            self.max_request_size = size;
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
