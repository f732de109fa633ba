//! Static file resolution under a base directory.
//!
//! A URL path is mapped onto the filesystem by trimming its slashes and
//! joining it onto the base directory. Directories fall back to their
//! `index.html`. The final path is canonicalized and must stay inside the
//! canonical base directory, so neither `..` segments nor symlinks can be
//! used to read files elsewhere.

use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use tracing::warn;

use crate::http::mime;

const INDEX_FILE: &str = "index.html";

/// A file found under the base directory, read fully into memory.
#[derive(Debug, Clone)]
pub struct StaticFile {
    /// Canonical filesystem path of the file
    pub path: PathBuf,
    /// MIME type inferred from the extension
    pub mime_type: &'static str,
    pub contents: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("no file for {0}")]
    NotFound(String),
    #[error("{0} resolves outside the base directory")]
    Forbidden(String),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Serves files from a fixed base directory.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    base_dir: PathBuf,
    root: OnceLock<PathBuf>,
}

impl StaticFiles {
    /// Creates a resolver rooted at `base_dir`.
    ///
    /// The directory is canonicalized here when it exists. A missing
    /// directory is not an error: every GET answers 404 until it appears,
    /// and the first request after that canonicalizes it.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        let root = match std::fs::canonicalize(base_dir) {
            Ok(canonical) => OnceLock::from(canonical),
            Err(e) => {
                warn!(dir = %base_dir.display(), error = %e, "Base directory is not accessible");
                OnceLock::new()
            }
        };
        Self {
            base_dir: base_dir.to_path_buf(),
            root,
        }
    }

    async fn root(&self, target: &str) -> Result<&Path, ResolveError> {
        if let Some(root) = self.root.get() {
            return Ok(root);
        }
        let canonical = tokio::fs::canonicalize(&self.base_dir)
            .await
            .map_err(|e| io_error(e, &self.base_dir, target))?;
        Ok(self.root.get_or_init(|| canonical))
    }

    /// Resolves a request target to a file under the base directory.
    ///
    /// Query strings and fragments are ignored. Any `..` segment is refused
    /// outright; the canonical-prefix check afterwards catches symlinks.
    pub async fn resolve(&self, target: &str) -> Result<StaticFile, ResolveError> {
        let url_path = strip_query(target);
        let relative = Path::new(url_path.trim_matches('/'));

        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(ResolveError::Forbidden(target.to_string()));
        }

        let root = self.root(target).await?;
        let mut candidate = root.join(relative);
        if self.is_dir(&candidate, target).await? {
            candidate.push(INDEX_FILE);
            if self.is_dir(&candidate, target).await? {
                return Err(ResolveError::NotFound(target.to_string()));
            }
        }

        let canonical = tokio::fs::canonicalize(&candidate)
            .await
            .map_err(|e| io_error(e, &candidate, target))?;
        if !canonical.starts_with(root) {
            return Err(ResolveError::Forbidden(target.to_string()));
        }

        let contents = tokio::fs::read(&canonical)
            .await
            .map_err(|e| io_error(e, &canonical, target))?;

        Ok(StaticFile {
            mime_type: mime::from_path(&canonical),
            path: canonical,
            contents,
        })
    }

    async fn is_dir(&self, path: &Path, target: &str) -> Result<bool, ResolveError> {
        tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_dir())
            .map_err(|e| io_error(e, path, target))
    }
}

fn strip_query(target: &str) -> &str {
    target
        .split_once(['?', '#'])
        .map_or(target, |(path, _)| path)
}

fn io_error(err: io::Error, path: &Path, target: &str) -> ResolveError {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => {
            ResolveError::NotFound(target.to_string())
        }
        _ => ResolveError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    }
}
