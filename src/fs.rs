//! File system abstraction for testability.

use async_trait::async_trait;
use std::path::Path;

/// Abstraction over the read-only file system probes the monitor needs.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Checks if anything exists at the given path.
    ///
    /// Errors such as permission denied are reported as `false`.
    async fn exists(&self, path: &Path) -> bool;
}

/// Default file system implementation using `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Creates a new `TokioFileSystem` instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSystem for TokioFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}
