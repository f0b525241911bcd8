//! Best-effort lookup of the local Steam installation directory.

use std::path::{Path, PathBuf};

use crate::fs::FileSystem;

/// Text shown when no candidate directory exists.
pub const UNKNOWN_STEAM_DIR: &str = "Unable to determine (simulation)";

/// Platform families with distinct default Steam locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Microsoft Windows.
    Windows,
    /// Apple macOS.
    MacOs,
    /// Linux and every platform not listed above.
    Other,
}

impl Platform {
    /// Returns the platform family this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }

    /// Returns the directories Steam is usually installed in, most likely first.
    ///
    /// Home-relative candidates are skipped when `home` is unknown.
    #[must_use]
    pub fn candidate_paths(self, home: Option<&Path>) -> Vec<PathBuf> {
        match self {
            Self::Windows => vec![
                PathBuf::from(r"C:\Program Files (x86)\Steam"),
                PathBuf::from(r"C:\Program Files\Steam"),
            ],
            Self::MacOs => home
                .map(|h| h.join("Library").join("Application Support").join("Steam"))
                .into_iter()
                .collect(),
            Self::Other => home
                .map(|h| h.join(".steam").join("steam"))
                .into_iter()
                .collect(),
        }
    }
}

/// Returns the first candidate that exists on disk.
pub async fn first_existing(fs: &dyn FileSystem, candidates: &[PathBuf]) -> Option<PathBuf> {
    for path in candidates {
        let found = fs.exists(path).await;
        log::debug!("Probing {}: {}", path.display(), if found { "found" } else { "missing" });
        if found {
            return Some(path.clone());
        }
    }
    None
}

/// Locates the Steam directory for the current platform.
///
/// Never fails: returns [`UNKNOWN_STEAM_DIR`] when nothing matches.
pub async fn locate(fs: &dyn FileSystem) -> String {
    let home = dirs::home_dir();
    let candidates = Platform::current().candidate_paths(home.as_deref());
    first_existing(fs, &candidates).await.map_or_else(
        || {
            log::info!("No Steam directory found among {} candidate(s)", candidates.len());
            UNKNOWN_STEAM_DIR.to_string()
        },
        |p| p.display().to_string(),
    )
}
