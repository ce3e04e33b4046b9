//! Request path → file resolution for a frontend `dist/` directory.
//!
//! Paths under `assets/` map onto files in `<base>/assets/`; every other
//! path maps onto the application shell `<base>/index.html` so the
//! client-side router can handle it.

use std::path::{Component, Path, PathBuf};

use tokio::fs::File;

use crate::error::{CoreError, CoreResult};
use crate::mime::{content_type_for, SHELL_CONTENT_TYPE};

/// Directory under the base that holds build assets.
pub(crate) const ASSETS_DIR: &str = "assets";

/// File name of the application shell.
pub(crate) const SHELL_FILE: &str = "index.html";

/// Request-path prefix claimed by the asset route.
pub(crate) const ASSET_PREFIX: &str = "assets/";

/// Which kind of file a [`ResolvedFile`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Asset,
    Shell,
}

/// A file picked by the resolver, tagged with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    kind: FileKind,
    path: PathBuf,
    content_type: String,
}

impl ResolvedFile {
    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Opens the file for streaming and returns it with its length in bytes.
    ///
    /// # Errors
    ///
    /// - [`CoreError::MissingShell`] if this is the shell and it has vanished.
    /// - [`CoreError::NotFound`] if this is an asset and it has vanished.
    /// - [`CoreError::PermissionDenied`] / [`CoreError::Io`] on other failures.
    pub async fn open(&self) -> CoreResult<(File, u64)> {
        let file = File::open(&self.path)
            .await
            .map_err(|e| self.open_error(e))?;
        let len = file
            .metadata()
            .await
            .map_err(|e| self.open_error(e))?
            .len();
        Ok((file, len))
    }

    fn open_error(&self, err: std::io::Error) -> CoreError {
        if self.kind == FileKind::Shell && err.kind() == std::io::ErrorKind::NotFound {
            CoreError::MissingShell(self.path.clone())
        } else {
            CoreError::from_io(err, &self.path)
        }
    }
}

/// Resolves request paths against a fixed distribution directory.
///
/// The directory is validated once in [`StaticResolver::new`]; afterwards the
/// resolver is immutable and can be shared freely between requests.
#[derive(Debug, Clone)]
pub struct StaticResolver {
    base_dir: PathBuf,
    assets_dir: PathBuf,
    shell_path: PathBuf,
}

impl StaticResolver {
    /// Creates a resolver rooted at `base_dir`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if `base_dir` does not exist.
    /// - [`CoreError::NotADirectory`] if `base_dir` is not a directory.
    /// - [`CoreError::MissingShell`] if `base_dir/index.html` is not a file.
    pub fn new(base_dir: impl AsRef<Path>) -> CoreResult<Self> {
        let requested = base_dir.as_ref();
        let base_dir = requested
            .canonicalize()
            .map_err(|e| CoreError::from_io(e, requested))?;

        if !base_dir.is_dir() {
            return Err(CoreError::NotADirectory(base_dir));
        }

        let shell_path = base_dir.join(SHELL_FILE);
        if !shell_path.is_file() {
            return Err(CoreError::MissingShell(shell_path));
        }

        let assets_dir = base_dir.join(ASSETS_DIR);
        if !assets_dir.is_dir() {
            tracing::warn!(
                "No assets directory at {}; every asset request will be not found",
                assets_dir.display()
            );
        }

        Ok(Self {
            base_dir,
            assets_dir,
            shell_path,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn shell_path(&self) -> &Path {
        &self.shell_path
    }

    /// Resolves `path` (the part of the URL after `/assets/`) to a file
    /// inside the assets directory.
    ///
    /// Paths containing `..`, a root or a drive prefix are rejected, as are
    /// symlinks whose target lies outside the assets directory. Anything
    /// that is not a regular file is reported as not found, including paths
    /// the OS refuses to look up (through a file, NUL bytes, symlink loops).
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] for missing files, directories, rejected and
    ///   unresolvable paths.
    /// - [`CoreError::PermissionDenied`] if the file cannot be inspected.
    pub async fn resolve_asset(&self, path: &str) -> CoreResult<ResolvedFile> {
        let relative = Path::new(path);
        let candidate = self.assets_dir.join(relative);

        if !is_contained(relative) {
            tracing::warn!("Rejected asset path outside assets directory: {path:?}");
            return Err(CoreError::NotFound(candidate));
        }

        let canonical = tokio::fs::canonicalize(&candidate)
            .await
            .map_err(|e| lookup_error(e, &candidate))?;
        let assets_root = tokio::fs::canonicalize(&self.assets_dir)
            .await
            .map_err(|e| lookup_error(e, &candidate))?;

        if !canonical.starts_with(&assets_root) {
            tracing::warn!(
                "Rejected asset {path:?} resolving to {}",
                canonical.display()
            );
            return Err(CoreError::NotFound(candidate));
        }

        let metadata = tokio::fs::metadata(&canonical)
            .await
            .map_err(|e| lookup_error(e, &candidate))?;
        if !metadata.is_file() {
            return Err(CoreError::NotFound(candidate));
        }

        Ok(ResolvedFile {
            kind: FileKind::Asset,
            content_type: content_type_for(&candidate),
            path: canonical,
        })
    }

    /// Resolves any non-asset request path to the application shell.
    ///
    /// `path` is the request path without its leading `/`. Its value only
    /// matters when it starts with `assets/`: such a request should have been
    /// claimed by the asset route, so it is reported as not found instead of
    /// returning the shell.
    ///
    /// The shell's existence is checked at construction, not here.
    pub fn resolve_shell(&self, path: &str) -> CoreResult<ResolvedFile> {
        if path.starts_with(ASSET_PREFIX) {
            return Err(CoreError::NotFound(self.base_dir.join(path)));
        }

        Ok(ResolvedFile {
            kind: FileKind::Shell,
            path: self.shell_path.clone(),
            content_type: SHELL_CONTENT_TYPE.to_string(),
        })
    }
}

/// Asset lookups only distinguish "not servable" from "not permitted".
fn lookup_error(err: std::io::Error, candidate: &Path) -> CoreError {
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(candidate.to_path_buf()),
        _ => CoreError::NotFound(candidate.to_path_buf()),
    }
}

/// True if joining `relative` onto a directory cannot climb out of it.
fn is_contained(relative: &Path) -> bool {
    relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
