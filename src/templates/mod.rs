//! Bundled template resources
//!
//! Actions never touch the resource layout directly: they go through the
//! [`TemplateStore`] trait, so the backing storage (embedded assets here,
//! a directory or a network fetch elsewhere) can change without touching
//! action logic.

pub mod embedded;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use embedded::EmbeddedTemplates;

/// Errors raised by template lookups and copies.
///
/// Unlike the pom.xml merger, these are fatal for the action that hit
/// them: a scaffold with a missing or unwritable payload has nothing
/// sensible to fall back to.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template resource '{0}' not found")]
    NotFound(String),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Store of named template blobs and folders.
///
/// Resource names are slash-separated paths ("github/workflows/maven.yml").
/// Copy operations create destination directories as needed and overwrite
/// existing files.
pub trait TemplateStore {
    /// Load a resource's content
    fn read(&self, name: &str) -> Result<String, TemplateError>;

    /// Copy a single resource to `dest`
    fn copy_file(&self, name: &str, dest: &Path) -> Result<(), TemplateError>;

    /// Write a literal string to `dest`
    fn copy_content(&self, content: &str, dest: &Path) -> Result<(), TemplateError>;

    /// Copy every resource under `name/` into `dest`, skipping entries
    /// whose relative path or file name appears in `exclude`.
    /// Returns the files written.
    fn copy_folder_excluding(
        &self,
        name: &str,
        dest: &Path,
        exclude: &[&str],
    ) -> Result<Vec<PathBuf>, TemplateError>;

    /// Copy every resource under `name/` into `dest`
    fn copy_folder(&self, name: &str, dest: &Path) -> Result<Vec<PathBuf>, TemplateError> {
        self.copy_folder_excluding(name, dest, &[])
    }
}
