// crates/usecase/src/threshold.rs
use std::path::{Path, PathBuf};

use file_lister_domain::Timestamp;
use file_lister_ports::filesystem::PathInspector;
use file_lister_shared_kernel::{ApplicationError, ErrorContext, InfrastructureError, Result};
use log::debug;

/// Where the effective threshold came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThresholdSource {
    Default,
    Literal,
    ReferenceFile(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedThreshold {
    pub timestamp: Timestamp,
    pub source: ThresholdSource,
}

/// Pre-walk checks: turns the raw `-t` value and the directory argument into
/// a threshold and an absolute root, or fails before anything is listed.
pub struct ThresholdResolver<'a> {
    inspector: &'a dyn PathInspector,
}

impl<'a> ThresholdResolver<'a> {
    pub fn new(inspector: &'a dyn PathInspector) -> Self {
        Self { inspector }
    }

    /// Resolves the cutoff in order: absent value, literal timestamp, reference file.
    ///
    /// # Errors
    /// [`ApplicationError::ReferenceFileNotFound`] when `value` is neither a valid
    /// timestamp nor an existing path.
    pub fn resolve(&self, value: Option<&str>) -> Result<ResolvedThreshold> {
        let Some(value) = value else {
            return Ok(ResolvedThreshold { timestamp: Timestamp::EPOCH, source: ThresholdSource::Default });
        };

        match Timestamp::parse(value) {
            Ok(timestamp) => Ok(ResolvedThreshold { timestamp, source: ThresholdSource::Literal }),
            Err(reason) => {
                debug!("'{value}' is not a timestamp ({reason}), trying it as a reference file");
                self.reference_file_threshold(Path::new(value))
            }
        }
    }

    fn reference_file_threshold(&self, path: &Path) -> Result<ResolvedThreshold> {
        let absolute = self
            .inspector
            .canonicalize(path)
            .map_err(|source| ApplicationError::ReferenceFileNotFound { path: path.to_path_buf(), source })?;
        let mtime = self
            .inspector
            .modified(&absolute)
            .map_err(|source| InfrastructureError::Metadata { path: absolute.clone(), source })?;
        let timestamp =
            Timestamp::from_datetime(&mtime).with_context(|| format!("reference file '{}'", absolute.display()))?;
        Ok(ResolvedThreshold { timestamp, source: ThresholdSource::ReferenceFile(absolute) })
    }

    /// Makes `dir` absolute and checks that it opens as a directory.
    ///
    /// # Errors
    /// [`ApplicationError::DirectoryNotFound`] when `dir` is missing or not a readable directory.
    pub fn resolve_root(&self, dir: &Path) -> Result<PathBuf> {
        let absolute = self
            .inspector
            .canonicalize(dir)
            .map_err(|source| ApplicationError::DirectoryNotFound { path: dir.to_path_buf(), source })?;
        self.inspector
            .open_directory(&absolute)
            .map_err(|source| ApplicationError::DirectoryNotFound { path: absolute.clone(), source })?;
        Ok(absolute)
    }
}
