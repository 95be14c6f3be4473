use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("'{}' does not appear to be a valid path", .0.display())]
    InvalidPath(PathBuf),
    #[error("'{}' does not appear to contain any .ipa files", .0.display())]
    NoArchivesFound(PathBuf),
    #[error("Not a ZIP archive: {0}")]
    NotAnArchive(String),
    #[error("iTunesMetadata.plist not found")]
    MetadataMissing,
    #[error("Expected exactly one Payload/*.app/Info.plist, found {0}")]
    AmbiguousOrMissingBundleInfo(usize),
    #[error("Malformed metadata: {0}")]
    MalformedMetadata(String),
    #[error("'{path}' does not appear to be a valid .ipa file: {cause}")]
    InvalidArchive {
        path: String,
        #[source]
        cause: Box<ExtractError>,
    },
    #[error("No iTunes App Store apps found")]
    NoValidArchives,
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("I/O error: {0}")]
    Io(String),
}

impl ExtractError {
    /// Failures scoped to a single archive. Only these may be downgraded to a
    /// skip when the run is tolerant.
    pub fn is_per_archive(&self) -> bool {
        matches!(
            self,
            ExtractError::NotAnArchive(_)
                | ExtractError::MetadataMissing
                | ExtractError::AmbiguousOrMissingBundleInfo(_)
                | ExtractError::MalformedMetadata(_)
                | ExtractError::InvalidArchive { .. }
        )
    }

    /// Short, stable name of the failure kind for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::InvalidPath(_) => "InvalidPath",
            ExtractError::NoArchivesFound(_) => "NoArchivesFound",
            ExtractError::NotAnArchive(_) => "NotAnArchive",
            ExtractError::MetadataMissing => "MetadataMissing",
            ExtractError::AmbiguousOrMissingBundleInfo(_) => "AmbiguousOrMissingBundleInfo",
            ExtractError::MalformedMetadata(_) => "MalformedMetadata",
            ExtractError::InvalidArchive { cause, .. } => cause.kind(),
            ExtractError::NoValidArchives => "NoValidArchives",
            ExtractError::Configuration(_) => "ConfigurationError",
            ExtractError::Io(_) => "Io",
        }
    }

    /// Attach the offending archive path to a per-archive failure.
    pub fn in_archive(self, path: impl Into<String>) -> Self {
        match self {
            wrapped @ ExtractError::InvalidArchive { .. } => wrapped,
            cause => ExtractError::InvalidArchive {
                path: path.into(),
                cause: Box::new(cause),
            },
        }
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(error: std::io::Error) -> Self {
        ExtractError::Io(error.to_string())
    }
}

impl From<zip::result::ZipError> for ExtractError {
    fn from(error: zip::result::ZipError) -> Self {
        ExtractError::NotAnArchive(error.to_string())
    }
}

impl From<plist::Error> for ExtractError {
    fn from(error: plist::Error) -> Self {
        ExtractError::MalformedMetadata(error.to_string())
    }
}

impl Serialize for ExtractError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type ExtractResult<T> = Result<T, ExtractError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
