use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Could not read BIDS version from {path}: {source}")]
    BidsVersion {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not determine the bidskit version (broken installation?): {reason}")]
    MissingVersion { reason: String },

    #[error("Invalid glob pattern \"{pattern}\": {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to read directory entry: {0}")]
    Glob(#[from] glob::GlobError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bids_version_display_names_path() {
        let e = AppError::BidsVersion {
            path: PathBuf::from("/opt/bidskit/schema/BIDS_VERSION"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/opt/bidskit/schema/BIDS_VERSION"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn missing_version_display() {
        let e = AppError::MissingVersion {
            reason: "no package metadata and no manifest".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Could not determine the bidskit version (broken installation?): no package metadata and no manifest"
        );
    }

    #[test]
    fn pattern_display_names_pattern() {
        let source = glob::Pattern::new("a[").unwrap_err();
        let e = AppError::Pattern {
            pattern: "a[".to_string(),
            source,
        };
        assert!(e.to_string().contains("a["));
    }
}
