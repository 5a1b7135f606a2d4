use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tilemerge operations.
///
/// Every variant maps to a numeric kind (see [`TileMergeError::kind`]).
/// Kind 0 is a usage-level failure; higher kinds are structural failures
/// reported as `kind:message`.
#[derive(Error, Diagnostic, Debug)]
pub enum TileMergeError {
    #[error("Failed to open file {path}: {message}")]
    #[diagnostic(
        code(tilemerge::open),
        help("Check that the path exists and is readable")
    )]
    FileOpen {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to get image source!")]
    #[diagnostic(
        code(tilemerge::missing_source),
        help("Add a source=\"path/to/image.png\" attribute to the <image> element")
    )]
    MissingSource,

    #[error("XML error at byte {position}: {message}")]
    #[diagnostic(code(tilemerge::xml))]
    Xml { position: u64, message: String },

    #[error("Failed to write {path}: {message}")]
    #[diagnostic(code(tilemerge::encode))]
    Encode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(tilemerge::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl TileMergeError {
    /// Numeric error kind printed by the CLI.
    pub fn kind(&self) -> u32 {
        match self {
            TileMergeError::FileOpen { .. } => 0,
            TileMergeError::MissingSource => 1,
            TileMergeError::Xml { .. } => 2,
            TileMergeError::Encode { .. } => 3,
            TileMergeError::Build { .. } => 4,
        }
    }

    /// Usage-level errors reprint the banner instead of a message.
    pub fn is_usage(&self) -> bool {
        self.kind() == 0
    }
}

pub type Result<T> = std::result::Result<T, TileMergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_message() {
        let err = TileMergeError::MissingSource;
        assert_eq!(err.kind(), 1);
        assert_eq!(err.to_string(), "Failed to get image source!");
        assert!(!err.is_usage());
    }

    #[test]
    fn test_file_open_is_usage() {
        let err = TileMergeError::FileOpen {
            path: "missing.xml".into(),
            message: "not found".to_string(),
        };
        assert_eq!(err.kind(), 0);
        assert!(err.is_usage());
    }

    #[test]
    fn test_xml_error_carries_message() {
        let err = TileMergeError::Xml {
            position: 12,
            message: "unexpected end".to_string(),
        };
        assert_eq!(err.kind(), 2);
        assert_eq!(err.to_string(), "XML error at byte 12: unexpected end");
    }
}
