use thiserror::Error;

/// A face-level failure to decode a font container.
///
/// Never propagated out of the cache builder as a hard error: it is always
/// downgraded into an `Info`-level [`TraceMsg`](crate::TraceMsg) and the
/// offending face is skipped so the rest of the build proceeds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognized font container format")]
    UnrecognizedFormat,

    #[error("font data truncated or corrupt")]
    Truncated,

    #[error("face index {index} out of range (face count {face_count})")]
    FaceIndexOutOfRange { index: u32, face_count: u32 },

    #[error("missing required table `{tag}`")]
    MissingTable { tag: &'static str },
}
