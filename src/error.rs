use thiserror::Error;

/// Errors returned by the strict parsers.
/// The transforms themselves never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("unknown surface type \"{0}\"")]
    UnknownSurface(String),
    #[error("unknown coordinate type \"{0}\"")]
    UnknownCoordinateType(String),
    #[error("invalid coordinate type tag {0}")]
    UnknownCoordinateTag(u8),
}
