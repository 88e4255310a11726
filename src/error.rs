//! Construction errors.

use core::fmt;

/// Reasons the face cannot be instantiated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceError {
    /// A required font or image asset is not present.
    MissingAsset(&'static str),
}

impl fmt::Display for FaceError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::MissingAsset(path) => write!(f, "missing asset: {path}"),
        }
    }
}

impl core::error::Error for FaceError {}
