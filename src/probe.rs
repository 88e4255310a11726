//! Capability probe run once before the face is constructed.
//!
//! The face draws with external font files. The host answers whether each file
//! exists through [`AssetProbe`]; the filesystem itself stays outside the crate.

use crate::error::FaceError;

/// Font assets the LCARS face needs, largest first.
pub const REQUIRED_ASSETS: [&str; 5] = [
    "/fonts/antonio_78.bin",
    "/fonts/antonio_33.bin",
    "/fonts/antonio_21.bin",
    "/fonts/antonio_13.bin",
    "/fonts/antonio_12.bin",
];

/// Answers "does this asset exist" for the host's storage.
pub trait AssetProbe {
    fn exists(
        &self,
        path: &str,
    ) -> bool;
}

/// First required asset the probe cannot find.
pub fn first_missing(probe: &dyn AssetProbe) -> Option<&'static str> {
    REQUIRED_ASSETS.iter().copied().find(|path| !probe.exists(path))
}

/// Check every required asset.
pub fn check(probe: &dyn AssetProbe) -> Result<(), FaceError> {
    match first_missing(probe) {
        Some(path) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("watch face asset missing: {}", path);
            Err(FaceError::MissingAsset(path))
        }
        None => Ok(()),
    }
}

/// Whether the face may be instantiated at all.
pub fn is_available(probe: &dyn AssetProbe) -> bool { first_missing(probe).is_none() }

#[cfg(test)]
mod tests {
    use super::*;

    struct AllPresent;

    impl AssetProbe for AllPresent {
        fn exists(
            &self,
            _path: &str,
        ) -> bool {
            true
        }
    }

    struct Without(&'static str);

    impl AssetProbe for Without {
        fn exists(
            &self,
            path: &str,
        ) -> bool {
            path != self.0
        }
    }

    #[test]
    fn test_all_assets_present() {
        assert!(is_available(&AllPresent));
        assert_eq!(check(&AllPresent), Ok(()));
    }

    #[test]
    fn test_missing_asset_reported() {
        let probe = Without("/fonts/antonio_21.bin");
        assert!(!is_available(&probe));
        assert_eq!(first_missing(&probe), Some("/fonts/antonio_21.bin"));
        assert_eq!(check(&probe), Err(FaceError::MissingAsset("/fonts/antonio_21.bin")));
    }
}
