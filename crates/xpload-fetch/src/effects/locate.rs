use std::path::{Path, PathBuf};

/// First storage prefix under which the payload file `fragment` exists.
pub fn locate_payload<P: AsRef<Path>>(fragment: &str, prefixes: &[P]) -> Option<PathBuf> {
    prefixes
        .iter()
        .map(|prefix| prefix.as_ref().join(fragment))
        .find(|candidate| candidate.exists())
}
