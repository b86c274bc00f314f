//! Text repair applied before record matching

use crate::constants::{MINUS_SIGN_ARTIFACTS, UTF8_BOM};
use std::borrow::Cow;

/// Decode raw file bytes as UTF-8, replacing invalid sequences
pub fn decode_bytes(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Strip a leading BOM and replace mangled minus signs with `-`
///
/// Borrows the input unchanged when there is nothing to repair.
pub fn normalize_text(raw: &str) -> Cow<'_, str> {
    let text = raw.strip_prefix(UTF8_BOM).unwrap_or(raw);

    if !MINUS_SIGN_ARTIFACTS
        .iter()
        .any(|artifact| text.contains(artifact))
    {
        return Cow::Borrowed(text);
    }

    let mut repaired = text.to_string();
    for artifact in MINUS_SIGN_ARTIFACTS {
        repaired = repaired.replace(artifact, "-");
    }
    Cow::Owned(repaired)
}
