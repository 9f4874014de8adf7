use std::borrow::Cow;

use unicode_normalization::{is_nfkd_quick, IsNormalized, UnicodeNormalization};

/// Return `text` in Unicode NFKD form, borrowing when it already is.
pub fn normalize_nfkd(text: &str) -> Cow<'_, str> {
    match is_nfkd_quick(text.chars()) {
        IsNormalized::Yes => Cow::Borrowed(text),
        IsNormalized::No | IsNormalized::Maybe => Cow::Owned(text.nfkd().collect()),
    }
}
