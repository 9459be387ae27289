//! Text normalization used for matching unit names.
//!
//! Both the query term and every candidate name go through the same
//! [`Normalizer`] before comparison, so matching is case- and
//! accent-insensitive by default: `"Říčany"`, `"RICANY"` and `"ricany"` all
//! normalize to `"ricany"`.
//!
//! Diacritics are removed by canonical decomposition (NFD) followed by dropping
//! every combining mark. This covers Czech and any other script whose accented
//! letters decompose. Latin letters without a decomposition (`ł`, `ø`, `ß`, ...)
//! are folded explicitly.

use std::borrow::Cow;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Canonicalizes strings for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    /// Lowercase the input
    pub fold_case: bool,
    /// Remove diacritical marks
    pub strip_diacritics: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            fold_case: true,
            strip_diacritics: true,
        }
    }
}

impl Normalizer {
    /// Leaves input untouched; comparisons become exact substring checks.
    pub const IDENTITY: Self = Self {
        fold_case: false,
        strip_diacritics: false,
    };

    pub fn normalize(&self, input: &str) -> String {
        let cased: Cow<'_, str> = if self.fold_case {
            Cow::Owned(input.to_lowercase())
        } else {
            Cow::Borrowed(input)
        };

        if !self.strip_diacritics {
            return cased.into_owned();
        }

        let mut out = String::with_capacity(cased.len());
        for c in cased.nfd().filter(|c| !is_combining_mark(*c)) {
            match fold_undecomposable(c) {
                Some(folded) => out.push_str(folded),
                None => out.push(c),
            }
        }
        out
    }

    /// Whether `needle_normalized` occurs anywhere in the normalized `name`.
    ///
    /// The needle must already have been produced by this normalizer.
    pub fn contains(&self, name: &str, needle_normalized: &str) -> bool {
        self.normalize(name).contains(needle_normalized)
    }
}

/// Lowercase, diacritic-free form of `input`.
pub fn normalize(input: &str) -> String {
    Normalizer::default().normalize(input)
}

fn fold_undecomposable(c: char) -> Option<&'static str> {
    let folded = match c {
        'ł' => "l",
        'Ł' => "L",
        'đ' | 'ð' => "d",
        'Đ' | 'Ð' => "D",
        'ø' => "o",
        'Ø' => "O",
        'ħ' => "h",
        'Ħ' => "H",
        'ŀ' => "l",
        'Ŀ' => "L",
        'ı' => "i",
        'ĸ' => "k",
        'ſ' => "s",
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'þ' => "th",
        'Þ' => "TH",
        'ĳ' => "ij",
        'Ĳ' => "IJ",
        'ŉ' => "'n",
        _ => return None,
    };
    Some(folded)
}
