//! Locale identifiers and fallback chains

use crate::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::{langid, LanguageIdentifier};

/// A language/region identifier used to select a message template.
///
/// Both `en-US` and `en_US` spellings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(LanguageIdentifier);

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl Locale {
    /// `en-US`
    pub fn english() -> Self {
        Self(langid!("en-US"))
    }

    /// Parse a locale from a language code
    pub fn from_code(code: &str) -> CatalogResult<Self> {
        let normalized = code.trim().replace('_', "-");
        if normalized.is_empty() {
            return Err(CatalogError::InvalidLocale(code.to_string()));
        }
        normalized
            .parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|_| CatalogError::InvalidLocale(code.to_string()))
    }

    /// The underlying language identifier
    pub fn language_identifier(&self) -> &LanguageIdentifier {
        &self.0
    }

    /// Primary language subtag, e.g. `en`
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    /// This locale followed by progressively less specific ones.
    ///
    /// `sr-Latn-RS` yields `sr-Latn-RS`, `sr-Latn`, `sr`.
    pub fn fallback_chain(&self) -> Vec<Locale> {
        let mut chain = vec![self.clone()];
        let mut current = self.0.clone();

        loop {
            if current.variants().next().is_some() {
                current.clear_variants();
            } else if current.region.is_some() {
                current.region = None;
            } else if current.script.is_some() {
                current.script = None;
            } else {
                break;
            }
            let candidate = Locale(current.clone());
            if !chain.contains(&candidate) {
                chain.push(candidate);
            }
        }

        chain
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Locale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

impl From<LanguageIdentifier> for Locale {
    fn from(id: LanguageIdentifier) -> Self {
        Self(id)
    }
}
