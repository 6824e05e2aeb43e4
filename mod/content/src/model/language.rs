use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::Deserialize;

/// Site language. The site is strictly bilingual: Russian is the
/// primary (canonical) language, English the secondary one.
///
/// Parsing never fails — an unrecognized code resolves as the primary
/// language rather than erroring. This rule is applied at the wire
/// boundary (custom `Deserialize`) so no malformed code can travel
/// further into the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Ru,
    En,
}

impl Language {
    /// The canonical language; base rows are written in it.
    pub const PRIMARY: Language = Language::Ru;

    /// The one secondary language translation rows may exist for.
    pub const SECONDARY: Language = Language::En;

    /// All supported languages, primary first.
    pub const ALL: [Language; 2] = [Language::Ru, Language::En];

    /// Parse a language code. Unknown codes map to the primary language.
    pub fn parse(code: &str) -> Language {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Language::En,
            "ru" => Language::Ru,
            _ => Language::PRIMARY,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    pub fn is_primary(&self) -> bool {
        *self == Language::PRIMARY
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::PRIMARY
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Language::parse(&code))
    }
}
