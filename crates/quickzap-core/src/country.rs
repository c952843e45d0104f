//! Country records supplied by the catalog

use serde::{Deserialize, Serialize};

/// A selectable country with its international dialing code.
///
/// Immutable once built; the composer only ever clones it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: String,
    /// ISO 3166-1 alpha-2 code, unique within a catalog
    pub code: String,
    pub flag: String,
    /// Dialing code including the leading `+` (e.g. "+55")
    pub phone_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag_svg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag_png: Option<String>,
}

impl Country {
    /// Build a country with an emoji flag derived from its code.
    pub fn new(name: &str, code: &str, phone_code: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            flag: flag_emoji(code),
            phone_code: phone_code.to_string(),
            flag_svg: None,
            flag_png: None,
        }
    }

    /// Attach flag image URLs from the country directory.
    pub fn with_flag_images(mut self, svg: Option<String>, png: Option<String>) -> Self {
        self.flag_svg = svg;
        self.flag_png = png;
        self
    }

    /// One-line display form, e.g. "🇧🇷 Brazil (+55)".
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.flag, self.name, self.phone_code)
    }

    /// Case-insensitive substring match on name or code.
    ///
    /// `query_lower` must already be lowercased.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.code.to_lowercase().contains(query_lower)
    }
}

/// Regional indicator pair for a two-letter country code ("BR" -> "🇧🇷").
pub fn flag_emoji(code: &str) -> String {
    code.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter_map(|c| char::from_u32(0x1F1A5 + c as u32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_emoji_brazil() {
        assert_eq!(flag_emoji("BR"), "🇧🇷");
    }

    #[test]
    fn test_flag_emoji_lowercase_input() {
        assert_eq!(flag_emoji("fr"), "🇫🇷");
    }

    #[test]
    fn test_new_derives_flag() {
        let country = Country::new("Japan", "JP", "+81");
        assert_eq!(country.flag, "🇯🇵");
        assert!(country.flag_svg.is_none());
    }

    #[test]
    fn test_label() {
        let country = Country::new("Brazil", "BR", "+55");
        assert_eq!(country.label(), "🇧🇷 Brazil (+55)");
    }

    #[test]
    fn test_matches_name_and_code() {
        let country = Country::new("United Kingdom", "GB", "+44");
        assert!(country.matches("king"));
        assert!(country.matches("gb"));
        assert!(country.matches(""));
        assert!(!country.matches("france"));
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let country = Country::new("Brazil", "BR", "+55");
        let json = serde_json::to_string(&country).unwrap();
        assert!(json.contains("\"phoneCode\":\"+55\""));
        assert!(!json.contains("flagSvg"));

        let parsed: Country = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, country);
    }
}
