//! Country catalogue types and dataset decoding.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::constants::AUDIO_FALLBACK_LANG;

/// Error raised when the static country dataset cannot be decoded.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("country catalogue could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single country as shipped in the static dataset.
///
/// Field names follow the dataset's JSON (`alpha3Code`, `alpha2Code`, ...);
/// unknown dataset fields are ignored and translation entries may be `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub alpha3_code: String,
    pub alpha2_code: String,
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    /// Localized names keyed by language code.
    #[serde(default)]
    pub translations: HashMap<String, Option<String>>,
}

impl Country {
    /// Display name in the requested language, falling back to the default
    /// name when no translation exists.
    #[must_use]
    pub fn display_name(&self, lang: &str) -> &str {
        self.translations
            .get(lang)
            .and_then(Option::as_deref)
            .unwrap_or(&self.name)
    }

    /// Language the pronunciation audio should use for this country.
    #[must_use]
    pub fn audio_lang<'a>(&self, lang: &'a str) -> &'a str {
        if self.translations.get(lang).is_some_and(Option::is_some) {
            lang
        } else {
            AUDIO_FALLBACK_LANG
        }
    }
}

/// Container for the full country dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CountryCatalogue {
    pub countries: Vec<Country>,
}

impl CountryCatalogue {
    /// Create an empty catalogue (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            countries: Vec::new(),
        }
    }

    /// Load the catalogue from the dataset's JSON, a top-level array of
    /// country records.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into country records.
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Create a catalogue from pre-parsed countries.
    #[must_use]
    pub fn from_countries(countries: Vec<Country>) -> Self {
        Self { countries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spain() -> Country {
        Country {
            alpha3_code: "ESP".to_string(),
            alpha2_code: "ES".to_string(),
            name: "Spain".to_string(),
            region: "Europe".to_string(),
            subregion: "Southern Europe".to_string(),
            translations: HashMap::from([
                ("es".to_string(), Some("España".to_string())),
                ("de".to_string(), None),
            ]),
        }
    }

    #[test]
    fn decodes_dataset_records_with_nulls_and_extras() {
        let json = r#"[
            {
                "name": "Spain",
                "alpha2Code": "ES",
                "alpha3Code": "ESP",
                "capital": "Madrid",
                "population": 46438422,
                "region": "Europe",
                "subregion": "Southern Europe",
                "translations": {"es": "España", "de": null}
            },
            {
                "name": "Antarctica",
                "alpha2Code": "AQ",
                "alpha3Code": "ATA",
                "translations": {}
            }
        ]"#;

        let catalogue = CountryCatalogue::from_json(json).unwrap();
        assert_eq!(catalogue.countries.len(), 2);
        assert_eq!(catalogue.countries[0].alpha3_code, "ESP");
        assert_eq!(catalogue.countries[0].display_name("es"), "España");
        // Missing region/subregion decode as empty strings.
        assert_eq!(catalogue.countries[1].region, "");
    }

    #[test]
    fn rejects_malformed_dataset() {
        assert!(CountryCatalogue::from_json("{\"not\": \"an array\"}").is_err());
    }

    #[test]
    fn display_name_falls_back_through_null_translations() {
        let country = spain();
        assert_eq!(country.display_name("es"), "España");
        assert_eq!(country.display_name("de"), "Spain");
        assert_eq!(country.display_name("fr"), "Spain");
    }

    #[test]
    fn audio_lang_falls_back_to_english() {
        let country = spain();
        assert_eq!(country.audio_lang("es"), "es");
        assert_eq!(country.audio_lang("de"), "en");
        assert_eq!(country.audio_lang("fr"), "en");
    }
}
