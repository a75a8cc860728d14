//! Session state decoded from the request's key-value record.
//!
//! Every request carries the complete session in its query: the options, the
//! set of countries already found, and the letters struck for the current
//! country. The codec here is the single authority on what survives a
//! transition.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::constants::{DEFAULT_LANG, DEFAULT_POOL_SIZE};
use crate::text::is_alphabet_letter;

const LANG_KEY: &str = "lang";
const SEED_KEY: &str = "seed";
const SIZE_KEY: &str = "size";
const REGION_KEY: &str = "region";
const COUNTRY_KEY: &str = "country";
const FOUND_PREFIX: &str = "found_";
const PRESS_PREFIX: &str = "press_";
const FOUND_CODE_LEN: usize = 3;

/// Fully decoded session state.
///
/// The raw record's `found_<code>` and `press_<letter>` flags are collected
/// into typed sets once, here at the boundary; nothing downstream re-scans
/// keys by pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Language for country names and audio.
    pub lang: String,
    /// Seed string behind the session's pool ordering; generated on first
    /// contact when absent.
    pub seed: Option<String>,
    /// Maximum pool size; zero means the whole catalogue.
    pub size: usize,
    /// Optional region or subregion filter for the next pick.
    pub region: Option<String>,
    /// Code of the country currently being guessed.
    pub country: Option<String>,
    /// Countries already spelled, by `alpha3` code.
    pub found: BTreeSet<String>,
    /// Keyboard letters struck for the current country only.
    pub pressed: BTreeSet<char>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
            seed: None,
            size: DEFAULT_POOL_SIZE,
            region: None,
            country: None,
            found: BTreeSet::new(),
            pressed: BTreeSet::new(),
        }
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

fn parse_size(raw: &str) -> usize {
    if raw.is_empty() {
        return 0;
    }
    raw.parse().unwrap_or(DEFAULT_POOL_SIZE)
}

impl SessionOptions {
    /// Decode a raw query record, applying defaults and collecting the
    /// `found_*` / `press_*` flag sets. Flags match by shape only: exactly
    /// three characters after `found_`, exactly one after `press_`.
    #[must_use]
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        let mut options = Self::default();
        if let Some(lang) = non_empty(query.get(LANG_KEY)) {
            options.lang = lang.to_string();
        }
        options.seed = non_empty(query.get(SEED_KEY)).map(str::to_string);
        options.region = non_empty(query.get(REGION_KEY)).map(str::to_string);
        options.country = non_empty(query.get(COUNTRY_KEY)).map(str::to_string);
        if let Some(size) = query.get(SIZE_KEY) {
            options.size = parse_size(size);
        }
        for key in query.keys() {
            if let Some(code) = key.strip_prefix(FOUND_PREFIX) {
                if code.chars().count() == FOUND_CODE_LEN {
                    options.found.insert(code.to_string());
                }
            } else if let Some(rest) = key.strip_prefix(PRESS_PREFIX) {
                let mut chars = rest.chars();
                if let (Some(letter), None) = (chars.next(), chars.next()) {
                    options.pressed.insert(letter);
                }
            }
        }
        options
    }

    /// Project the persistent subset of state forward for the next request:
    /// `lang`, `size`, `seed`, `region`, and every found flag.
    ///
    /// The active country and all pressed letters are deliberately dropped;
    /// a country change or full reveal resets per-letter progress. Redirects
    /// compose this projection with at most a fresh `country` value.
    #[must_use]
    pub fn persistent_query(&self) -> BTreeMap<String, String> {
        let mut query = BTreeMap::new();
        query.insert(LANG_KEY.to_string(), self.lang.clone());
        query.insert(SIZE_KEY.to_string(), self.size.to_string());
        if let Some(seed) = &self.seed {
            query.insert(SEED_KEY.to_string(), seed.clone());
        }
        if let Some(region) = &self.region {
            query.insert(REGION_KEY.to_string(), region.clone());
        }
        for code in &self.found {
            query.insert(format!("{FOUND_PREFIX}{code}"), "true".to_string());
        }
        query
    }

    /// New state with `code` recorded as found. Builds a fresh record rather
    /// than mutating in place, keeping the reducer referentially
    /// transparent.
    #[must_use]
    pub fn with_found(&self, code: &str) -> Self {
        let mut next = self.clone();
        next.found.insert(code.to_string());
        next
    }

    /// Whether this country code has already been spelled.
    #[must_use]
    pub fn has_found(&self, code: &str) -> bool {
        self.found.contains(code)
    }

    /// True when every alphabet letter of the normalized `spelling` has a
    /// pressed key. Non-alphabet characters never block the win.
    #[must_use]
    pub fn is_spelled(&self, spelling: &str) -> bool {
        spelling
            .chars()
            .filter(|c| is_alphabet_letter(*c))
            .all(|c| self.pressed.contains(&c))
    }
}
