//! Derived asset paths for the presentation and audio collaborators.
//!
//! The engine only computes these strings; fetching and playback stay with
//! the hosting layer.

use crate::data::Country;

/// Prefix-aware join for static assets.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/play` for a
/// subdirectory deployment), generated URLs are prefixed accordingly;
/// local builds fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

/// Flag artwork for a country.
#[must_use]
pub fn flag_image_path(country: &Country) -> String {
    asset_path(&format!("static/flags/{}.svg", country.alpha3_code))
}

/// Pronunciation clip for a country in the session language; the language
/// folds back to English when the country has no translation for it.
#[must_use]
pub fn country_audio_path(country: &Country, lang: &str) -> String {
    asset_path(&format!(
        "static/sounds/{}/{}.mp3",
        country.audio_lang(lang),
        country.alpha2_code
    ))
}
