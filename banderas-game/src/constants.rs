//! Engine-wide defaults and route paths.

/// Language used when a request does not carry one.
pub const DEFAULT_LANG: &str = "es";

/// Pool size used when a request does not carry one.
pub const DEFAULT_POOL_SIZE: usize = 20;

/// Language the pronunciation audio falls back to when a country has no
/// translation for the session language.
pub const AUDIO_FALLBACK_LANG: &str = "en";

/// Path the hosting layer serves the puzzle page from.
pub const GAME_PATH: &str = "/";

/// Terminal destination once every country in the session pool is found.
pub const GAME_OVER_PATH: &str = "/gameover";
