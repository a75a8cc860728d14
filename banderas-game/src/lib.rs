//! Banderas Game Engine
//!
//! Platform-agnostic core logic for the Banderas geography spelling quiz.
//! Every request carries the complete session in a key-value record; the
//! engine recomputes the game from the country catalogue plus that record
//! and answers with a render payload or a redirect directive. No state
//! lives server-side, so concurrent sessions are isolated by construction.

pub mod constants;
pub mod data;
pub mod game;
pub mod paths;
pub mod redirect;
pub mod regions;
pub mod seed;
pub mod shuffle;
pub mod state;
pub mod text;

use std::collections::HashMap;

use rand::Rng;

// Re-export commonly used types
pub use data::{CatalogueError, Country, CountryCatalogue};
pub use game::{GameOutcome, RenderPayload, resolve_request};
pub use paths::{asset_path, country_audio_path, flag_image_path};
pub use redirect::Redirect;
pub use regions::{RegionIndex, build_region_index};
pub use seed::{hash_code, next_unit, seed_code};
pub use shuffle::{seeded_shuffle, session_pool};
pub use state::SessionOptions;
pub use text::{is_alphabet_letter, to_simple_case};

/// Trait for abstracting catalogue loading
/// Platform-specific implementations should provide this
pub trait CatalogueLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the country catalogue from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the catalogue cannot be loaded or parsed.
    fn load_catalogue(&self) -> Result<CountryCatalogue, Self::Error>;
}

/// Engine facade binding a catalogue source to the request reducer.
pub struct QuizEngine<L>
where
    L: CatalogueLoader,
{
    loader: L,
}

impl<L> QuizEngine<L>
where
    L: CatalogueLoader,
{
    /// Create a new engine with the provided catalogue loader
    pub const fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Resolve one request with thread-local randomness driving the
    /// next-country selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalogue cannot be loaded.
    pub fn resolve(
        &self,
        query: &HashMap<String, String>,
    ) -> Result<GameOutcome, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
    {
        self.resolve_with_rng(query, &mut rand::thread_rng())
    }

    /// Resolve one request with a caller-provided RNG, so harnesses can make
    /// next-country selection reproducible.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalogue cannot be loaded.
    pub fn resolve_with_rng<R: Rng>(
        &self,
        query: &HashMap<String, String>,
        rng: &mut R,
    ) -> Result<GameOutcome, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
    {
        let catalogue = self.loader.load_catalogue().map_err(Into::into)?;
        let options = SessionOptions::from_query(query);
        Ok(resolve_request(&catalogue.countries, &options, rng))
    }
}
