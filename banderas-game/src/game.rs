//! The request reducer: recomputes the whole game from the catalogue and
//! the decoded session record, with no memory between calls.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::data::Country;
use crate::redirect::Redirect;
use crate::regions::{RegionIndex, build_region_index};
use crate::seed::seed_code;
use crate::shuffle::session_pool;
use crate::state::SessionOptions;
use crate::text::to_simple_case;

const COUNTRY_KEY: &str = "country";

/// Everything the presentation layer needs to draw the current puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPayload {
    /// Country currently being guessed.
    pub country: Country,
    /// Remaining countries tallied by region and subregion.
    pub regions: RegionIndex,
    /// Decoded session state, with the seed materialized.
    pub options: SessionOptions,
}

/// Result of resolving one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The hosting layer should navigate to `Redirect::location()`.
    Redirect(Redirect),
    /// Draw the puzzle for the current country.
    Render(RenderPayload),
    /// Nothing to show; the catalogue yielded no eligible country.
    Empty,
}

/// Resolve one request against the catalogue.
///
/// All state arrives in `options`; repeated calls with identical inputs
/// (including the RNG stream) are identical. The live `rng` drives
/// next-country selection and fresh seed generation only; pool ordering
/// comes from the seeded shuffle, and the two must stay separate so the
/// pool is reproducible while puzzle advancement is not.
pub fn resolve_request<R: Rng>(
    catalogue: &[Country],
    options: &SessionOptions,
    rng: &mut R,
) -> GameOutcome {
    let mut options = options.clone();
    let seed = options
        .seed
        .get_or_insert_with(|| seed_code(rng.next_u64()))
        .clone();

    let pool = session_pool(catalogue, &seed, options.size);
    let remaining: Vec<&Country> = pool
        .iter()
        .filter(|c| !options.has_found(&c.alpha3_code))
        .collect();

    if remaining.is_empty() {
        log::debug!("session pool exhausted, redirecting to game over");
        return GameOutcome::Redirect(Redirect::to_game_over());
    }

    let eligible = eligible_countries(&remaining, options.region.as_deref());

    let Some(country) = eligible
        .iter()
        .copied()
        .find(|c| options.country.as_deref() == Some(c.alpha3_code.as_str()))
    else {
        // Covers both a fresh session and an unknown or already-found code;
        // reselection self-heals either way.
        return next_country_redirect(&eligible, &options, rng);
    };

    let spelling = to_simple_case(country.display_name(&options.lang));
    if options.is_spelled(&spelling) {
        let advanced = options.with_found(&country.alpha3_code);
        let remaining: Vec<&Country> = remaining
            .into_iter()
            .filter(|c| c.alpha3_code != country.alpha3_code)
            .collect();
        if remaining.is_empty() {
            log::debug!("last country {} spelled, game over", country.alpha3_code);
            return GameOutcome::Redirect(Redirect::to_game_over());
        }
        let eligible = eligible_countries(&remaining, advanced.region.as_deref());
        return next_country_redirect(&eligible, &advanced, rng);
    }

    let regions = build_region_index(remaining);
    GameOutcome::Render(RenderPayload {
        country: country.clone(),
        regions,
        options,
    })
}

/// Remaining countries narrowed to the region filter, matched against both
/// region and subregion names. Falls back to the whole remaining set when
/// the filter matches nothing, so a stale or exhausted region link cannot
/// dead-end the session.
fn eligible_countries<'a>(remaining: &[&'a Country], region: Option<&str>) -> Vec<&'a Country> {
    if let Some(region) = region {
        let filtered: Vec<&Country> = remaining
            .iter()
            .copied()
            .filter(|c| c.region == region || c.subregion == region)
            .collect();
        if !filtered.is_empty() {
            return filtered;
        }
        log::warn!("region filter {region:?} matches nothing, using the whole pool");
    }
    remaining.to_vec()
}

/// Pick the next country uniformly at random and redirect to it, carrying
/// only the persistent slice of the session forward.
fn next_country_redirect<R: Rng>(
    eligible: &[&Country],
    options: &SessionOptions,
    rng: &mut R,
) -> GameOutcome {
    if eligible.is_empty() {
        log::warn!("no eligible country to pick from");
        return GameOutcome::Empty;
    }
    let picked = eligible[rng.gen_range(0..eligible.len())];
    let mut query = options.persistent_query();
    query.insert(COUNTRY_KEY.to_string(), picked.alpha3_code.clone());
    GameOutcome::Redirect(Redirect::to_game(query))
}
