//! Redirect directives handed to the hosting layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{GAME_OVER_PATH, GAME_PATH};

/// Instruction for the hosting layer to navigate elsewhere: an HTTP
/// `Location` in a request/response context, a client-side route change
/// when running without a server round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub path: String,
    pub query: BTreeMap<String, String>,
}

impl Redirect {
    /// Redirect back to the puzzle page carrying the given session query.
    #[must_use]
    pub fn to_game(query: BTreeMap<String, String>) -> Self {
        Self {
            path: GAME_PATH.to_string(),
            query,
        }
    }

    /// Terminal redirect once the session pool is exhausted.
    #[must_use]
    pub fn to_game_over() -> Self {
        Self {
            path: GAME_OVER_PATH.to_string(),
            query: BTreeMap::new(),
        }
    }

    /// Render the directive as a `Location` value: the path plus the
    /// URL-encoded query.
    #[must_use]
    pub fn location(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish();
        format!("{}?{}", self.path, encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_over_location_has_no_query() {
        assert_eq!(Redirect::to_game_over().location(), "/gameover");
    }

    #[test]
    fn location_url_encodes_the_query() {
        let query = BTreeMap::from([
            ("country".to_string(), "CIV".to_string()),
            ("region".to_string(), "Southern Europe".to_string()),
            ("seed".to_string(), "España".to_string()),
        ]);
        let location = Redirect::to_game(query).location();
        assert_eq!(
            location,
            "/?country=CIV&region=Southern+Europe&seed=Espa%C3%B1a"
        );
    }
}
