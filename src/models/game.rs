use serde::{Deserialize, Serialize};

use crate::models::review::Review;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Game {
    pub id: String,          // Server-assigned ID
    pub title: String,       // Game title
    #[serde(default)]
    pub platform: Vec<String>, // Platform names (e.g. "Switch", "PS5")
    /// Present only when the query selected reviews (the details page does,
    /// the list view does not).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}

/// Input shape for the `addGame` mutation (`AddGameInput`).
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct GameDraft {
    pub title: String,
    pub platform: Vec<String>,
}

/// Input shape for the `updateGame` mutation (`EditGameInput`).
/// `None` fields are left out of the JSON so the server keeps them as-is.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct GameEdits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Vec<String>>,
}

impl GameEdits {
    /// Edit touching only the title, used by the inline rename in the list.
    pub fn title_only(title: String) -> Self {
        Self {
            title: Some(title),
            platform: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_parses_without_reviews() {
        let json = r#"{"id":"1","title":"Hades","platform":["Switch","PC"]}"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.title, "Hades");
        assert_eq!(game.platform, vec!["Switch", "PC"]);
        assert!(game.reviews.is_none());
    }

    #[test]
    fn game_parses_with_nested_reviews() {
        let json = r#"{
            "id": "1",
            "title": "Hades",
            "platform": ["Switch"],
            "reviews": [
                {"id": "r1", "rating": 5, "content": "great", "author": {"id": "a1", "name": "mario", "verified": true}}
            ]
        }"#;
        let game: Game = serde_json::from_str(json).unwrap();
        let reviews = game.reviews.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].rating, 5);
        let author = reviews[0].author.as_ref().unwrap();
        assert!(author.verified);
    }

    #[test]
    fn edits_skip_unset_fields() {
        let edits = GameEdits::title_only("Celeste".to_string());
        let json = serde_json::to_string(&edits).unwrap();
        assert_eq!(json, r#"{"title":"Celeste"}"#);

        let full = GameEdits {
            title: Some("Celeste".to_string()),
            platform: Some(vec!["PC".to_string()]),
        };
        let value = serde_json::to_value(&full).unwrap();
        assert_eq!(value["platform"][0], "PC");
    }

    #[test]
    fn draft_serializes_to_add_game_input_shape() {
        let draft = GameDraft {
            title: "Outer Wilds".to_string(),
            platform: vec!["Xbox".to_string()],
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["title"], "Outer Wilds");
        assert_eq!(value["platform"][0], "Xbox");
        // No stray fields: the server rejects unknown input keys.
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
