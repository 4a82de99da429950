use serde::{Deserialize, Serialize};

use crate::models::review::Review;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Author {
    pub id: String,       // Server-assigned ID
    pub name: String,     // Display name of the reviewer
    #[serde(default)]
    pub verified: bool,   // Whether the catalog marks this reviewer as verified
    /// Review history, present only when the query selected it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_parses_without_history() {
        let json = r#"{"id":"a1","name":"yoshi","verified":false}"#;
        let author: Author = serde_json::from_str(json).unwrap();
        assert_eq!(author.name, "yoshi");
        assert!(!author.verified);
        assert!(author.reviews.is_none());
    }

    #[test]
    fn author_parses_with_review_history() {
        let json = r#"{
            "id": "a1",
            "name": "peach",
            "verified": true,
            "reviews": [
                {"id": "r1", "rating": 4, "content": "solid", "game": {"id": "g1", "title": "Hades", "platform": []}}
            ]
        }"#;
        let author: Author = serde_json::from_str(json).unwrap();
        let reviews = author.reviews.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].game.as_ref().unwrap().title, "Hades");
    }
}
