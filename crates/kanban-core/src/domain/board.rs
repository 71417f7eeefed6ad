//! Board Entity
//!
//! Top-level container; owns its columns and, through them, its tasks.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::id::Id;

/// A named board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: Id,
    pub title: String,
}

impl Board {
    pub fn new(id: impl Into<Id>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Title given to the `ordinal`-th board (1-based)
    pub fn default_title(ordinal: usize) -> String {
        format!("Board {}", ordinal)
    }
}

impl Entity for Board {
    fn id(&self) -> &Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_json_shape() {
        let board = Board::new(4821u32, "Board 1");
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"{"id":4821,"title":"Board 1"}"#);
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }
}
