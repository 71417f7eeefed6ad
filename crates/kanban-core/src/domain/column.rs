//! Column Entity
//!
//! Columns carry an explicit `boardId`. Their id is still prefixed with the
//! owning board id, which lets slots written without `boardId` be read back.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::id::Id;

/// A column inside a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredColumn")]
pub struct Column {
    pub id: Id,
    pub board_id: Id,
    pub title: String,
}

impl Column {
    /// Create a column for `board_id`, composing the id from the board id
    pub fn new(board_id: &Id, n: u32, title: impl Into<String>) -> Self {
        Self {
            id: Id::composite(board_id, n),
            board_id: board_id.clone(),
            title: title.into(),
        }
    }

    /// Title given to the `ordinal`-th column of a board (1-based)
    pub fn default_title(ordinal: usize) -> String {
        format!("Column {}", ordinal)
    }

    pub fn belongs_to(&self, board_id: &Id) -> bool {
        &self.board_id == board_id
    }
}

impl Entity for Column {
    fn id(&self) -> &Id {
        &self.id
    }
}

/// On-disk column, `boardId` optional
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredColumn {
    id: Id,
    #[serde(default)]
    board_id: Option<Id>,
    title: String,
}

impl TryFrom<StoredColumn> for Column {
    type Error = String;

    fn try_from(raw: StoredColumn) -> Result<Self, Self::Error> {
        let board_id = match raw.board_id {
            Some(board_id) => board_id,
            None => raw
                .id
                .split_owner()
                .map(|(owner, _)| owner)
                .ok_or_else(|| format!("column {} has no board prefix", raw.id))?,
        };
        Ok(Column {
            id: raw.id,
            board_id,
            title: raw.title,
        })
    }
}
