//! Family tree container

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named family tree
///
/// `root_member_id` is a hint to the tree builder, not an invariant: when it
/// no longer resolves to an existing member the builder falls back to its
/// root-selection heuristic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FamilyTree {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_member_id: Option<Uuid>,
}

impl FamilyTree {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            root_member_id: None,
        }
    }
}
