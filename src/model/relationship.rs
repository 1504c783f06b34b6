//! Relationship model — directed typed edges between members
//!
//! Every real-world relationship is stored as a *pair* of directed edges:
//! the forward edge and its inverse. For the asymmetric pair PARENT/CHILD
//! the inverse swaps the kind; the symmetric kinds (SPOUSE, SIBLING,
//! EX_SPOUSE) mirror with the same kind and swapped endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of a directed relationship edge
///
/// Directionality reads from the owning member's perspective:
/// `(member = A, related = B, Parent)` means "B is A's parent".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    Parent,
    Child,
    Spouse,
    Sibling,
    ExSpouse,
}

impl RelationshipKind {
    /// Kind of the mirrored edge in a bidirectional pair
    pub fn inverse(self) -> Self {
        match self {
            RelationshipKind::Parent => RelationshipKind::Child,
            RelationshipKind::Child => RelationshipKind::Parent,
            RelationshipKind::Spouse => RelationshipKind::Spouse,
            RelationshipKind::Sibling => RelationshipKind::Sibling,
            RelationshipKind::ExSpouse => RelationshipKind::ExSpouse,
        }
    }

    /// Symmetric kinds are their own inverse
    pub fn is_symmetric(self) -> bool {
        self.inverse() == self
    }

    /// Parse a kind from a relationship-type string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PARENT" => Some(RelationshipKind::Parent),
            "CHILD" => Some(RelationshipKind::Child),
            "SPOUSE" => Some(RelationshipKind::Spouse),
            "SIBLING" => Some(RelationshipKind::Sibling),
            "EX_SPOUSE" | "EXSPOUSE" => Some(RelationshipKind::ExSpouse),
            _ => None,
        }
    }

    /// Display label for UI rendering
    pub fn display_label(&self) -> &'static str {
        match self {
            RelationshipKind::Parent => "parent",
            RelationshipKind::Child => "child",
            RelationshipKind::Spouse => "spouse",
            RelationshipKind::Sibling => "sibling",
            RelationshipKind::ExSpouse => "ex-spouse",
        }
    }
}

/// Optional attributes supplied when a relationship is created
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationshipDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A directed, typed edge between two members
///
/// The triple (member_id, related_id, kind) is unique within a store;
/// self-edges are forbidden at validation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Relationship {
    pub id: Uuid,
    pub tree_id: Uuid,
    pub member_id: Uuid,
    pub related_id: Uuid,
    pub kind: RelationshipKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Relationship {
    pub fn new(tree_id: Uuid, member_id: Uuid, related_id: Uuid, kind: RelationshipKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            tree_id,
            member_id,
            related_id,
            kind,
            start_date: None,
            end_date: None,
            start_place: None,
            notes: None,
        }
    }

    pub fn with_details(mut self, details: RelationshipDetails) -> Self {
        self.start_date = details.start_date;
        self.start_place = details.start_place;
        self.notes = details.notes;
        self
    }

    /// Derive the mirrored edge of the bidirectional pair
    ///
    /// Swapped endpoints, inverse kind, fresh id, same attributes.
    pub fn mirrored(&self) -> Relationship {
        Relationship {
            id: Uuid::new_v4(),
            tree_id: self.tree_id,
            member_id: self.related_id,
            related_id: self.member_id,
            kind: self.kind.inverse(),
            start_date: self.start_date,
            end_date: self.end_date,
            start_place: self.start_place.clone(),
            notes: self.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_mapping() {
        assert_eq!(RelationshipKind::Parent.inverse(), RelationshipKind::Child);
        assert_eq!(RelationshipKind::Child.inverse(), RelationshipKind::Parent);
        assert_eq!(RelationshipKind::Spouse.inverse(), RelationshipKind::Spouse);
        assert_eq!(
            RelationshipKind::Sibling.inverse(),
            RelationshipKind::Sibling
        );
        assert_eq!(
            RelationshipKind::ExSpouse.inverse(),
            RelationshipKind::ExSpouse
        );
    }

    #[test]
    fn test_symmetry() {
        assert!(!RelationshipKind::Parent.is_symmetric());
        assert!(!RelationshipKind::Child.is_symmetric());
        assert!(RelationshipKind::Spouse.is_symmetric());
        assert!(RelationshipKind::Sibling.is_symmetric());
        assert!(RelationshipKind::ExSpouse.is_symmetric());
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            RelationshipKind::parse("ex_spouse"),
            Some(RelationshipKind::ExSpouse)
        );
        assert_eq!(
            RelationshipKind::parse("PARENT"),
            Some(RelationshipKind::Parent)
        );
        assert_eq!(RelationshipKind::parse("cousin"), None);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(RelationshipKind::Parent.display_label(), "parent");
        assert_eq!(RelationshipKind::ExSpouse.display_label(), "ex-spouse");
        // Labels must parse back to the kind they came from.
        for kind in [
            RelationshipKind::Parent,
            RelationshipKind::Child,
            RelationshipKind::Spouse,
            RelationshipKind::Sibling,
            RelationshipKind::ExSpouse,
        ] {
            let label = kind.display_label().replace('-', "_");
            assert_eq!(RelationshipKind::parse(&label), Some(kind));
        }
    }

    #[test]
    fn test_mirrored_edge() {
        let tree = Uuid::new_v4();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let forward = Relationship::new(tree, a, b, RelationshipKind::Parent);
        let inverse = forward.mirrored();
        assert_eq!(inverse.tree_id, tree);
        assert_eq!(inverse.member_id, b);
        assert_eq!(inverse.related_id, a);
        assert_eq!(inverse.kind, RelationshipKind::Child);
        assert_ne!(inverse.id, forward.id);
    }
}
