//! Domain model for family trees
//!
//! Members, typed relationships between them, and the tree container.
//! Derived structures (the rooted `TreeNode` view, positioned layout nodes)
//! live in [`crate::graph`] — they are rebuilt per edit and never persisted.

pub mod member;
pub mod relationship;
pub mod tree;

pub use member::{Gender, Member};
pub use relationship::{Relationship, RelationshipDetails, RelationshipKind};
pub use tree::FamilyTree;
