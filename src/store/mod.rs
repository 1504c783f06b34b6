//! Store seams for members and relationship edges
//!
//! The graph core talks to its persistence collaborators through these two
//! traits; the in-memory implementations in [`memory`] are the reference
//! behavior and what the tests run against. A real backend must preserve the
//! same write-time guarantees, in particular that [`RelationshipStore::create_pair`]
//! and [`RelationshipStore::delete_pair`] are atomic over the forward +
//! inverse edge pair.

pub mod memory;

use uuid::Uuid;

use crate::error::StoreError;
use crate::model::{Member, Relationship, RelationshipKind};

pub use memory::{MemoryMemberStore, MemoryRelationshipStore};

/// Read/write access to members
pub trait MemberStore {
    /// All members of a tree, in insertion order
    ///
    /// Input order matters: the tree builder's root fallback is "first
    /// member in input order", which is user-visible.
    fn members_for_tree(&self, tree_id: Uuid) -> Vec<Member>;

    fn get(&self, id: Uuid) -> Option<Member>;

    fn upsert(&self, member: Member);

    /// Update a member's generation; unknown ids are a silent no-op
    /// (generation propagation tolerates concurrent deletion).
    fn set_generation(&self, id: Uuid, generation: i32);
}

/// Read/write access to relationship edges
pub trait RelationshipStore {
    /// All edges whose forward perspective is `member_id`
    fn relationships_of(&self, member_id: Uuid) -> Vec<Relationship>;

    /// Every stored edge of a tree, both halves of every pair
    ///
    /// Answered from the edges alone, so edges survive here even when their
    /// forward member has gone missing from the member store.
    fn relationships_for_tree(&self, tree_id: Uuid) -> Vec<Relationship>;

    /// Whether the exact (member, related, kind) triple exists
    fn contains(&self, member_id: Uuid, related_id: Uuid, kind: RelationshipKind) -> bool;

    /// Atomically insert the forward edge and its derived inverse
    ///
    /// Either both edges exist afterwards or neither does; a racing write of
    /// the same triple fails with [`StoreError::DuplicatePair`].
    fn create_pair(&self, forward: Relationship)
        -> Result<(Relationship, Relationship), StoreError>;

    /// Atomically remove both halves of a logical relationship
    ///
    /// Returns `true` when the pair was present and removed.
    fn delete_pair(&self, member_id: Uuid, related_id: Uuid, kind: RelationshipKind) -> bool;
}
