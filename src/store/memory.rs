//! In-memory reference stores
//!
//! Members and edges live in plain `Vec`s behind an `RwLock`; family trees
//! are small (tens to low thousands of nodes), so linear scans are fine and
//! insertion order — which the root-selection fallback depends on — comes
//! for free. Pair writes take a single write guard across both halves, so
//! the bidirectional invariant can never be observed half-applied.

use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::model::{Member, Relationship, RelationshipKind};

use super::{MemberStore, RelationshipStore};

/// In-memory member store
#[derive(Debug, Default)]
pub struct MemoryMemberStore {
    members: RwLock<Vec<Member>>,
}

impl MemoryMemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.read().is_empty()
    }
}

impl MemberStore for MemoryMemberStore {
    fn members_for_tree(&self, tree_id: Uuid) -> Vec<Member> {
        self.members
            .read()
            .iter()
            .filter(|m| m.tree_id == tree_id)
            .cloned()
            .collect()
    }

    fn get(&self, id: Uuid) -> Option<Member> {
        self.members.read().iter().find(|m| m.id == id).cloned()
    }

    fn upsert(&self, member: Member) {
        let mut members = self.members.write();
        match members.iter_mut().find(|m| m.id == member.id) {
            Some(existing) => *existing = member,
            None => members.push(member),
        }
    }

    fn set_generation(&self, id: Uuid, generation: i32) {
        let mut members = self.members.write();
        match members.iter_mut().find(|m| m.id == id) {
            Some(member) => member.generation = generation,
            None => {
                tracing::debug!(member = %id, "generation update for unknown member, skipping");
            }
        }
    }
}

/// In-memory relationship store
///
/// Holds both directions of every logical relationship as separate edges.
#[derive(Debug, Default)]
pub struct MemoryRelationshipStore {
    edges: RwLock<Vec<Relationship>>,
}

impl MemoryRelationshipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total stored edges (two per logical relationship)
    pub fn edge_count(&self) -> usize {
        self.edges.read().len()
    }
}

impl RelationshipStore for MemoryRelationshipStore {
    fn relationships_of(&self, member_id: Uuid) -> Vec<Relationship> {
        self.edges
            .read()
            .iter()
            .filter(|e| e.member_id == member_id)
            .cloned()
            .collect()
    }

    fn relationships_for_tree(&self, tree_id: Uuid) -> Vec<Relationship> {
        self.edges
            .read()
            .iter()
            .filter(|e| e.tree_id == tree_id)
            .cloned()
            .collect()
    }

    fn contains(&self, member_id: Uuid, related_id: Uuid, kind: RelationshipKind) -> bool {
        self.edges
            .read()
            .iter()
            .any(|e| e.member_id == member_id && e.related_id == related_id && e.kind == kind)
    }

    fn create_pair(
        &self,
        forward: Relationship,
    ) -> Result<(Relationship, Relationship), StoreError> {
        let mut edges = self.edges.write();

        // Re-checked under the write guard: two racing creations of the
        // same triple must not both succeed.
        let duplicate = edges.iter().any(|e| {
            e.member_id == forward.member_id
                && e.related_id == forward.related_id
                && e.kind == forward.kind
        });
        if duplicate {
            return Err(StoreError::DuplicatePair {
                member: forward.member_id,
                related: forward.related_id,
                kind: forward.kind,
            });
        }

        let inverse = forward.mirrored();
        edges.push(forward.clone());
        edges.push(inverse.clone());
        Ok((forward, inverse))
    }

    fn delete_pair(&self, member_id: Uuid, related_id: Uuid, kind: RelationshipKind) -> bool {
        let mut edges = self.edges.write();
        let before = edges.len();
        edges.retain(|e| {
            let is_forward =
                e.member_id == member_id && e.related_id == related_id && e.kind == kind;
            let is_inverse = e.member_id == related_id
                && e.related_id == member_id
                && e.kind == kind.inverse();
            !(is_forward || is_inverse)
        });
        edges.len() < before
    }
}
