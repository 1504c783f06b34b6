//! Facade over the stores and the graph pipeline
//!
//! This is the surface the UI and persistence layers talk to: gated
//! relationship writes, pair deletion, and full tree rebuilds. Layout and
//! viewport are exposed directly ([`crate::LayoutEngine`],
//! [`crate::ViewportContext`]) since they carry no store state.

use uuid::Uuid;

use crate::error::GraphError;
use crate::graph::builder::{TreeBuilder, TreeNode};
use crate::graph::propagation::propagate_generation;
use crate::graph::validator;
use crate::model::{FamilyTree, Relationship, RelationshipDetails, RelationshipKind};
use crate::store::{MemberStore, RelationshipStore};

/// Relationship edits and tree rebuilds over a pair of stores
pub struct FamilyGraphService<M, R> {
    members: M,
    relationships: R,
}

impl<M: MemberStore, R: RelationshipStore> FamilyGraphService<M, R> {
    pub fn new(members: M, relationships: R) -> Self {
        Self {
            members,
            relationships,
        }
    }

    pub fn members(&self) -> &M {
        &self.members
    }

    pub fn relationships(&self) -> &R {
        &self.relationships
    }

    /// Validate and create one logical relationship
    ///
    /// On success both the forward and inverse edge exist, and the related
    /// member's generation has been adjusted one hop if needed. Rejections
    /// carry the human-readable reason; the caller may retry with different
    /// input.
    pub fn create_relationship(
        &self,
        member_id: Uuid,
        related_id: Uuid,
        kind: RelationshipKind,
        details: RelationshipDetails,
    ) -> Result<Relationship, GraphError> {
        let member = self
            .members
            .get(member_id)
            .ok_or(GraphError::MemberNotFound(member_id))?;
        let related = self
            .members
            .get(related_id)
            .ok_or(GraphError::MemberNotFound(related_id))?;

        let existing = self.relationships.relationships_of(member_id);
        let forward =
            Relationship::new(member.tree_id, member_id, related_id, kind).with_details(details);
        validator::validate(&forward, &existing, &member, &related)?;

        let (forward, _inverse) = self.relationships.create_pair(forward)?;

        if let Some(generation) = propagate_generation(&member, &related, kind) {
            self.members.set_generation(related_id, generation);
        }

        tracing::debug!(
            member = %member_id,
            related = %related_id,
            kind = ?kind,
            "relationship created"
        );
        Ok(forward)
    }

    /// Delete one logical relationship, both halves atomically
    ///
    /// Returns `true` when the pair existed and was removed.
    pub fn delete_relationship(
        &self,
        member_id: Uuid,
        related_id: Uuid,
        kind: RelationshipKind,
    ) -> bool {
        let removed = self.relationships.delete_pair(member_id, related_id, kind);
        if removed {
            tracing::debug!(
                member = %member_id,
                related = %related_id,
                kind = ?kind,
                "relationship deleted"
            );
        }
        removed
    }

    /// Rebuild the rooted view for a tree from the current member/edge set
    ///
    /// Full rebuild, O(n) per edit; `None` only for an empty tree.
    pub fn rebuild_tree(&self, tree_id: Uuid, root_hint: Option<Uuid>) -> Option<TreeNode> {
        let members = self.members.members_for_tree(tree_id);
        let edges = self.relationships.relationships_for_tree(tree_id);
        TreeBuilder::new(&members, &edges).build(root_hint)
    }

    /// Rebuild using the tree's own root hint
    pub fn rebuild_for(&self, tree: &FamilyTree) -> Option<TreeNode> {
        self.rebuild_tree(tree.id, tree.root_member_id)
    }
}
