//! Tree structure builder — rooted hierarchical view over the edge set
//!
//! Consumes the full member and edge set of one tree plus a root choice and
//! produces a single rooted `TreeNode` tree for rendering. The build is
//! children-first and never walks upward from the chosen root; an explicit
//! visited set (not call-stack discipline) guarantees termination on cyclic
//! or doubly-referenced data, which the validator cannot see.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use uuid::Uuid;

use crate::model::{Member, Relationship, RelationshipKind};

/// One node of the derived tree view
///
/// Ephemeral: rebuilt from scratch whenever members or edges change, never
/// mutated between rebuilds. `x`/`y` are written by the layout engine;
/// `parents` exists for consumers that attach ancestor context but is left
/// empty by the children-first build.
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode {
    pub member: Member,
    pub parents: Vec<TreeNode>,
    pub spouses: Vec<Member>,
    pub children: Vec<TreeNode>,
    pub siblings: Vec<Member>,
    /// Distance from the chosen root (root = 0)
    pub depth: u32,
    pub x: f32,
    pub y: f32,
}

impl TreeNode {
    fn bare(member: Member, depth: u32) -> Self {
        Self {
            member,
            parents: Vec::new(),
            spouses: Vec::new(),
            children: Vec::new(),
            siblings: Vec::new(),
            depth,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Number of nodes in this subtree, self included
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::node_count)
            .sum::<usize>()
    }
}

/// Builds the rooted view for one tree's members and edges
pub struct TreeBuilder<'a> {
    members: &'a [Member],
    by_id: HashMap<Uuid, &'a Member>,
    outgoing: HashMap<Uuid, Vec<&'a Relationship>>,
    /// Members that appear as the `related` of a CHILD edge, i.e. are
    /// somebody's child — excluded from root candidacy.
    child_targets: HashSet<Uuid>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(members: &'a [Member], edges: &'a [Relationship]) -> Self {
        let by_id = members.iter().map(|m| (m.id, m)).collect();

        let mut outgoing: HashMap<Uuid, Vec<&Relationship>> = HashMap::new();
        let mut child_targets = HashSet::new();
        for edge in edges {
            outgoing.entry(edge.member_id).or_default().push(edge);
            if edge.kind == RelationshipKind::Child {
                child_targets.insert(edge.related_id);
            }
        }

        Self {
            members,
            by_id,
            outgoing,
            child_targets,
        }
    }

    /// Build the rooted view; `None` only when there are no members at all
    ///
    /// A `root_hint` that resolves to an existing member overrides the
    /// selection heuristic entirely; a stale hint is ignored.
    pub fn build(&self, root_hint: Option<Uuid>) -> Option<TreeNode> {
        if self.members.is_empty() {
            return None;
        }

        let root = root_hint
            .filter(|id| self.by_id.contains_key(id))
            .unwrap_or_else(|| self.select_root());

        let root_member = self.by_id.get(&root).copied()?;
        let mut visited = HashSet::new();
        let node = self.build_node(root_member, 0, &mut visited);
        tracing::debug!(
            root = %root,
            nodes = node.node_count(),
            "tree structure rebuilt"
        );
        Some(node)
    }

    /// Root heuristic: among members that are nobody's child, the one with
    /// the minimum generation (first in input order on ties); when every
    /// member is somebody's child, the first member in input order.
    ///
    /// Arbitrary but user-visible — it decides which member renders at the
    /// top, so the tie-break must stay stable.
    fn select_root(&self) -> Uuid {
        self.members
            .iter()
            .filter(|m| !self.child_targets.contains(&m.id))
            .min_by_key(|m| m.generation)
            .unwrap_or(&self.members[0])
            .id
    }

    fn build_node(&self, member: &Member, depth: u32, visited: &mut HashSet<Uuid>) -> TreeNode {
        // Revisited id: degenerate node, no recursion. Sole guard against
        // cyclic and doubly-referenced data.
        if !visited.insert(member.id) {
            return TreeNode::bare(member.clone(), depth);
        }

        let mut node = TreeNode::bare(member.clone(), depth);
        let Some(edges) = self.outgoing.get(&member.id) else {
            return node;
        };

        for edge in edges {
            match edge.kind {
                RelationshipKind::Spouse => {
                    if let Some(spouse) = self.by_id.get(&edge.related_id) {
                        node.spouses.push((*spouse).clone());
                    }
                }
                // Siblings stay leaves: expanding them would re-derive
                // their own subtrees.
                RelationshipKind::Sibling => {
                    if let Some(sibling) = self.by_id.get(&edge.related_id) {
                        node.siblings.push((*sibling).clone());
                    }
                }
                RelationshipKind::Child => {
                    if visited.contains(&edge.related_id) {
                        continue;
                    }
                    if let Some(child) = self.by_id.get(&edge.related_id).copied() {
                        node.children.push(self.build_node(child, depth + 1, visited));
                    }
                }
                RelationshipKind::Parent | RelationshipKind::ExSpouse => {}
            }
        }

        node
    }
}
