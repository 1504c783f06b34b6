//! Layout engine — deterministic coordinates for the rooted tree view
//!
//! Single-pass post-order recursion with one shared horizontal cursor:
//! leaves are placed at the cursor and advance it; an internal node sits at
//! the midpoint of its first and last child's x. That midpoint rule is an
//! approximation — subtrees of very different widths can overlap — and is
//! kept as-is for compatibility rather than replaced with a tidy-tree
//! algorithm. The computation is pure: identical inputs always produce
//! identical coordinates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::builder::TreeNode;

/// Spacing configuration for the tree layout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal spacing between sibling subtrees
    pub sibling_spacing: f32,
    /// Vertical spacing between generations
    pub level_spacing: f32,
    /// Node width
    pub node_width: f32,
    /// Node height
    pub node_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sibling_spacing: 40.0,
            level_spacing: 120.0,
            node_width: 160.0,
            node_height: 60.0,
        }
    }
}

/// Flattened, post-order output of one layout pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PositionedNode {
    pub member_id: Uuid,
    pub label: String,
    pub depth: u32,
    pub x: f32,
    pub y: f32,
}

/// Axis-aligned bounding box in layout space
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LayoutBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl LayoutBounds {
    /// Zero-sized rectangle anchored at the origin
    pub const ZERO: LayoutBounds = LayoutBounds {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 0.0,
    };

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Grow the rectangle by `margin` on every side
    pub fn expanded(&self, margin: f32) -> LayoutBounds {
        LayoutBounds {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// Whether a `(x, y, w, h)` box intersects this rectangle
    pub fn intersects_box(&self, x: f32, y: f32, w: f32, h: f32) -> bool {
        x <= self.max_x && x + w >= self.min_x && y <= self.max_y && y + h >= self.min_y
    }
}

/// Computes absolute positions for a built tree
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Assign coordinates to every node and return the positioned sequence
    /// (post-order) plus the overall bounding box
    pub fn layout(&self, root: &mut TreeNode) -> (Vec<PositionedNode>, LayoutBounds) {
        let mut cursor = 0.0;
        let mut positioned = Vec::new();
        self.place(root, 0.0, &mut cursor, &mut positioned);
        let bounds = self.bounds_of(&positioned);
        (positioned, bounds)
    }

    fn place(
        &self,
        node: &mut TreeNode,
        y: f32,
        cursor: &mut f32,
        out: &mut Vec<PositionedNode>,
    ) {
        if node.children.is_empty() {
            node.x = *cursor;
            *cursor += self.config.node_width + self.config.sibling_spacing;
        } else {
            let mut first_x = 0.0;
            let mut last_x = 0.0;
            for (i, child) in node.children.iter_mut().enumerate() {
                self.place(child, y + self.config.level_spacing, cursor, out);
                if i == 0 {
                    first_x = child.x;
                }
                last_x = child.x;
            }
            // Midpoint of the extreme children, not the mean of all of them
            // and not subtree-width aware.
            node.x = (first_x + last_x) / 2.0;
        }
        node.y = y;

        out.push(PositionedNode {
            member_id: node.member.id,
            label: node.member.display_name(),
            depth: node.depth,
            x: node.x,
            y: node.y,
        });
    }

    /// Bounding box over positioned nodes; empty input gives the degenerate
    /// zero-sized rectangle at the origin
    pub fn bounds_of(&self, nodes: &[PositionedNode]) -> LayoutBounds {
        let mut iter = nodes.iter();
        let Some(first) = iter.next() else {
            return LayoutBounds::ZERO;
        };

        let mut bounds = LayoutBounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x + self.config.node_width,
            max_y: first.y + self.config.node_height,
        };
        for node in iter {
            bounds.min_x = bounds.min_x.min(node.x);
            bounds.min_y = bounds.min_y.min(node.y);
            bounds.max_x = bounds.max_x.max(node.x + self.config.node_width);
            bounds.max_y = bounds.max_y.max(node.y + self.config.node_height);
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::TreeBuilder;
    use crate::model::{Member, Relationship, RelationshipKind};

    fn family(children: usize) -> (Vec<Member>, Vec<Relationship>) {
        let tree = Uuid::new_v4();
        let mut members = vec![Member::new(tree, "root")];
        let mut edges = Vec::new();
        for i in 0..children {
            let child = Member::new(tree, format!("c{i}"));
            edges.push(Relationship::new(
                tree,
                members[0].id,
                child.id,
                RelationshipKind::Child,
            ));
            members.push(child);
        }
        (members, edges)
    }

    #[test]
    fn test_single_node_at_origin() {
        let (members, edges) = family(0);
        let mut root = TreeBuilder::new(&members, &edges).build(None).unwrap();
        let engine = LayoutEngine::new();
        let (nodes, bounds) = engine.layout(&mut root);

        assert_eq!(nodes.len(), 1);
        assert_eq!((nodes[0].x, nodes[0].y), (0.0, 0.0));
        assert_eq!(
            bounds,
            LayoutBounds {
                min_x: 0.0,
                min_y: 0.0,
                max_x: engine.config().node_width,
                max_y: engine.config().node_height,
            }
        );
    }

    #[test]
    fn test_parent_at_midpoint_of_two_leaves() {
        let (members, edges) = family(2);
        let mut root = TreeBuilder::new(&members, &edges).build(None).unwrap();
        let engine = LayoutEngine::new();
        let (nodes, _) = engine.layout(&mut root);

        // Post-order: both children first, root last.
        assert_eq!(nodes.len(), 3);
        let root_pos = &nodes[2];
        assert_eq!(root_pos.member_id, members[0].id);
        assert_eq!(root_pos.x, (nodes[0].x + nodes[1].x) / 2.0);
        assert_eq!(nodes[1].x - nodes[0].x, 160.0 + 40.0);
        assert_eq!(nodes[0].y, engine.config().level_spacing);
        assert_eq!(root_pos.y, 0.0);
    }

    #[test]
    fn test_midpoint_of_extremes_not_mean() {
        let (members, edges) = family(3);
        let mut root = TreeBuilder::new(&members, &edges).build(None).unwrap();
        let engine = LayoutEngine::new();
        let (nodes, _) = engine.layout(&mut root);

        assert_eq!(nodes.len(), 4);
        let leaves = &nodes[..3];
        let root_pos = &nodes[3];
        // Same as the mean for evenly spaced leaves, but defined by the
        // extremes: first and last only.
        assert_eq!(root_pos.x, (leaves[0].x + leaves[2].x) / 2.0);
    }

    #[test]
    fn test_empty_bounds_degenerate_at_origin() {
        let engine = LayoutEngine::new();
        let bounds = engine.bounds_of(&[]);
        assert_eq!(bounds, LayoutBounds::ZERO);
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let (members, edges) = family(3);
        let engine = LayoutEngine::new();

        let mut a = TreeBuilder::new(&members, &edges).build(None).unwrap();
        let mut b = TreeBuilder::new(&members, &edges).build(None).unwrap();
        assert_eq!(engine.layout(&mut a), engine.layout(&mut b));
    }

    #[test]
    fn test_custom_spacing_applied() {
        let (members, edges) = family(2);
        let mut root = TreeBuilder::new(&members, &edges).build(None).unwrap();
        let config = LayoutConfig {
            sibling_spacing: 10.0,
            level_spacing: 50.0,
            node_width: 100.0,
            node_height: 30.0,
        };
        let (nodes, _) = LayoutEngine::with_config(config).layout(&mut root);

        assert_eq!(nodes[1].x - nodes[0].x, 110.0);
        assert_eq!(nodes[0].y, 50.0);
    }

    #[test]
    fn test_bounds_intersection() {
        let bounds = LayoutBounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 100.0,
            max_y: 100.0,
        };
        assert!(bounds.intersects_box(90.0, 90.0, 50.0, 50.0));
        assert!(!bounds.intersects_box(150.0, 0.0, 20.0, 20.0));
        assert!(bounds.expanded(60.0).intersects_box(150.0, 0.0, 20.0, 20.0));
    }
}
