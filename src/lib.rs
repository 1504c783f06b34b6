//! kintree — family-tree relationship graph and layout core
//!
//! Turns a flat, mutable set of pairwise directed relationship edges into:
//!
//! 1. a consistent bidirectional graph (every logical relationship is a
//!    forward + inverse edge pair, written atomically),
//! 2. a single rooted, cycle-safe hierarchical view ([`TreeNode`]),
//! 3. deterministic 2-D coordinates with a bounding box, recomputed in full
//!    on every edit.
//!
//! The pipeline is pure and synchronous: edits go through
//! [`FamilyGraphService`], which gates writes with the relationship validator
//! and applies one-hop generation propagation; rebuilds flow through
//! [`TreeBuilder`] and [`LayoutEngine`]; [`ViewportContext`] maps the
//! positioned output to screen space for hit testing and visibility culling.
//!
//! Rendering, persistence backends, and import/export formats live outside
//! this crate — it exposes trait seams ([`store::MemberStore`],
//! [`store::RelationshipStore`]) and ships in-memory reference
//! implementations.

pub mod error;
pub mod graph;
pub mod model;
pub mod service;
pub mod store;

pub use error::{GraphError, StoreError, ValidationError};
pub use graph::builder::{TreeBuilder, TreeNode};
pub use graph::layout::{LayoutBounds, LayoutConfig, LayoutEngine, PositionedNode};
pub use graph::publisher::{LayoutSnapshot, RebuildPublisher};
pub use graph::viewport::ViewportContext;
pub use model::{FamilyTree, Gender, Member, Relationship, RelationshipDetails, RelationshipKind};
pub use service::FamilyGraphService;
