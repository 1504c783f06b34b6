//! Relationship-graph consistency engine and tree pipeline
//!
//! Data flows one way: edits are gated by [`validator`] and adjusted by
//! [`propagation`], then [`builder`] derives a rooted view from the full
//! edge set, [`layout`] assigns coordinates, and [`viewport`] maps them to
//! screen space. The whole pipeline is pure and synchronous; [`publisher`]
//! handles the subscriber boundary where stale rebuilds are dropped.

pub mod builder;
pub mod layout;
pub mod propagation;
pub mod publisher;
pub mod validator;
pub mod viewport;

pub use builder::{TreeBuilder, TreeNode};
pub use layout::{LayoutBounds, LayoutConfig, LayoutEngine, PositionedNode};
pub use propagation::propagate_generation;
pub use publisher::{LayoutSnapshot, RebuildPublisher};
pub use viewport::ViewportContext;
