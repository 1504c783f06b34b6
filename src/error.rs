//! Error types for the relationship graph core
//!
//! Validation rejections are ordinary values, never panics: each variant
//! carries the human-readable reason the caller surfaces inline. Structural
//! degeneracy (cycles, duplicated references) is not an error at all — the
//! tree builder absorbs it and still produces a terminating tree.

use thiserror::Error;
use uuid::Uuid;

use crate::model::RelationshipKind;

/// Top-level error for graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("validation rejected: {0}")]
    Validation(#[from] ValidationError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("member not found: {0}")]
    MemberNotFound(Uuid),
}

/// A proposed relationship violated a domain rule
///
/// All rules are evaluated against the forward edge only; the inverse edge
/// is derived and never validated separately.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("a member cannot be related to themselves")]
    SelfRelation,

    #[error("{kind:?} relationship between {member} and {related} already exists")]
    Duplicate {
        member: Uuid,
        related: Uuid,
        kind: RelationshipKind,
    },

    #[error("members belong to different trees")]
    CrossTree,

    #[error("member already has two recorded parents")]
    ParentLimit,

    #[error("a parent must be born before their child")]
    ParentNotOlder,

    #[error("a child must be born after their parent")]
    ChildNotYounger,

    #[error("members linked as parent and child cannot be spouses")]
    SpouseIsLineal,

    #[error("members recorded as siblings cannot be spouses")]
    SpouseIsSibling,

    #[error("members recorded as spouses cannot be siblings")]
    SiblingIsSpouse,
}

/// Write-time failures from a relationship store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind:?} relationship pair between {member} and {related} already stored")]
    DuplicatePair {
        member: Uuid,
        related: Uuid,
        kind: RelationshipKind,
    },
}
