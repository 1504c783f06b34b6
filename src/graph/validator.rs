//! Relationship validator — pure write gate for proposed edges
//!
//! Rules run against the forward edge only; the inverse edge is derived by
//! the store and never validated separately. Validation sees one pairwise
//! edge at a time, so it deliberately performs no cycle detection across the
//! wider graph — the tree builder tolerates cycles instead.

use crate::error::ValidationError;
use crate::model::{Member, Relationship, RelationshipKind};

/// Validate a proposed forward edge against the subject's existing edges
///
/// `existing` must contain every stored edge whose forward perspective is
/// the proposed member. Because the store keeps one edge per endpoint of
/// every logical relationship, that slice covers all relationships between
/// the two members in either direction.
pub fn validate(
    proposed: &Relationship,
    existing: &[Relationship],
    member: &Member,
    related: &Member,
) -> Result<(), ValidationError> {
    if proposed.member_id == proposed.related_id {
        return Err(ValidationError::SelfRelation);
    }

    let duplicate = existing.iter().any(|e| {
        e.member_id == proposed.member_id
            && e.related_id == proposed.related_id
            && e.kind == proposed.kind
    });
    if duplicate {
        return Err(ValidationError::Duplicate {
            member: proposed.member_id,
            related: proposed.related_id,
            kind: proposed.kind,
        });
    }

    if member.tree_id != related.tree_id {
        return Err(ValidationError::CrossTree);
    }

    // Edges already linking these two members, regardless of which side
    // they were stored from.
    let between = |kind_matches: fn(RelationshipKind) -> bool| {
        existing.iter().any(|e| {
            kind_matches(e.kind)
                && ((e.member_id == proposed.member_id && e.related_id == proposed.related_id)
                    || (e.member_id == proposed.related_id
                        && e.related_id == proposed.member_id))
        })
    };

    match proposed.kind {
        RelationshipKind::Parent => {
            let parent_count = existing
                .iter()
                .filter(|e| {
                    e.member_id == proposed.member_id && e.kind == RelationshipKind::Parent
                })
                .count();
            if parent_count >= 2 {
                return Err(ValidationError::ParentLimit);
            }
            // The proposed parent (`related`) must be strictly older.
            if let (Some(child_birth), Some(parent_birth)) = (member.birth_date, related.birth_date)
            {
                if parent_birth >= child_birth {
                    return Err(ValidationError::ParentNotOlder);
                }
            }
        }
        RelationshipKind::Child => {
            // The proposed child (`related`) must be strictly younger.
            if let (Some(parent_birth), Some(child_birth)) = (member.birth_date, related.birth_date)
            {
                if child_birth <= parent_birth {
                    return Err(ValidationError::ChildNotYounger);
                }
            }
        }
        RelationshipKind::Spouse | RelationshipKind::ExSpouse => {
            if between(|k| matches!(k, RelationshipKind::Parent | RelationshipKind::Child)) {
                return Err(ValidationError::SpouseIsLineal);
            }
            if between(|k| k == RelationshipKind::Sibling) {
                return Err(ValidationError::SpouseIsSibling);
            }
        }
        RelationshipKind::Sibling => {
            if between(|k| matches!(k, RelationshipKind::Spouse | RelationshipKind::ExSpouse)) {
                return Err(ValidationError::SiblingIsSpouse);
            }
        }
    }

    Ok(())
}
