//! Generation propagation — local repair after relationship creation
//!
//! Compares only the direct pair, one hop, non-transitively. Deep or
//! pre-existing generation inconsistencies elsewhere in the tree are not
//! corrected; whether that should instead be a full consistency pass after
//! structural edits is an open question, and the one-hop behavior is kept
//! deliberately (see DESIGN.md).

use crate::model::{Member, RelationshipKind};

/// New generation for `target` after a `(source, target, kind)` edge, or
/// `None` when the current value already fits
///
/// Pure: the caller applies the returned value through the member store.
pub fn propagate_generation(
    source: &Member,
    target: &Member,
    kind: RelationshipKind,
) -> Option<i32> {
    match kind {
        // Target is source's parent: parents sit one generation above.
        RelationshipKind::Parent if target.generation >= source.generation => {
            Some(source.generation - 1)
        }
        // Target is source's child: children sit one generation below.
        RelationshipKind::Child if target.generation <= source.generation => {
            Some(source.generation + 1)
        }
        RelationshipKind::Spouse | RelationshipKind::Sibling | RelationshipKind::ExSpouse
            if target.generation != source.generation =>
        {
            Some(source.generation)
        }
        _ => None,
    }
}
