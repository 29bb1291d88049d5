// src/domain/similar.rs

use crate::domain::property::Property;

pub const SIMILAR_LIMIT: usize = 3;

/// Other listings in the same district or of the same type, in catalog order.
pub fn similar_to<'a>(current: &Property, all: &'a [Property]) -> Vec<&'a Property> {
    all.iter()
        .filter(|p| p.id != current.id)
        .filter(|p| p.district == current.district || p.kind == current.kind)
        .take(SIMILAR_LIMIT)
        .collect()
}
