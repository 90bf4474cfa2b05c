//! Ordinal distance scoring with partial credit
//!
//! One helper shared by every tier-fit computation: an exact membership hit
//! scores 1.0, otherwise the minimum ordinal distance from the value to any
//! applicable tier is mapped through a distance→credit table.

/// Partial credit for near-miss ordinal distances.
#[derive(Debug, Clone, Copy)]
pub struct DistanceCredit {
    /// Credit at distance 1
    pub adjacent: f64,
    /// Credit at distance 2
    pub near: f64,
    /// Credit at distance 3 or more
    pub far: f64,
}

/// Score how well `value` fits an `applicable` tier set over an ordered tier
/// sequence.
///
/// Returns 1.0 on membership, the mapped credit for the minimum distance
/// otherwise, and a neutral 0.5 when the applicable set is empty or holds no
/// tier from `order`.
pub fn ordinal_fit<T>(order: &[T], value: T, applicable: &[T], credit: DistanceCredit) -> f64
where
    T: Copy + PartialEq,
{
    if applicable.contains(&value) {
        return 1.0;
    }

    let position = |needle: T| order.iter().position(|tier| *tier == needle);

    let value_index = match position(value) {
        Some(index) => index,
        None => return 0.5,
    };

    let closest = applicable
        .iter()
        .filter_map(|tier| position(*tier))
        .map(|index| value_index.abs_diff(index))
        .min();

    match closest {
        Some(0) => 1.0,
        Some(1) => credit.adjacent,
        Some(2) => credit.near,
        Some(_) => credit.far,
        None => 0.5,
    }
}
