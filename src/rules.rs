//! Marker placement rules.
//!
//! Pure predicates over border positions; the grid model supplies the
//! other marker's current slot and commits only when `can_assign`
//! agrees. The rule is symmetric, so it does not care which marker
//! kind is being placed.

use crate::error::PlacementError;

/// Manhattan distance between two border positions.
pub fn manhattan_distance(a: (i32, i32), b: (i32, i32)) -> i32 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

/// True when the two positions are orthogonally adjacent.
pub fn positions_adjacent(a: (i32, i32), b: (i32, i32)) -> bool {
    manhattan_distance(a, b) == 1
}

/// Decide whether a marker may land on `target` given the other
/// marker's position.
///
/// Rejects the shared slot and distance-1 neighbors; anything else,
/// including an unassigned other marker, is accepted.
pub fn can_assign(target: (i32, i32), other: Option<(i32, i32)>) -> Result<(), PlacementError> {
    let Some(other) = other else {
        return Ok(());
    };
    if target == other {
        return Err(PlacementError::Overlap);
    }
    if positions_adjacent(target, other) {
        return Err(PlacementError::Adjacent);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(manhattan_distance((0, -1), (2, 2)), 5);
        assert_eq!(manhattan_distance((2, 2), (0, -1)), 5);
        assert_eq!(manhattan_distance((-1, 0), (-1, 0)), 0);
    }

    #[test]
    fn adjacency_is_distance_one_only() {
        assert!(positions_adjacent((-1, 0), (0, 0)));
        assert!(positions_adjacent((3, -1), (2, -1)));
        assert!(!positions_adjacent((0, 0), (1, 1)));
        assert!(!positions_adjacent((0, 0), (0, 0)));
    }

    #[test]
    fn unassigned_other_always_accepts() {
        assert_eq!(can_assign((0, -1), None), Ok(()));
    }

    #[test]
    fn overlap_beats_adjacency() {
        assert_eq!(
            can_assign((4, -1), Some((4, -1))),
            Err(PlacementError::Overlap)
        );
    }

    #[test]
    fn adjacent_slots_are_rejected() {
        for neighbor in [(1, -1), (3, -1)] {
            assert_eq!(
                can_assign((2, -1), Some(neighbor)),
                Err(PlacementError::Adjacent)
            );
        }
    }

    #[test]
    fn distance_two_accepts() {
        assert_eq!(can_assign((2, -1), Some((0, -1))), Ok(()));
        assert_eq!(can_assign((-1, 0), Some((-1, 2))), Ok(()));
    }
}
