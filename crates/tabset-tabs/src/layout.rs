//! Content strip layout
//!
//! Panes sit side by side in a strip, each 100% wide. The strip is shifted
//! left by one pane width per index so the active pane is in view.

use serde::{Deserialize, Serialize};

use crate::config::{Direction, Position};
use crate::registry::TabRegistry;

/// Index of the active tab; 0 when the key is missing or stale
pub fn active_index(registry: &TabRegistry, key: Option<&str>) -> usize {
    key.and_then(|key| registry.position(key)).unwrap_or(0)
}

/// Horizontal strip offset in percent of the pane width
pub fn content_offset_percent(active_index: usize) -> f64 {
    // Subtracting from zero keeps index 0 at +0.0 rather than -0.0
    0.0 - 100.0 * active_index as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralOrder {
    /// Content is placed before the navigation strip
    pub content_first: bool,
}

pub fn structural_order(position: Position) -> StructuralOrder {
    StructuralOrder {
        content_first: position == Position::Bottom,
    }
}

/// Resolved position and direction of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub position: Position,
    pub direction: Direction,
    pub content_first: bool,
}

impl Placement {
    /// A vertical direction pins the strip to the left; left and right
    /// strips are always laid out vertically.
    pub fn merge(position: Position, direction: Direction) -> Self {
        let position = match direction {
            Direction::Vertical => Position::Left,
            Direction::Horizontal => position,
        };
        let direction = if position.is_vertical() {
            Direction::Vertical
        } else {
            Direction::Horizontal
        };

        Self {
            position,
            direction,
            content_first: structural_order(position).content_first,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::PaneNode;
    use crate::registry::derive_tabs;

    fn registry(keys: &[&str]) -> TabRegistry {
        let children: Vec<_> = keys.iter().map(|k| PaneNode::new(*k).into_node()).collect();
        derive_tabs(&children)
    }

    #[test]
    fn test_active_index() {
        let registry = registry(&["a", "b", "c"]);
        assert_eq!(active_index(&registry, Some("a")), 0);
        assert_eq!(active_index(&registry, Some("c")), 2);
    }

    #[test]
    fn test_active_index_fallback() {
        let registry = registry(&["a", "b"]);
        assert_eq!(active_index(&registry, Some("gone")), 0);
        assert_eq!(active_index(&registry, None), 0);
        assert_eq!(active_index(&TabRegistry::default(), Some("a")), 0);
    }

    #[test]
    fn test_offset_law() {
        for i in 0..16 {
            assert_eq!(content_offset_percent(i), -100.0 * i as f64);
        }
        assert_eq!(content_offset_percent(0), 0.0);
        assert_eq!(content_offset_percent(1), -100.0);
    }

    #[test]
    fn test_structural_order() {
        assert!(structural_order(Position::Bottom).content_first);
        assert!(!structural_order(Position::Top).content_first);
        assert!(!structural_order(Position::Left).content_first);
        assert!(!structural_order(Position::Right).content_first);
    }

    #[test]
    fn test_vertical_forces_left() {
        let placement = Placement::merge(Position::Right, Direction::Vertical);
        assert_eq!(placement.position, Position::Left);
        assert_eq!(placement.direction, Direction::Vertical);

        let placement = Placement::merge(Position::Bottom, Direction::Vertical);
        assert_eq!(placement.position, Position::Left);
        assert!(!placement.content_first);
    }

    #[test]
    fn test_side_positions_are_vertical() {
        let placement = Placement::merge(Position::Right, Direction::Horizontal);
        assert_eq!(placement.position, Position::Right);
        assert_eq!(placement.direction, Direction::Vertical);

        let placement = Placement::merge(Position::Bottom, Direction::Horizontal);
        assert_eq!(placement.direction, Direction::Horizontal);
        assert!(placement.content_first);
    }
}
