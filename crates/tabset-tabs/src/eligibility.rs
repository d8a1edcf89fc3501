//! Pane body render eligibility

use crate::config::Policies;
use crate::lazy::LazyMountSet;

/// Whether a pane body should be mounted this pass.
///
/// Lazy loading wins over destroy-on-hide: a pane that was never shown has
/// nothing to keep mounted.
pub fn should_render_body(key: &str, is_active: bool, policies: &Policies, visited: &LazyMountSet) -> bool {
    if is_active {
        return true;
    }
    if policies.lazy_load {
        return visited.has_visited(key);
    }
    !policies.destroy_on_hide
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policies(lazy_load: bool, destroy_on_hide: bool) -> Policies {
        Policies {
            lazy_load,
            destroy_on_hide,
            ..Policies::default()
        }
    }

    #[test]
    fn test_truth_table() {
        let visited = LazyMountSet::seeded(Some("seen"));

        // (is_active, lazy_load, destroy_on_hide) -> expected for a never visited pane
        let cases = [
            (true, true, true, true),
            (true, true, false, true),
            (true, false, true, true),
            (true, false, false, true),
            (false, true, true, false),
            (false, true, false, false),
            (false, false, true, false),
            (false, false, false, true),
        ];

        for (is_active, lazy, destroy, expected) in cases {
            assert_eq!(
                should_render_body("fresh", is_active, &policies(lazy, destroy), &visited),
                expected,
                "active={is_active} lazy={lazy} destroy={destroy}"
            );
        }
    }

    #[test]
    fn test_lazy_keeps_visited_even_with_destroy_on_hide() {
        let visited = LazyMountSet::seeded(Some("seen"));
        assert!(should_render_body("seen", false, &policies(true, true), &visited));
        assert!(should_render_body("seen", false, &policies(true, false), &visited));
    }
}
