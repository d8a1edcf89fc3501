//! Active key selection
//!
//! A group is either controlled (the host owns the key and the group only
//! requests changes) or uncontrolled (the group owns the key). The mode is
//! fixed for the lifetime of a controller.

use crate::error::TabsError;
use crate::Result;

/// Controlled key when defined, otherwise the internal one
pub fn resolve<'a>(external: Option<&'a str>, internal: Option<&'a str>) -> Option<&'a str> {
    external.or(internal)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveKeyState {
    /// Host supplied value; never mutated by the group
    Controlled(String),
    /// Group owned value; `None` when no pane was available at creation
    Uncontrolled(Option<String>),
}

impl ActiveKeyState {
    /// Seed the state: controlled key, else default key, else `first_key`
    pub fn seed(controlled: Option<&str>, default_key: Option<&str>, first_key: Option<&str>) -> Self {
        match controlled {
            Some(key) => ActiveKeyState::Controlled(key.to_string()),
            None => ActiveKeyState::Uncontrolled(default_key.or(first_key).map(str::to_string)),
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, ActiveKeyState::Controlled(_))
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            ActiveKeyState::Controlled(key) => resolve(Some(key.as_str()), None),
            ActiveKeyState::Uncontrolled(key) => resolve(None, key.as_deref()),
        }
    }

    /// Apply a user selection. Only the uncontrolled branch is mutated;
    /// returns whether the stored key changed.
    pub fn select(&mut self, key: &str) -> bool {
        match self {
            ActiveKeyState::Controlled(_) => false,
            ActiveKeyState::Uncontrolled(current) => {
                if current.as_deref() == Some(key) {
                    return false;
                }
                *current = Some(key.to_string());
                true
            }
        }
    }

    /// Apply a host prop update. Starting or stopping control is rejected.
    pub fn sync_controlled(&mut self, value: Option<&str>) -> Result<bool> {
        match (self, value) {
            (ActiveKeyState::Controlled(current), Some(key)) => {
                if current.as_str() == key {
                    return Ok(false);
                }
                *current = key.to_string();
                Ok(true)
            }
            (ActiveKeyState::Uncontrolled(_), None) => Ok(false),
            (ActiveKeyState::Controlled(_), None) => Err(TabsError::ModeSwitch {
                from: "controlled".to_string(),
                to: "uncontrolled".to_string(),
            }),
            (ActiveKeyState::Uncontrolled(_), Some(_)) => Err(TabsError::ModeSwitch {
                from: "uncontrolled".to_string(),
                to: "controlled".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_external() {
        for internal in [None, Some("a"), Some("z")] {
            assert_eq!(resolve(Some("b"), internal), Some("b"));
            assert_eq!(resolve(None, internal), internal);
        }
    }

    #[test]
    fn test_seed_order() {
        assert_eq!(
            ActiveKeyState::seed(Some("c"), Some("b"), Some("a")),
            ActiveKeyState::Controlled("c".to_string())
        );
        assert_eq!(
            ActiveKeyState::seed(None, Some("b"), Some("a")).key(),
            Some("b")
        );
        assert_eq!(ActiveKeyState::seed(None, None, Some("a")).key(), Some("a"));
        assert_eq!(ActiveKeyState::seed(None, None, None).key(), None);
    }

    #[test]
    fn test_controlled_never_mutated_by_select() {
        let mut state = ActiveKeyState::Controlled("a".to_string());
        assert!(!state.select("b"));
        assert_eq!(state.key(), Some("a"));
    }

    #[test]
    fn test_uncontrolled_select() {
        let mut state = ActiveKeyState::Uncontrolled(Some("a".to_string()));
        assert!(!state.select("a"));
        assert!(state.select("b"));
        assert_eq!(state.key(), Some("b"));
    }

    #[test]
    fn test_sync_controlled() {
        let mut state = ActiveKeyState::Controlled("a".to_string());
        assert!(state.sync_controlled(Some("b")).unwrap());
        assert!(!state.sync_controlled(Some("b")).unwrap());
        assert_eq!(state.key(), Some("b"));
    }

    #[test]
    fn test_mode_switch_rejected() {
        let mut controlled = ActiveKeyState::Controlled("a".to_string());
        assert!(matches!(
            controlled.sync_controlled(None),
            Err(TabsError::ModeSwitch { .. })
        ));
        assert_eq!(controlled.key(), Some("a"));

        let mut uncontrolled = ActiveKeyState::Uncontrolled(Some("a".to_string()));
        assert!(uncontrolled.sync_controlled(Some("b")).is_err());
        assert!(!uncontrolled.sync_controlled(None).unwrap());
        assert_eq!(uncontrolled.key(), Some("a"));
    }
}
