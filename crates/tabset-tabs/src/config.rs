//! Tab group configuration
//!
//! Host supplied props. Every field has a default so a partial JSON
//! object deserializes into a usable configuration:
//! | Prop             | Default      |
//! | position         | top          |
//! | size             | medium       |
//! | type             | line         |
//! | direction        | horizontal   |
//! | boolean flags    | false        |

use serde::{Deserialize, Serialize};

use crate::error::TabsError;

/// Side of the group the navigation strip is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Top,
    Right,
    Bottom,
    Left,
}

impl Position {
    /// Left and right strips lay tabs out vertically
    pub fn is_vertical(&self) -> bool {
        matches!(self, Position::Left | Position::Right)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::Right => "right",
            Position::Bottom => "bottom",
            Position::Left => "left",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Position {
    type Err = TabsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(Position::Top),
            "right" => Ok(Position::Right),
            "bottom" => Ok(Position::Bottom),
            "left" => Ok(Position::Left),
            _ => Err(TabsError::InvalidValue {
                field: "position",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = TabsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            _ => Err(TabsError::InvalidValue {
                field: "direction",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Mini,
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Mini => "mini",
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Size {
    type Err = TabsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mini" => Ok(Size::Mini),
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            _ => Err(TabsError::InvalidValue {
                field: "size",
                value: s.to_string(),
            }),
        }
    }
}

/// Visual style of the navigation strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabType {
    #[default]
    Line,
    Card,
    CardGutter,
    Text,
    Rounded,
    Capsule,
}

impl TabType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabType::Line => "line",
            TabType::Card => "card",
            TabType::CardGutter => "card-gutter",
            TabType::Text => "text",
            TabType::Rounded => "rounded",
            TabType::Capsule => "capsule",
        }
    }
}

impl std::fmt::Display for TabType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabType {
    type Err = TabsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(TabType::Line),
            "card" => Ok(TabType::Card),
            "card-gutter" => Ok(TabType::CardGutter),
            "text" => Ok(TabType::Text),
            "rounded" => Ok(TabType::Rounded),
            "capsule" => Ok(TabType::Capsule),
            _ => Err(TabsError::InvalidValue {
                field: "type",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabsConfig {
    /// Controlled active key. When present the host owns selection
    pub active_key: Option<String>,
    /// Initial key for uncontrolled groups; empty selects the first pane
    pub default_active_key: String,
    pub position: Position,
    pub size: Size,
    #[serde(rename = "type")]
    pub tab_type: TabType,
    pub direction: Direction,
    /// Shows close and add affordances
    pub editable: bool,
    /// Only honored together with `editable`
    pub show_add_button: bool,
    pub destroy_on_hide: bool,
    pub lazy_load: bool,
    /// Stretch to fill the container (horizontal only)
    pub justify: bool,
    pub animation: bool,
}

impl TabsConfig {
    /// Default key with the empty string treated as absent
    pub fn default_key(&self) -> Option<&str> {
        Some(self.default_active_key.as_str()).filter(|k| !k.is_empty())
    }

    pub fn is_controlled(&self) -> bool {
        self.active_key.is_some()
    }

    pub fn policies(&self) -> Policies {
        Policies {
            lazy_load: self.lazy_load,
            destroy_on_hide: self.destroy_on_hide,
            position: self.position,
            direction: self.direction,
            animation: self.animation,
        }
    }
}

/// Read-only policy inputs for render eligibility and layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Policies {
    pub lazy_load: bool,
    pub destroy_on_hide: bool,
    pub position: Position,
    pub direction: Direction,
    pub animation: bool,
}
