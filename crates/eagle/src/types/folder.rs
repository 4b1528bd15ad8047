//! Folder-related types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The label colours Eagle offers for folders.
///
/// Serialised in lowercase, e.g. `"aqua"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderColor {
    /// Red.
    Red,
    /// Orange.
    Orange,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Aqua.
    Aqua,
    /// Blue.
    Blue,
    /// Purple.
    Purple,
    /// Pink.
    Pink,
}

impl FolderColor {
    /// All colours, in the order Eagle lists them.
    pub const ALL: [FolderColor; 8] = [
        FolderColor::Red,
        FolderColor::Orange,
        FolderColor::Green,
        FolderColor::Yellow,
        FolderColor::Aqua,
        FolderColor::Blue,
        FolderColor::Purple,
        FolderColor::Pink,
    ];

    /// The wire name of the colour.
    pub fn as_str(&self) -> &'static str {
        match self {
            FolderColor::Red => "red",
            FolderColor::Orange => "orange",
            FolderColor::Green => "green",
            FolderColor::Yellow => "yellow",
            FolderColor::Aqua => "aqua",
            FolderColor::Blue => "blue",
            FolderColor::Purple => "purple",
            FolderColor::Pink => "pink",
        }
    }
}

impl fmt::Display for FolderColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FolderColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        FolderColor::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| format!("unknown folder color: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(FolderColor::Aqua).unwrap(),
            serde_json::json!("aqua")
        );
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Blue".parse::<FolderColor>().unwrap(), FolderColor::Blue);
        assert!("teal".parse::<FolderColor>().is_err());
    }

    #[test]
    fn display_matches_wire_name() {
        for color in FolderColor::ALL {
            assert_eq!(
                serde_json::to_value(color).unwrap(),
                serde_json::json!(color.to_string())
            );
        }
    }
}
