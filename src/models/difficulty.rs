use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl Difficulty {
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Unknown => "Unknown",
        }
    }

    /// Colored circle shown next to the label in the README table
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Difficulty::Easy => Some("🟢"),
            Difficulty::Medium => Some("🟡"),
            Difficulty::Hard => Some("🔴"),
            Difficulty::Unknown => None,
        }
    }

    /// Icon and label as rendered in the table, e.g. "🟢 Easy"
    ///
    /// Unknown has no icon, so it renders with a leading space: " Unknown".
    pub fn marker(&self) -> String {
        format!("{} {}", self.icon().unwrap_or(""), self.display_name())
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
