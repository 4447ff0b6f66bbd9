use serde::{Deserialize, Serialize};

/// Disc category shown on a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DiscCategory {
    #[default]
    Games,
    Demos,
    Video,
    Audio,
    Multimedia,
    Applications,
    Coverdiscs,
    Educational,
    BonusDiscs,
    Preproduction,
    AddOns,
}

impl DiscCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Games => "Games",
            Self::Demos => "Demos",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Multimedia => "Multimedia",
            Self::Applications => "Applications",
            Self::Coverdiscs => "Coverdiscs",
            Self::Educational => "Educational",
            Self::BonusDiscs => "Bonus Discs",
            Self::Preproduction => "Preproduction",
            Self::AddOns => "Add-Ons",
        }
    }

    /// Parse the category label printed on a redump.org disc page.
    pub fn from_name(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        [
            Self::Games,
            Self::Demos,
            Self::Video,
            Self::Audio,
            Self::Multimedia,
            Self::Applications,
            Self::Coverdiscs,
            Self::Educational,
            Self::BonusDiscs,
            Self::Preproduction,
            Self::AddOns,
        ]
        .into_iter()
        .find(|c| c.name().eq_ignore_ascii_case(trimmed))
    }
}

impl std::fmt::Display for DiscCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
