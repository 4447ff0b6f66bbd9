use serde::{Deserialize, Serialize};

/// Languages a disc can be submitted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    Chinese,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Italian,
    Japanese,
    Korean,
    Polish,
    Portuguese,
    Russian,
    Spanish,
    Swedish,
}

const ALL_LANGUAGES: &[Language] = &[
    Language::Chinese,
    Language::Dutch,
    Language::English,
    Language::Finnish,
    Language::French,
    Language::German,
    Language::Italian,
    Language::Japanese,
    Language::Korean,
    Language::Polish,
    Language::Portuguese,
    Language::Russian,
    Language::Spanish,
    Language::Swedish,
];

impl Language {
    /// Three-letter code as used in redump.org language filters.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Chinese => "chi",
            Self::Dutch => "dut",
            Self::English => "eng",
            Self::Finnish => "fin",
            Self::French => "fre",
            Self::German => "ger",
            Self::Italian => "ita",
            Self::Japanese => "jap",
            Self::Korean => "kor",
            Self::Polish => "pol",
            Self::Portuguese => "por",
            Self::Russian => "rus",
            Self::Spanish => "spa",
            Self::Swedish => "swe",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Chinese => "Chinese",
            Self::Dutch => "Dutch",
            Self::English => "English",
            Self::Finnish => "Finnish",
            Self::French => "French",
            Self::German => "German",
            Self::Italian => "Italian",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Polish => "Polish",
            Self::Portuguese => "Portuguese",
            Self::Russian => "Russian",
            Self::Spanish => "Spanish",
            Self::Swedish => "Swedish",
        }
    }

    /// Look up a language by code or name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        ALL_LANGUAGES.iter().copied().find(|l| {
            l.code().eq_ignore_ascii_case(trimmed) || l.name().eq_ignore_ascii_case(trimmed)
        })
    }

    pub fn all() -> &'static [Language] {
        ALL_LANGUAGES
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
