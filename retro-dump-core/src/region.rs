use serde::{Deserialize, Serialize};

/// Release regions as named by redump.org.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Asia,
    Australia,
    Brazil,
    Canada,
    China,
    Europe,
    France,
    Germany,
    Italy,
    Japan,
    Korea,
    Netherlands,
    Russia,
    Spain,
    Taiwan,
    Uk,
    Usa,
    World,
}

const ALL_REGIONS: &[Region] = &[
    Region::Asia,
    Region::Australia,
    Region::Brazil,
    Region::Canada,
    Region::China,
    Region::Europe,
    Region::France,
    Region::Germany,
    Region::Italy,
    Region::Japan,
    Region::Korea,
    Region::Netherlands,
    Region::Russia,
    Region::Spain,
    Region::Taiwan,
    Region::Uk,
    Region::Usa,
    Region::World,
];

impl Region {
    /// Returns the two-letter code redump.org uses in its URLs and flags.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Asia => "A",
            Self::Australia => "Au",
            Self::Brazil => "B",
            Self::Canada => "Ca",
            Self::China => "C",
            Self::Europe => "E",
            Self::France => "F",
            Self::Germany => "G",
            Self::Italy => "I",
            Self::Japan => "J",
            Self::Korea => "K",
            Self::Netherlands => "N",
            Self::Russia => "R",
            Self::Spain => "S",
            Self::Taiwan => "Tw",
            Self::Uk => "Uk",
            Self::Usa => "U",
            Self::World => "W",
        }
    }

    /// Returns the full name of this region.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Asia => "Asia",
            Self::Australia => "Australia",
            Self::Brazil => "Brazil",
            Self::Canada => "Canada",
            Self::China => "China",
            Self::Europe => "Europe",
            Self::France => "France",
            Self::Germany => "Germany",
            Self::Italy => "Italy",
            Self::Japan => "Japan",
            Self::Korea => "Korea",
            Self::Netherlands => "Netherlands",
            Self::Russia => "Russia",
            Self::Spain => "Spain",
            Self::Taiwan => "Taiwan",
            Self::Uk => "UK",
            Self::Usa => "USA",
            Self::World => "World",
        }
    }

    /// Attempt to parse a region from a code character (common in serial numbers
    /// and in the area symbols of Sega disc headers).
    pub fn from_code_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'J' => Some(Self::Japan),
            'U' => Some(Self::Usa),
            'E' | 'P' => Some(Self::Europe),
            'A' => Some(Self::Asia),
            'K' => Some(Self::Korea),
            'C' => Some(Self::China),
            'T' => Some(Self::Taiwan),
            'B' => Some(Self::Brazil),
            'W' => Some(Self::World),
            _ => None,
        }
    }

    /// Look up a region by its redump.org code or full name.
    pub fn from_name(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        ALL_REGIONS.iter().copied().find(|r| {
            r.code().eq_ignore_ascii_case(trimmed) || r.name().eq_ignore_ascii_case(trimmed)
        })
    }

    pub fn all() -> &'static [Region] {
        ALL_REGIONS
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
