use serde::{Deserialize, Serialize};

/// Physical media a dump is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    CdRom,
    Dvd,
    GdRom,
    HdDvd,
    BluRay,
    NintendoGameCubeGameDisc,
    NintendoWiiOpticalDisc,
    NintendoWiiUOpticalDisc,
    Umd,
    FloppyDisk,
    HardDisk,
    DataCartridge,
}

const ALL_MEDIA_TYPES: &[MediaType] = &[
    MediaType::CdRom,
    MediaType::Dvd,
    MediaType::GdRom,
    MediaType::HdDvd,
    MediaType::BluRay,
    MediaType::NintendoGameCubeGameDisc,
    MediaType::NintendoWiiOpticalDisc,
    MediaType::NintendoWiiUOpticalDisc,
    MediaType::Umd,
    MediaType::FloppyDisk,
    MediaType::HardDisk,
    MediaType::DataCartridge,
];

impl MediaType {
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::CdRom => "cd",
            Self::Dvd => "dvd",
            Self::GdRom => "gd",
            Self::HdDvd => "hddvd",
            Self::BluRay => "bd",
            Self::NintendoGameCubeGameDisc => "gcdisc",
            Self::NintendoWiiOpticalDisc => "wiidisc",
            Self::NintendoWiiUOpticalDisc => "wiiudisc",
            Self::Umd => "umd",
            Self::FloppyDisk => "fd",
            Self::HardDisk => "hdd",
            Self::DataCartridge => "tape",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CdRom => "CD-ROM",
            Self::Dvd => "DVD",
            Self::GdRom => "GD-ROM",
            Self::HdDvd => "HD-DVD",
            Self::BluRay => "BD-ROM",
            Self::NintendoGameCubeGameDisc => "GameCube Game Disc",
            Self::NintendoWiiOpticalDisc => "Wii Optical Disc",
            Self::NintendoWiiUOpticalDisc => "Wii U Optical Disc",
            Self::Umd => "UMD",
            Self::FloppyDisk => "Floppy Disk",
            Self::HardDisk => "Hard Disk",
            Self::DataCartridge => "Data Cartridge",
        }
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::CdRom => &["cd", "cdrom", "cd-rom"],
            Self::Dvd => &["dvd", "dvd-rom", "dvdrom"],
            Self::GdRom => &["gd", "gdrom", "gd-rom"],
            Self::HdDvd => &["hddvd", "hd-dvd"],
            Self::BluRay => &["bd", "bluray", "blu-ray", "bdrom", "bd-rom"],
            Self::NintendoGameCubeGameDisc => &["gcdisc", "nintendo gamecube game disc"],
            Self::NintendoWiiOpticalDisc => &["wiidisc", "nintendo wii optical disc"],
            Self::NintendoWiiUOpticalDisc => &["wiiudisc", "nintendo wii u optical disc"],
            Self::Umd => &["umd"],
            Self::FloppyDisk => &["fd", "floppy", "floppydisk"],
            Self::HardDisk => &["hdd", "harddisk", "disk"],
            Self::DataCartridge => &["tape", "datacartridge", "cartridge"],
        }
    }

    /// Whether the media can have more than one recorded layer.
    pub fn is_layered(&self) -> bool {
        matches!(
            self,
            Self::Dvd
                | Self::HdDvd
                | Self::BluRay
                | Self::NintendoWiiOpticalDisc
                | Self::NintendoWiiUOpticalDisc
                | Self::Umd
        )
    }

    /// Whether the media is dumped as a single track image rather than
    /// a CD-style set of tracks.
    pub fn is_single_image(&self) -> bool {
        !matches!(self, Self::CdRom | Self::GdRom)
    }

    pub fn all() -> &'static [MediaType] {
        ALL_MEDIA_TYPES
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `MediaType`.
#[derive(Debug, Clone)]
pub struct MediaTypeParseError(pub String);

impl std::fmt::Display for MediaTypeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown media type: '{}'", self.0)
    }
}

impl std::error::Error for MediaTypeParseError {}

impl std::str::FromStr for MediaType {
    type Err = MediaTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_MEDIA_TYPES
            .iter()
            .copied()
            .find(|media| media.aliases().contains(&lower.as_str()))
            .ok_or_else(|| MediaTypeParseError(s.to_string()))
    }
}
