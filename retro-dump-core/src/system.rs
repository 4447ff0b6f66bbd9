use serde::{Deserialize, Serialize};

use crate::media::MediaType;

/// Systems a disc can be dumped for.
///
/// Short names, display names, manufacturer, aliases and the media each
/// system ships on all live here so that parameter defaults, extraction
/// dispatch and the CLI agree on one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum System {
    // Audio / video
    AudioCd,
    SuperAudioCd,
    DvdVideo,
    BdVideo,

    // Computers
    IbmPcCompatible,
    AppleMacintosh,

    // Atari / Hasbro
    AtariJaguarCd,
    HasbroVideoNow,
    HasbroVideoNowColor,
    HasbroVideoNowJr,
    HasbroVideoNowXp,

    // Microsoft
    Xbox,
    Xbox360,
    XboxOne,

    // NEC / Panasonic / Philips / SNK
    PcEngineCd,
    Panasonic3do,
    PhilipsCdi,
    NeoGeoCd,

    // Nintendo
    GameCube,
    Wii,
    WiiU,

    // Sega
    SegaCd,
    Saturn,
    Dreamcast,

    // Sony
    Ps1,
    Ps2,
    Ps3,
    Ps4,
    Psp,
}

/// All system variants in registration order.
const ALL_SYSTEMS: &[System] = &[
    System::AudioCd,
    System::SuperAudioCd,
    System::DvdVideo,
    System::BdVideo,
    System::IbmPcCompatible,
    System::AppleMacintosh,
    System::AtariJaguarCd,
    System::HasbroVideoNow,
    System::HasbroVideoNowColor,
    System::HasbroVideoNowJr,
    System::HasbroVideoNowXp,
    System::Xbox,
    System::Xbox360,
    System::XboxOne,
    System::PcEngineCd,
    System::Panasonic3do,
    System::PhilipsCdi,
    System::NeoGeoCd,
    System::GameCube,
    System::Wii,
    System::WiiU,
    System::SegaCd,
    System::Saturn,
    System::Dreamcast,
    System::Ps1,
    System::Ps2,
    System::Ps3,
    System::Ps4,
    System::Psp,
];

impl System {
    /// Canonical short name used for CLI arguments and settings keys.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::AudioCd => "audio-cd",
            Self::SuperAudioCd => "sacd",
            Self::DvdVideo => "dvd-video",
            Self::BdVideo => "bd-video",
            Self::IbmPcCompatible => "ibm-pc",
            Self::AppleMacintosh => "mac",
            Self::AtariJaguarCd => "jaguar-cd",
            Self::HasbroVideoNow => "videonow",
            Self::HasbroVideoNowColor => "videonow-color",
            Self::HasbroVideoNowJr => "videonow-jr",
            Self::HasbroVideoNowXp => "videonow-xp",
            Self::Xbox => "xbox",
            Self::Xbox360 => "xbox360",
            Self::XboxOne => "xboxone",
            Self::PcEngineCd => "pce-cd",
            Self::Panasonic3do => "3do",
            Self::PhilipsCdi => "cdi",
            Self::NeoGeoCd => "neogeo-cd",
            Self::GameCube => "gamecube",
            Self::Wii => "wii",
            Self::WiiU => "wiiu",
            Self::SegaCd => "segacd",
            Self::Saturn => "saturn",
            Self::Dreamcast => "dreamcast",
            Self::Ps1 => "ps1",
            Self::Ps2 => "ps2",
            Self::Ps3 => "ps3",
            Self::Ps4 => "ps4",
            Self::Psp => "psp",
        }
    }

    /// Full display name, matching the naming used by redump.org.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AudioCd => "Audio CD",
            Self::SuperAudioCd => "Super Audio CD",
            Self::DvdVideo => "DVD-Video",
            Self::BdVideo => "BD-Video",
            Self::IbmPcCompatible => "IBM PC compatible",
            Self::AppleMacintosh => "Apple Macintosh",
            Self::AtariJaguarCd => "Atari Jaguar CD",
            Self::HasbroVideoNow => "Hasbro VideoNow",
            Self::HasbroVideoNowColor => "Hasbro VideoNow Color",
            Self::HasbroVideoNowJr => "Hasbro VideoNow Jr.",
            Self::HasbroVideoNowXp => "Hasbro VideoNow XP",
            Self::Xbox => "Microsoft Xbox",
            Self::Xbox360 => "Microsoft Xbox 360",
            Self::XboxOne => "Microsoft Xbox One",
            Self::PcEngineCd => "NEC PC Engine CD & TurboGrafx CD",
            Self::Panasonic3do => "Panasonic 3DO Interactive Multiplayer",
            Self::PhilipsCdi => "Philips CD-i",
            Self::NeoGeoCd => "SNK Neo Geo CD",
            Self::GameCube => "Nintendo GameCube",
            Self::Wii => "Nintendo Wii",
            Self::WiiU => "Nintendo Wii U",
            Self::SegaCd => "Sega Mega CD & Sega CD",
            Self::Saturn => "Sega Saturn",
            Self::Dreamcast => "Sega Dreamcast",
            Self::Ps1 => "Sony PlayStation",
            Self::Ps2 => "Sony PlayStation 2",
            Self::Ps3 => "Sony PlayStation 3",
            Self::Ps4 => "Sony PlayStation 4",
            Self::Psp => "Sony PlayStation Portable",
        }
    }

    /// Manufacturer, or the kind of disc for non-console systems.
    pub fn manufacturer(&self) -> &'static str {
        match self {
            Self::AudioCd | Self::SuperAudioCd | Self::DvdVideo | Self::BdVideo => "Other",
            Self::IbmPcCompatible | Self::AppleMacintosh => "Computers",
            Self::AtariJaguarCd => "Atari",
            Self::HasbroVideoNow
            | Self::HasbroVideoNowColor
            | Self::HasbroVideoNowJr
            | Self::HasbroVideoNowXp => "Hasbro",
            Self::Xbox | Self::Xbox360 | Self::XboxOne => "Microsoft",
            Self::PcEngineCd => "NEC",
            Self::Panasonic3do => "Panasonic",
            Self::PhilipsCdi => "Philips",
            Self::NeoGeoCd => "SNK",
            Self::GameCube | Self::Wii | Self::WiiU => "Nintendo",
            Self::SegaCd | Self::Saturn | Self::Dreamcast => "Sega",
            Self::Ps1 | Self::Ps2 | Self::Ps3 | Self::Ps4 | Self::Psp => "Sony",
        }
    }

    /// All accepted names for this system (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::AudioCd => &["audio-cd", "audio", "cdda"],
            Self::SuperAudioCd => &["sacd", "super audio cd"],
            Self::DvdVideo => &["dvd-video", "dvdvideo"],
            Self::BdVideo => &["bd-video", "bdvideo", "bluray-video"],
            Self::IbmPcCompatible => &["ibm-pc", "pc", "ibmpc", "windows"],
            Self::AppleMacintosh => &["mac", "macintosh", "apple"],
            Self::AtariJaguarCd => &["jaguar-cd", "ajcd", "jaguarcd"],
            Self::HasbroVideoNow => &["videonow", "hvn"],
            Self::HasbroVideoNowColor => &["videonow-color", "hvnc"],
            Self::HasbroVideoNowJr => &["videonow-jr", "hvnjr"],
            Self::HasbroVideoNowXp => &["videonow-xp", "hvnxp"],
            Self::Xbox => &["xbox", "xbox1", "ogxbox"],
            Self::Xbox360 => &["xbox360", "xbox 360", "x360"],
            Self::XboxOne => &["xboxone", "xbox one", "xbo"],
            Self::PcEngineCd => &["pce-cd", "pcecd", "turbografx-cd", "tgcd"],
            Self::Panasonic3do => &["3do"],
            Self::PhilipsCdi => &["cdi", "cd-i"],
            Self::NeoGeoCd => &["neogeo-cd", "ngcd"],
            Self::GameCube => &["gamecube", "gc", "ngc"],
            Self::Wii => &["wii"],
            Self::WiiU => &["wiiu", "wii u"],
            Self::SegaCd => &["segacd", "sega cd", "megacd", "mega cd", "scd"],
            Self::Saturn => &["saturn", "sega saturn", "ss"],
            Self::Dreamcast => &["dreamcast", "dc"],
            Self::Ps1 => &["ps1", "psx", "playstation"],
            Self::Ps2 => &["ps2", "playstation2", "playstation 2"],
            Self::Ps3 => &["ps3", "playstation3", "playstation 3"],
            Self::Ps4 => &["ps4", "playstation4", "playstation 4"],
            Self::Psp => &["psp", "playstation portable"],
        }
    }

    /// Media the system was released on. The first entry is the usual one.
    pub fn media_types(&self) -> &'static [MediaType] {
        use MediaType::*;
        match self {
            Self::AudioCd
            | Self::SuperAudioCd
            | Self::AtariJaguarCd
            | Self::HasbroVideoNow
            | Self::HasbroVideoNowColor
            | Self::HasbroVideoNowJr
            | Self::HasbroVideoNowXp
            | Self::PcEngineCd
            | Self::Panasonic3do
            | Self::PhilipsCdi
            | Self::NeoGeoCd
            | Self::SegaCd
            | Self::Saturn
            | Self::Ps1 => &[CdRom],
            Self::DvdVideo => &[Dvd, HdDvd],
            Self::BdVideo | Self::Ps4 => &[BluRay],
            Self::IbmPcCompatible | Self::AppleMacintosh => {
                &[CdRom, Dvd, BluRay, FloppyDisk, HardDisk, DataCartridge]
            }
            Self::Xbox | Self::Xbox360 => &[Dvd],
            Self::XboxOne => &[BluRay],
            Self::GameCube => &[NintendoGameCubeGameDisc],
            Self::Wii => &[NintendoWiiOpticalDisc],
            Self::WiiU => &[NintendoWiiUOpticalDisc],
            Self::Dreamcast => &[GdRom, CdRom],
            Self::Ps2 => &[Dvd, CdRom],
            Self::Ps3 => &[BluRay],
            Self::Psp => &[Umd],
        }
    }

    /// Whether `media` is a valid media type for this system.
    pub fn supports_media(&self, media: MediaType) -> bool {
        self.media_types().contains(&media)
    }

    /// Whether the system is one of the Hasbro VideoNow variants.
    pub fn is_videonow(&self) -> bool {
        matches!(
            self,
            Self::HasbroVideoNow
                | Self::HasbroVideoNowColor
                | Self::HasbroVideoNowJr
                | Self::HasbroVideoNowXp
        )
    }

    /// Whether the system uses the Xbox-family DVD layout (DMI/PFI/SS).
    pub fn is_xgd(&self) -> bool {
        matches!(self, Self::Xbox | Self::Xbox360)
    }

    /// Whether the system is an audio-only disc format.
    pub fn is_audio(&self) -> bool {
        matches!(self, Self::AudioCd | Self::SuperAudioCd)
    }

    /// All system variants.
    pub fn all() -> &'static [System] {
        ALL_SYSTEMS
    }
}

impl std::fmt::Display for System {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `System`.
#[derive(Debug, Clone)]
pub struct SystemParseError(pub String);

impl std::fmt::Display for SystemParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown system: '{}'", self.0)
    }
}

impl std::error::Error for SystemParseError {}

impl std::str::FromStr for System {
    type Err = SystemParseError;

    /// Parse a system from any recognized name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_SYSTEMS
            .iter()
            .copied()
            .find(|system| system.aliases().contains(&lower.as_str()))
            .ok_or_else(|| SystemParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/system_tests.rs"]
mod tests;
