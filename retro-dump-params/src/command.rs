//! Base commands and the command/flag support table.

use std::ops::RangeInclusive;

use retro_dump_core::{MediaType, System};

use crate::flag::Flag;

/// DiscImageCreator operating mode, the first token of every command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Audio,
    BluRay,
    Close,
    CompactDisc,
    Data,
    Dvd,
    Disk,
    DriveSpeed,
    Eject,
    Floppy,
    GdRom,
    Mds,
    Reset,
    Sacd,
    Start,
    Stop,
    Sub,
    Swap,
    Tape,
    Version,
    Xbox,
    XboxSwap,
    Xgd2Swap,
    Xgd3Swap,
}

const ALL_COMMANDS: &[Command] = &[
    Command::Audio,
    Command::BluRay,
    Command::Close,
    Command::CompactDisc,
    Command::Data,
    Command::Dvd,
    Command::Disk,
    Command::DriveSpeed,
    Command::Eject,
    Command::Floppy,
    Command::GdRom,
    Command::Mds,
    Command::Reset,
    Command::Sacd,
    Command::Start,
    Command::Stop,
    Command::Sub,
    Command::Swap,
    Command::Tape,
    Command::Version,
    Command::Xbox,
    Command::XboxSwap,
    Command::Xgd2Swap,
    Command::Xgd3Swap,
];

/// Positional arguments a command takes, in emission order:
/// drive, filename, speed, then the LBA pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub drive: bool,
    pub filename: bool,
    pub speed: Option<RangeInclusive<i32>>,
    pub lba_range: bool,
}

impl Signature {
    const fn new(drive: bool, filename: bool, max_speed: Option<i32>, lba_range: bool) -> Self {
        let speed = match max_speed {
            Some(max) => Some(0..=max),
            None => None,
        };
        Self {
            drive,
            filename,
            speed,
            lba_range,
        }
    }

    /// Number of positional tokens that follow the command.
    pub fn arity(&self) -> usize {
        usize::from(self.drive)
            + usize::from(self.filename)
            + usize::from(self.speed.is_some())
            + if self.lba_range { 2 } else { 0 }
    }
}

const CD_SPEED: i32 = 72;
const DVD_SPEED: i32 = 24;
const SACD_SPEED: i32 = 16;

use Flag::*;

const AUDIO_DATA_FLAGS: &[Flag] = &[
    D8Opcode,
    C2Opcode,
    BeOpcode,
    AddOffset,
    DatExpand,
    DisableBeep,
    ForceUnitAccess,
    NoFixSubP,
    NoFixSubQ,
    NoFixSubRtoW,
    Reverse,
    ScanAntiMod,
    ScanFileProtect,
    ScanSectorProtect,
    SkipSector,
    SubchannelReadLevel,
];

const CD_FLAGS: &[Flag] = &[
    D8Opcode,
    C2Opcode,
    BeOpcode,
    AddOffset,
    Amsf,
    AtariJaguar,
    DatExpand,
    DisableBeep,
    ExtractMicrosoftCabFile,
    ForceUnitAccess,
    MultiSectorRead,
    MultiSession,
    NoFixSubP,
    NoFixSubQ,
    NoFixSubQLibCrypt,
    NoFixSubQSecuRom,
    NoFixSubRtoW,
    ScanAntiMod,
    ScanFileProtect,
    ScanSectorProtect,
    SeventyFour,
    SubchannelReadLevel,
    Tages,
    VideoNow,
    VideoNowColor,
    VideoNowXp,
];

const SWAP_FLAGS: &[Flag] = &[
    D8Opcode,
    C2Opcode,
    BeOpcode,
    AddOffset,
    DatExpand,
    DisableBeep,
    ForceUnitAccess,
    NoFixSubP,
    NoFixSubQ,
    NoFixSubQLibCrypt,
    NoFixSubQSecuRom,
    NoFixSubRtoW,
    ScanAntiMod,
    ScanFileProtect,
    ScanSectorProtect,
    SeventyFour,
    SubchannelReadLevel,
];

const GD_FLAGS: &[Flag] = &[
    D8Opcode,
    C2Opcode,
    BeOpcode,
    DatExpand,
    DisableBeep,
    ForceUnitAccess,
    NoFixSubP,
    NoFixSubQ,
    NoFixSubRtoW,
    SubchannelReadLevel,
];

const DVD_FLAGS: &[Flag] = &[
    CopyrightManagementInformation,
    DatExpand,
    DisableBeep,
    DvdReread,
    Fix,
    ForceUnitAccess,
    PadSector,
    Range,
    Raw,
    Resume,
    ScanFileProtect,
    UseAnchorVolumeDescriptorPointer,
];

const BD_FLAGS: &[Flag] = &[
    DatExpand,
    DisableBeep,
    ForceUnitAccess,
    Range,
    UseAnchorVolumeDescriptorPointer,
];

const XBOX_FLAGS: &[Flag] = &[DatExpand, DisableBeep, ForceUnitAccess, NoSkipSecuritySector];

const DISK_FLAGS: &[Flag] = &[DatExpand, DisableBeep];

const NO_FLAGS: &[Flag] = &[];

impl Command {
    /// Command-line token for this command.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::BluRay => "bd",
            Self::Close => "close",
            Self::CompactDisc => "cd",
            Self::Data => "data",
            Self::Dvd => "dvd",
            Self::Disk => "disk",
            Self::DriveSpeed => "ls",
            Self::Eject => "eject",
            Self::Floppy => "fd",
            Self::GdRom => "gd",
            Self::Mds => "mds",
            Self::Reset => "reset",
            Self::Sacd => "sacd",
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Sub => "sub",
            Self::Swap => "swap",
            Self::Tape => "tape",
            Self::Version => "/v",
            Self::Xbox => "xbox",
            Self::XboxSwap => "xboxswap",
            Self::Xgd2Swap => "xgd2swap",
            Self::Xgd3Swap => "xgd3swap",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        ALL_COMMANDS.iter().copied().find(|c| c.token() == token)
    }

    pub fn all() -> &'static [Command] {
        ALL_COMMANDS
    }

    /// Fixed positional signature of this command.
    pub fn signature(&self) -> Signature {
        match self {
            Self::Audio | Self::Data => Signature::new(true, true, Some(CD_SPEED), true),
            Self::CompactDisc
            | Self::GdRom
            | Self::Swap
            | Self::Xbox
            | Self::XboxSwap
            | Self::Xgd2Swap
            | Self::Xgd3Swap => Signature::new(true, true, Some(CD_SPEED), false),
            Self::Dvd => Signature::new(true, true, Some(DVD_SPEED), false),
            Self::Sacd => Signature::new(true, true, Some(SACD_SPEED), false),
            Self::BluRay | Self::Floppy | Self::Disk | Self::Tape => {
                Signature::new(true, true, None, false)
            }
            Self::Sub | Self::Mds => Signature::new(false, true, None, false),
            Self::Close
            | Self::DriveSpeed
            | Self::Eject
            | Self::Reset
            | Self::Start
            | Self::Stop => Signature::new(true, false, None, false),
            Self::Version => Signature::new(false, false, None, false),
        }
    }

    /// Flags this command accepts. This table is the only authority both
    /// the parser and the serializer consult.
    pub fn supported_flags(&self) -> &'static [Flag] {
        match self {
            Self::Audio | Self::Data => AUDIO_DATA_FLAGS,
            Self::CompactDisc => CD_FLAGS,
            Self::Swap => SWAP_FLAGS,
            Self::GdRom => GD_FLAGS,
            Self::Dvd => DVD_FLAGS,
            Self::BluRay => BD_FLAGS,
            Self::Xbox | Self::XboxSwap | Self::Xgd2Swap | Self::Xgd3Swap => XBOX_FLAGS,
            Self::Floppy | Self::Disk | Self::Sacd => DISK_FLAGS,
            Self::Close
            | Self::DriveSpeed
            | Self::Eject
            | Self::Mds
            | Self::Reset
            | Self::Start
            | Self::Stop
            | Self::Sub
            | Self::Tape
            | Self::Version => NO_FLAGS,
        }
    }

    pub fn supports(&self, flag: Flag) -> bool {
        self.supported_flags().contains(&flag)
    }

    /// Whether this command reads CD-style sectors (C2 handling applies).
    pub fn is_cd_family(&self) -> bool {
        matches!(
            self,
            Self::Audio | Self::CompactDisc | Self::Data | Self::GdRom | Self::Swap
        )
    }

    /// Command used to dump `media` for `system`, if the pair is dumpable.
    pub fn for_media(system: System, media: MediaType) -> Option<Self> {
        match media {
            MediaType::CdRom if system == System::SuperAudioCd => Some(Self::Sacd),
            MediaType::CdRom => Some(Self::CompactDisc),
            MediaType::Dvd if system.is_xgd() => Some(Self::Xbox),
            MediaType::Dvd | MediaType::HdDvd => Some(Self::Dvd),
            MediaType::NintendoGameCubeGameDisc | MediaType::NintendoWiiOpticalDisc => {
                Some(Self::Dvd)
            }
            MediaType::GdRom => Some(Self::GdRom),
            MediaType::BluRay => Some(Self::BluRay),
            MediaType::FloppyDisk => Some(Self::Floppy),
            MediaType::HardDisk => Some(Self::Disk),
            MediaType::DataCartridge => Some(Self::Tape),
            MediaType::NintendoWiiUOpticalDisc | MediaType::Umd => None,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
#[path = "tests/command_tests.rs"]
mod tests;
