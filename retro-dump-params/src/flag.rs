//! DiscImageCreator flags and their sub-value contracts.
//!
//! Every flag declares exactly which values may follow it on the command
//! line, which of them are mandatory, and what bounds each must satisfy.
//! Parsing and serialization both read these declarations, so the two
//! directions cannot drift apart.

/// A DiscImageCreator option flag.
///
/// Variants are listed in emission order; [`Flag::ALL`] is the canonical
/// order used when serializing a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Flag {
    D8Opcode,
    C2Opcode,
    BeOpcode,
    AddOffset,
    Amsf,
    AtariJaguar,
    CopyrightManagementInformation,
    DatExpand,
    DisableBeep,
    DvdReread,
    ExtractMicrosoftCabFile,
    Fix,
    ForceUnitAccess,
    MultiSectorRead,
    MultiSession,
    NoFixSubP,
    NoFixSubQ,
    NoFixSubQLibCrypt,
    NoFixSubQSecuRom,
    NoFixSubRtoW,
    NoSkipSecuritySector,
    PadSector,
    Range,
    Raw,
    Resume,
    Reverse,
    ScanAntiMod,
    ScanFileProtect,
    ScanSectorProtect,
    SeventyFour,
    SkipSector,
    SubchannelReadLevel,
    Tages,
    UseAnchorVolumeDescriptorPointer,
    VideoNow,
    VideoNowColor,
    VideoNowXp,
}

impl Flag {
    /// Canonical emission order.
    pub const ALL: &'static [Flag] = &[
        Flag::D8Opcode,
        Flag::C2Opcode,
        Flag::BeOpcode,
        Flag::AddOffset,
        Flag::Amsf,
        Flag::AtariJaguar,
        Flag::CopyrightManagementInformation,
        Flag::DatExpand,
        Flag::DisableBeep,
        Flag::DvdReread,
        Flag::ExtractMicrosoftCabFile,
        Flag::Fix,
        Flag::ForceUnitAccess,
        Flag::MultiSectorRead,
        Flag::MultiSession,
        Flag::NoFixSubP,
        Flag::NoFixSubQ,
        Flag::NoFixSubQLibCrypt,
        Flag::NoFixSubQSecuRom,
        Flag::NoFixSubRtoW,
        Flag::NoSkipSecuritySector,
        Flag::PadSector,
        Flag::Range,
        Flag::Raw,
        Flag::Resume,
        Flag::Reverse,
        Flag::ScanAntiMod,
        Flag::ScanFileProtect,
        Flag::ScanSectorProtect,
        Flag::SeventyFour,
        Flag::SkipSector,
        Flag::SubchannelReadLevel,
        Flag::Tages,
        Flag::UseAnchorVolumeDescriptorPointer,
        Flag::VideoNow,
        Flag::VideoNowColor,
        Flag::VideoNowXp,
    ];

    /// Command-line token for this flag.
    pub fn token(&self) -> &'static str {
        match self {
            Self::D8Opcode => "/d8",
            Self::C2Opcode => "/c2",
            Self::BeOpcode => "/be",
            Self::AddOffset => "/a",
            Self::Amsf => "/p",
            Self::AtariJaguar => "/aj",
            Self::CopyrightManagementInformation => "/c",
            Self::DatExpand => "/d",
            Self::DisableBeep => "/q",
            Self::DvdReread => "/rr",
            Self::ExtractMicrosoftCabFile => "/mscf",
            Self::Fix => "/fix",
            Self::ForceUnitAccess => "/f",
            Self::MultiSectorRead => "/mr",
            Self::MultiSession => "/ms",
            Self::NoFixSubP => "/np",
            Self::NoFixSubQ => "/nq",
            Self::NoFixSubQLibCrypt => "/nl",
            Self::NoFixSubQSecuRom => "/ns",
            Self::NoFixSubRtoW => "/nr",
            Self::NoSkipSecuritySector => "/nss",
            Self::PadSector => "/ps",
            Self::Range => "/ra",
            Self::Raw => "/raw",
            Self::Resume => "/re",
            Self::Reverse => "/r",
            Self::ScanAntiMod => "/am",
            Self::ScanFileProtect => "/sf",
            Self::ScanSectorProtect => "/ss",
            Self::SeventyFour => "/74",
            Self::SkipSector => "/sk",
            Self::SubchannelReadLevel => "/s",
            Self::Tages => "/t",
            Self::UseAnchorVolumeDescriptorPointer => "/avdp",
            Self::VideoNow => "/vn",
            Self::VideoNowColor => "/vnc",
            Self::VideoNowXp => "/vnx",
        }
    }

    /// Short description shown by `retro-dump list flags`.
    pub fn description(&self) -> &'static str {
        match self {
            Self::D8Opcode => "Use the 0xD8 read command",
            Self::C2Opcode => "Reread sectors with C2 errors",
            Self::BeOpcode => "Use the 0xBE read command",
            Self::AddOffset => "Add a manual write offset",
            Self::Amsf => "Dump the AMSF range from 00:00:00",
            Self::AtariJaguar => "Atari Jaguar CD mode",
            Self::CopyrightManagementInformation => "Log copyright management information",
            Self::DatExpand => "Write extra hash entries to the datfile",
            Self::DisableBeep => "Disable the completion beep",
            Self::DvdReread => "Reread unreadable DVD sectors",
            Self::ExtractMicrosoftCabFile => "Extract Microsoft CAB files",
            Self::Fix => "Fix a known bad sector",
            Self::ForceUnitAccess => "Read with force unit access",
            Self::MultiSectorRead => "Read multiple sectors per command",
            Self::MultiSession => "Read the lead-out and lead-in of each session",
            Self::NoFixSubP => "Do not fix the P subchannel",
            Self::NoFixSubQ => "Do not fix the Q subchannel",
            Self::NoFixSubQLibCrypt => "Do not fix LibCrypt Q subchannel data",
            Self::NoFixSubQSecuRom => "Do not fix SecuROM Q subchannel data",
            Self::NoFixSubRtoW => "Do not fix the R-W subchannels",
            Self::NoSkipSecuritySector => "Do not skip the Xbox security sectors",
            Self::PadSector => "Pad unreadable sectors",
            Self::Range => "Dump a sector range",
            Self::Raw => "Dump raw DVD sectors",
            Self::Resume => "Resume an interrupted dump",
            Self::Reverse => "Read from the end of the disc",
            Self::ScanAntiMod => "Scan for anti-modchip strings",
            Self::ScanFileProtect => "Scan file-based protection",
            Self::ScanSectorProtect => "Scan sector-based protection",
            Self::SeventyFour => "Read overburned discs past 74 minutes",
            Self::SkipSector => "Skip a number of sectors",
            Self::SubchannelReadLevel => "Subchannel read level",
            Self::Tages => "Scan for TAGES protection",
            Self::UseAnchorVolumeDescriptorPointer => "Use the anchor volume descriptor pointer",
            Self::VideoNow => "Hasbro VideoNow mode",
            Self::VideoNowColor => "Hasbro VideoNow Color mode",
            Self::VideoNowXp => "Hasbro VideoNow XP mode",
        }
    }

    /// Look up a flag by its exact command-line token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.token() == token)
    }

    /// Declared sub-values for this flag, in the order they appear on the
    /// command line.
    pub fn value_specs(&self) -> &'static [ValueSpec] {
        match self {
            Self::AddOffset => ADD_OFFSET_VALUES,
            Self::BeOpcode => BE_OPCODE_VALUES,
            Self::C2Opcode => C2_OPCODE_VALUES,
            Self::DvdReread => DVD_REREAD_VALUES,
            Self::Fix => FIX_VALUES,
            Self::ForceUnitAccess => FORCE_UNIT_ACCESS_VALUES,
            Self::MultiSectorRead => MULTI_SECTOR_READ_VALUES,
            Self::NoSkipSecuritySector => NO_SKIP_SS_VALUES,
            Self::PadSector => PAD_SECTOR_VALUES,
            Self::Range => RANGE_VALUES,
            Self::ScanFileProtect => SCAN_FILE_PROTECT_VALUES,
            Self::SkipSector => SKIP_SECTOR_VALUES,
            Self::SubchannelReadLevel => SUBCHANNEL_VALUES,
            Self::VideoNow => VIDEO_NOW_VALUES,
            _ => &[],
        }
    }
}

const ADD_OFFSET_VALUES: &[ValueSpec] = &[ValueSpec::int("offset", Bound::Any, Need::Mandatory)];
const BE_OPCODE_VALUES: &[ValueSpec] = &[ValueSpec::word("mode", &["raw", "pack"])];
const C2_OPCODE_VALUES: &[ValueSpec] = &[
    ValueSpec::int("reread count", Bound::Positive, Need::Optional),
    ValueSpec::int("reread mode", Bound::Between(0, 1), Need::Optional),
    ValueSpec::int("start LBA", Bound::NonNegative, Need::When(1, 1)),
    ValueSpec::int("end LBA", Bound::NonNegative, Need::When(1, 1)),
];
const DVD_REREAD_VALUES: &[ValueSpec] =
    &[ValueSpec::int("reread count", Bound::Positive, Need::Optional)];
const FIX_VALUES: &[ValueSpec] = &[ValueSpec::int("LBA", Bound::NonNegative, Need::Mandatory)];
const FORCE_UNIT_ACCESS_VALUES: &[ValueSpec] =
    &[ValueSpec::int("delete sectors", Bound::NonNegative, Need::Optional)];
const MULTI_SECTOR_READ_VALUES: &[ValueSpec] =
    &[ValueSpec::int("value", Bound::NonNegative, Need::Optional)];
const NO_SKIP_SS_VALUES: &[ValueSpec] =
    &[ValueSpec::int("retry count", Bound::NonNegative, Need::Optional)];
const PAD_SECTOR_VALUES: &[ValueSpec] =
    &[ValueSpec::int("pad byte", Bound::Between(0, 1), Need::Optional)];
const RANGE_VALUES: &[ValueSpec] = &[
    ValueSpec::int("start LBA", Bound::NonNegative, Need::Mandatory),
    ValueSpec::int("end LBA", Bound::NonNegative, Need::Mandatory),
];
const SCAN_FILE_PROTECT_VALUES: &[ValueSpec] =
    &[ValueSpec::int("timeout seconds", Bound::NonNegative, Need::Optional)];
const SKIP_SECTOR_VALUES: &[ValueSpec] = &[
    ValueSpec::int("count", Bound::NonNegative, Need::Mandatory),
    ValueSpec::int("second count", Bound::NonNegative, Need::Optional),
];
const SUBCHANNEL_VALUES: &[ValueSpec] =
    &[ValueSpec::int("level", Bound::Between(0, 2), Need::Optional)];
const VIDEO_NOW_VALUES: &[ValueSpec] =
    &[ValueSpec::int("offset", Bound::NonNegative, Need::Optional)];

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A value attached to a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagValue {
    Int(i32),
    Word(&'static str),
}

impl FlagValue {
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Word(_) => None,
        }
    }
}

impl std::fmt::Display for FlagValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Word(w) => write!(f, "{}", w),
        }
    }
}

/// Numeric bound a sub-value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Any,
    Positive,
    NonNegative,
    Between(i32, i32),
}

impl Bound {
    pub fn contains(&self, value: i32) -> bool {
        match *self {
            Self::Any => true,
            Self::Positive => value > 0,
            Self::NonNegative => value >= 0,
            Self::Between(lo, hi) => (lo..=hi).contains(&value),
        }
    }
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "any integer"),
            Self::Positive => write!(f, "> 0"),
            Self::NonNegative => write!(f, ">= 0"),
            Self::Between(lo, hi) => write!(f, "{}..={}", lo, hi),
        }
    }
}

/// Whether a sub-value must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Need {
    Mandatory,
    Optional,
    /// Optional, and only allowed when the sub-value at `.0` equals `.1`.
    When(usize, i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int(Bound),
    Word(&'static [&'static str]),
}

/// One declared sub-value of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueSpec {
    pub name: &'static str,
    pub kind: ValueKind,
    pub need: Need,
}

impl ValueSpec {
    const fn int(name: &'static str, bound: Bound, need: Need) -> Self {
        Self {
            name,
            kind: ValueKind::Int(bound),
            need,
        }
    }

    const fn word(name: &'static str, words: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: ValueKind::Word(words),
            need: Need::Optional,
        }
    }

    pub fn is_mandatory(&self) -> bool {
        self.need == Need::Mandatory
    }

    /// Whether this sub-value may appear given the values before it.
    pub fn is_allowed_after(&self, previous: &[FlagValue]) -> bool {
        match self.need {
            Need::When(index, expected) => {
                previous.get(index).and_then(FlagValue::as_int) == Some(expected)
            }
            _ => true,
        }
    }

    /// Interpret a raw token as this sub-value. Integers use `i32` parsing.
    pub fn accept(&self, token: &str) -> Option<FlagValue> {
        match self.kind {
            ValueKind::Int(bound) => token
                .parse::<i32>()
                .ok()
                .filter(|v| bound.contains(*v))
                .map(FlagValue::Int),
            ValueKind::Word(words) => words
                .iter()
                .find(|w| w.eq_ignore_ascii_case(token))
                .map(|w| FlagValue::Word(w)),
        }
    }

    /// Whether an already-typed value satisfies this sub-value's contract.
    pub fn admits(&self, value: &FlagValue) -> bool {
        match (self.kind, value) {
            (ValueKind::Int(bound), FlagValue::Int(v)) => bound.contains(*v),
            (ValueKind::Word(words), FlagValue::Word(w)) => words.contains(w),
            _ => false,
        }
    }
}
