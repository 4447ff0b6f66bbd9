//! Default parameter sets per system and media type.

use retro_dump_core::{MediaType, System};
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::error::ParamError;
use crate::flag::Flag;
use crate::parameters::Parameters;

/// Built-in C2 reread count used when the option is left at 0.
pub const DEFAULT_C2_REREAD: i32 = 20;

/// Built-in DVD reread count used when the option is left at 0.
pub const DEFAULT_DVD_REREAD: i32 = 10;

/// User preferences that shape a default parameter set.
///
/// Reread counts use sentinels: a negative value disables the flag, `0`
/// selects the built-in default, anything else is passed through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpOptions {
    pub quiet_mode: bool,
    pub paranoid_mode: bool,
    pub use_cmi_flag: bool,
    pub reread_count: i32,
    pub dvd_reread_count: i32,
    pub multi_sector_read: bool,
    pub multi_sector_read_value: i32,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            quiet_mode: false,
            paranoid_mode: false,
            use_cmi_flag: false,
            reread_count: DEFAULT_C2_REREAD,
            dvd_reread_count: DEFAULT_DVD_REREAD,
            multi_sector_read: false,
            multi_sector_read_value: 0,
        }
    }
}

fn resolve_reread(count: i32, default: i32) -> Option<i32> {
    match count {
        c if c < 0 => None,
        0 => Some(default),
        c => Some(c),
    }
}

/// Flags a system always wants, regardless of user options.
fn system_presets(system: System, media: MediaType) -> Vec<(Flag, Vec<i32>)> {
    match system {
        System::Ps1 => vec![(Flag::ScanAntiMod, vec![]), (Flag::NoFixSubQLibCrypt, vec![])],
        System::AtariJaguarCd => vec![(Flag::AtariJaguar, vec![])],
        System::HasbroVideoNow | System::HasbroVideoNowJr => vec![(Flag::VideoNow, vec![])],
        System::HasbroVideoNowColor => vec![(Flag::VideoNowColor, vec![])],
        System::HasbroVideoNowXp => vec![(Flag::VideoNowXp, vec![])],
        System::IbmPcCompatible | System::AppleMacintosh if media == MediaType::CdRom => vec![
            (Flag::NoFixSubQSecuRom, vec![]),
            (Flag::ScanFileProtect, vec![]),
            (Flag::ScanSectorProtect, vec![]),
        ],
        System::GameCube | System::Wii
            if matches!(
                media,
                MediaType::NintendoGameCubeGameDisc | MediaType::NintendoWiiOpticalDisc
            ) =>
        {
            vec![(Flag::Raw, vec![])]
        }
        _ => vec![],
    }
}

/// Flags derived from the user's options.
fn option_presets(command: Command, options: &DumpOptions) -> Vec<(Flag, Vec<i32>)> {
    let mut presets = Vec::new();

    if let Some(count) = resolve_reread(options.reread_count, DEFAULT_C2_REREAD) {
        presets.push((Flag::C2Opcode, vec![count]));
    }
    if let Some(count) = resolve_reread(options.dvd_reread_count, DEFAULT_DVD_REREAD) {
        presets.push((Flag::DvdReread, vec![count]));
    }
    if options.quiet_mode {
        presets.push((Flag::DisableBeep, vec![]));
    }
    if options.use_cmi_flag && command == Command::Dvd {
        presets.push((Flag::CopyrightManagementInformation, vec![]));
    }
    if options.multi_sector_read {
        presets.push((Flag::MultiSectorRead, vec![options.multi_sector_read_value]));
    }
    if options.paranoid_mode && command.is_cd_family() {
        presets.push((Flag::ScanSectorProtect, vec![]));
        presets.push((Flag::SubchannelReadLevel, vec![2]));
    }

    presets
}

impl Parameters {
    /// Build the default parameter set for dumping `media` on `system`.
    ///
    /// Presets the chosen command does not support are left out. Fails only
    /// when no command exists for the pair or an option value violates a
    /// flag's sub-value contract.
    pub fn with_defaults(
        system: System,
        media: MediaType,
        drive: impl Into<String>,
        filename: impl Into<String>,
        speed: i32,
        options: &DumpOptions,
    ) -> Result<Self, ParamError> {
        let command = Command::for_media(system, media)
            .ok_or(ParamError::UnsupportedMedia { system, media })?;

        let mut params = Parameters::new(command)
            .with_drive(drive)
            .with_filename(filename);
        if command.signature().speed.is_some() {
            params.speed = Some(speed);
        }

        let presets = system_presets(system, media)
            .into_iter()
            .chain(option_presets(command, options));
        for (flag, values) in presets {
            if command.supports(flag) {
                params.enable_with(flag, &values)?;
            } else {
                log::debug!("'{}' does not support {}, leaving it off", command, flag);
            }
        }

        Ok(params)
    }
}

#[cfg(test)]
#[path = "tests/defaults_tests.rs"]
mod tests;
