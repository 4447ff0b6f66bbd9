use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use retro_dump_core::{MediaType, System};
use retro_dump_params::{Command, Flag, Need, ValueKind};

use crate::cli_types::ListTarget;

pub(crate) fn run_list(what: ListTarget) {
    match what {
        ListTarget::Systems => list_systems(),
        ListTarget::Media => list_media(),
        ListTarget::Commands => list_commands(),
        ListTarget::Flags => list_flags(),
    }
}

fn list_systems() {
    log::info!("Supported systems:");
    crate::log_blank();

    let mut current_manufacturer = "";

    for system in System::all() {
        if system.manufacturer() != current_manufacturer {
            if !current_manufacturer.is_empty() {
                crate::log_blank();
            }
            current_manufacturer = system.manufacturer();
            log::info!(
                "{}:",
                current_manufacturer.if_supports_color(Stderr, |t| t.bold()),
            );
        }

        let media: Vec<&str> = system.media_types().iter().map(|m| m.short_name()).collect();
        log::info!(
            "  {} [{}]",
            system.short_name().if_supports_color(Stderr, |t| t.bold()),
            system.display_name().if_supports_color(Stderr, |t| t.cyan()),
        );
        log::info!("    Media: {}", media.join(", "));
        log::info!("    Aliases: {}", system.aliases().join(", "));
    }
}

fn list_media() {
    log::info!("Media types:");
    crate::log_blank();
    for media in MediaType::all() {
        log::info!(
            "  {} [{}]{}",
            media.short_name().if_supports_color(Stderr, |t| t.bold()),
            media.display_name().if_supports_color(Stderr, |t| t.cyan()),
            if media.is_layered() {
                format!(" {}", "(layered)".if_supports_color(Stderr, |t| t.dimmed()))
            } else {
                String::new()
            },
        );
    }
}

fn list_commands() {
    log::info!("DiscImageCreator commands:");
    crate::log_blank();
    for command in Command::all() {
        let flags: Vec<&str> = command.supported_flags().iter().map(|f| f.token()).collect();
        log::info!(
            "  {}",
            command.token().if_supports_color(Stderr, |t| t.bold())
        );
        if !flags.is_empty() {
            log::info!("    Flags: {}", flags.join(" "));
        }
    }
}

fn list_flags() {
    log::info!("DiscImageCreator flags:");
    crate::log_blank();
    for flag in Flag::ALL {
        let values: Vec<String> = flag.value_specs().iter().map(describe_value).collect();
        log::info!(
            "  {:<6} {}{}",
            flag.token().if_supports_color(Stderr, |t| t.bold()),
            flag.description(),
            if values.is_empty() {
                String::new()
            } else {
                format!(" {}", values.join(" "))
                    .if_supports_color(Stderr, |t| t.dimmed())
                    .to_string()
            },
        );
    }
}

fn describe_value(spec: &retro_dump_params::ValueSpec) -> String {
    let name = match spec.kind {
        ValueKind::Int(_) => spec.name.to_string(),
        ValueKind::Word(words) => words.join("|"),
    };
    match spec.need {
        Need::Mandatory => format!("<{}>", name),
        Need::Optional | Need::When(..) => format!("[{}]", name),
    }
}
