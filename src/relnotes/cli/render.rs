use colored::Colorize;
use relnotes::api::{CmdMessage, MessageLevel};
use relnotes::config::RelnotesConfig;

fn styled(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", styled(message));
    }
}

/// Same as [`print_messages`], on stderr, for commands whose stdout is data.
pub(super) fn eprint_messages(messages: &[CmdMessage]) {
    for message in messages {
        eprintln!("{}", styled(message));
    }
}

pub(super) fn render_config(config: &RelnotesConfig) -> String {
    RelnotesConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}
