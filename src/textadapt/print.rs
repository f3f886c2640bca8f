use colored::Colorize;
use serde::Serialize;
use textadapt::commands::{CmdMessage, DecodedEntry, MessageLevel};
use textadapt::config::AdaptConfig;
use textadapt::error::Result;

/// Messages go to stderr so stdout stays valid JSON.
pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

pub fn print_entries(entries: &[DecodedEntry]) -> Result<()> {
    for (i, entry) in entries.iter().enumerate() {
        let position = format!("{:>3}.", i + 1);
        match &entry.transformation {
            Some(transformation) => println!("{} {}", position.yellow(), transformation),
            None => println!(
                "{} {} {}",
                position.yellow(),
                "unrecognized".red(),
                serde_json::to_string(&entry.representation)?.dimmed()
            ),
        }
    }
    Ok(())
}

pub fn print_config(config: &AdaptConfig) {
    for key in AdaptConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key.bold(), value);
        }
    }
}
