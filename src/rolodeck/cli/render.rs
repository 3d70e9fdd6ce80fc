//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Every function writes to a
//! caller-supplied `Write` so the one-shot handlers (stdout) and the
//! interactive menu (whatever stream it was given) share one look.
//!
//! Colours come from `colored`, which switches itself off when stdout is not
//! a terminal or `NO_COLOR` is set. Column math uses display width, not byte
//! length, so names like "Zoë" or "李小龙" line up.

use colored::Colorize;
use rolodeck::api::{CmdMessage, MessageLevel};
use rolodeck::config::RolodeckConfig;
use rolodeck::error::RolodeckError;
use rolodeck::model::Contact;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 40;

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let text = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(out, "{}", text)?;
    }
    Ok(())
}

pub(super) fn write_error<W: Write>(out: &mut W, err: &RolodeckError) -> io::Result<()> {
    writeln!(out, "{}", err.to_string().red())
}

/// Lookup output: a count header, or a notice when nothing matched.
pub(super) fn write_lookup<W: Write>(out: &mut W, contacts: &[Contact]) -> io::Result<()> {
    if contacts.is_empty() {
        return writeln!(out, "No matching contacts found.");
    }
    writeln!(out, "Found {} contact(s):", contacts.len())?;
    write_contacts(out, contacts)
}

pub(super) fn write_list<W: Write>(out: &mut W, contacts: &[Contact]) -> io::Result<()> {
    if contacts.is_empty() {
        return writeln!(out, "No contacts yet.");
    }
    write_contacts(out, contacts)
}

fn write_contacts<W: Write>(out: &mut W, contacts: &[Contact]) -> io::Result<()> {
    let name_width = contacts
        .iter()
        .map(|c| c.name.width())
        .max()
        .unwrap_or(0)
        .min(NAME_WIDTH);
    let index_width = contacts.len().to_string().len();

    for (i, contact) in contacts.iter().enumerate() {
        let name = truncate_to_width(&contact.name, name_width);
        let padding = name_width.saturating_sub(name.width());
        let index = format!("{:>width$}.", i + 1, width = index_width);
        writeln!(
            out,
            "  {} {}{}  {}",
            index.dimmed(),
            name.bold(),
            " ".repeat(padding),
            contact.phone.yellow()
        )?;
    }
    Ok(())
}

pub(super) fn write_config<W: Write>(out: &mut W, config: &RolodeckConfig) -> io::Result<()> {
    writeln!(out, "file-name = {}", config.file_name)?;
    writeln!(out, "seed-defaults = {}", config.seed_defaults)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
