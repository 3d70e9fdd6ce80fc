//! The interactive numbered menu.
//!
//! Reads one line per prompt from any `BufRead` and writes to any `Write`,
//! so it runs the same against a terminal, a pipe, or a test buffer. No
//! operation error ends the loop; only choosing Exit or running out of input
//! does.

use super::render::{write_error, write_lookup, write_messages};
use colored::Colorize;
use rolodeck::api::RolodeckApi;
use rolodeck::store::DataStore;
use std::io::{self, BufRead, Write};

const RULE: &str = "------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Lookup,
    Add,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Lookup),
            2 => Some(MenuChoice::Add),
            3 => Some(MenuChoice::Update),
            4 => Some(MenuChoice::Delete),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Print `prompt` and read one line. `None` means the input is exhausted.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

pub(super) fn run_menu<S, R, W>(api: &mut RolodeckApi<S>, input: R, out: W) -> io::Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let mut p = Prompter { input, out };

    loop {
        writeln!(p.out, "{}", RULE)?;
        writeln!(p.out, "1. Lookup Contact")?;
        writeln!(p.out, "2. Add Contact")?;
        writeln!(p.out, "3. Update Contact")?;
        writeln!(p.out, "4. Delete Contact")?;
        writeln!(p.out, "5. Exit")?;
        writeln!(p.out, "{}", RULE)?;

        let Some(raw) = p.ask("(Choose an option)")? else {
            break;
        };
        let choice = match raw.trim().parse::<i64>() {
            Ok(n) => MenuChoice::from_number(n),
            Err(_) => {
                writeln!(p.out, "{}", "Invalid format. Please enter numbers.".red())?;
                continue;
            }
        };

        let finished = match choice {
            Some(MenuChoice::Lookup) => lookup(api, &mut p)?,
            Some(MenuChoice::Add) => add(api, &mut p)?,
            Some(MenuChoice::Update) => update(api, &mut p)?,
            Some(MenuChoice::Delete) => delete(api, &mut p)?,
            Some(MenuChoice::Exit) => true,
            None => {
                writeln!(p.out, "{}", "Invalid option. Please choose 1-5.".red())?;
                false
            }
        };
        if finished {
            break;
        }
    }

    writeln!(p.out, "Goodbye!")?;
    p.out.flush()
}

// Each step returns Ok(true) when the input ran out mid-operation.

fn lookup<S: DataStore, R: BufRead, W: Write>(
    api: &mut RolodeckApi<S>,
    p: &mut Prompter<R, W>,
) -> io::Result<bool> {
    let Some(term) = p.ask("Enter name to lookup:")? else {
        return Ok(true);
    };
    match api.lookup(&term) {
        Ok(result) => write_lookup(&mut p.out, &result.listed_contacts)?,
        Err(e) => write_error(&mut p.out, &e)?,
    }
    Ok(false)
}

fn add<S: DataStore, R: BufRead, W: Write>(
    api: &mut RolodeckApi<S>,
    p: &mut Prompter<R, W>,
) -> io::Result<bool> {
    let Some(name) = p.ask("Enter contact name:")? else {
        return Ok(true);
    };
    let Some(phone) = p.ask("Enter contact number:")? else {
        return Ok(true);
    };
    match api.add(&name, &phone) {
        Ok(result) => write_messages(&mut p.out, &result.messages)?,
        Err(e) => write_error(&mut p.out, &e)?,
    }
    Ok(false)
}

fn update<S: DataStore, R: BufRead, W: Write>(
    api: &mut RolodeckApi<S>,
    p: &mut Prompter<R, W>,
) -> io::Result<bool> {
    let Some(current) = p.ask("Enter the CURRENT number of the contact to update:")? else {
        return Ok(true);
    };

    // Resolve the contact first so a bad key is reported before asking again.
    let name = match api.resolve_phone(&current) {
        Ok(result) => match result.listed_contacts.into_iter().next() {
            Some(contact) => contact.name,
            None => return Ok(false),
        },
        Err(e) => {
            write_error(&mut p.out, &e)?;
            return Ok(false);
        }
    };

    let Some(new_phone) = p.ask(&format!("Enter a NEW number for {}:", name))? else {
        return Ok(true);
    };
    match api.update(&current, &new_phone) {
        Ok(result) => write_messages(&mut p.out, &result.messages)?,
        Err(e) => write_error(&mut p.out, &e)?,
    }
    Ok(false)
}

fn delete<S: DataStore, R: BufRead, W: Write>(
    api: &mut RolodeckApi<S>,
    p: &mut Prompter<R, W>,
) -> io::Result<bool> {
    let Some(phone) = p.ask("Enter the number of the contact to remove:")? else {
        return Ok(true);
    };
    match api.remove(&phone) {
        Ok(result) => write_messages(&mut p.out, &result.messages)?,
        Err(e) => write_error(&mut p.out, &e)?,
    }
    Ok(false)
}
