use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult, RolodeckPaths};
use crate::error::Result;
use crate::model::default_contacts;
use crate::store::DataStore;
use std::fs;

pub fn run<S: DataStore>(
    book: &mut ContactBook<S>,
    paths: &RolodeckPaths,
    seed_defaults: bool,
) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized rolodeck store at {}",
        paths.data_dir.display()
    )));

    let seed = if seed_defaults {
        default_contacts()
    } else {
        Vec::new()
    };
    if book.ensure_document(&seed)? {
        result.add_message(CmdMessage::info(format!(
            "Created contacts file with {} contact(s).",
            seed.len()
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Contacts file already present ({} contact(s)).",
            book.len()
        )));
    }
    Ok(result)
}
