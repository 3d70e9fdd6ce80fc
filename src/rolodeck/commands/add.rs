use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(book: &mut ContactBook<S>, name: &str, phone: &str) -> Result<CmdResult> {
    let contact = book.add(name, phone)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} added to contacts ({}).",
        contact.name, contact.phone
    )));
    Ok(result.with_affected_contacts(vec![contact]))
}
