use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(book: &mut ContactBook<S>, phone: &str) -> Result<CmdResult> {
    let removed = book.remove(phone)?;

    let mut result = CmdResult::default();
    for contact in &removed {
        result.add_message(CmdMessage::success(format!(
            "Contact removed: {} ({})",
            contact.name, contact.phone
        )));
    }
    Ok(result.with_affected_contacts(removed))
}
