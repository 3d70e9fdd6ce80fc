use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    book: &mut ContactBook<S>,
    current: &str,
    new_phone: &str,
) -> Result<CmdResult> {
    let (before, after) = book.update_phone(current, new_phone)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{}'s contact updated: {} -> {}",
        after.name, before.phone, after.phone
    )));
    Ok(result.with_affected_contacts(vec![after]))
}
