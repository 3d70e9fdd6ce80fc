use crate::book::ContactBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(book: &ContactBook<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_contacts(book.contacts().to_vec()))
}
