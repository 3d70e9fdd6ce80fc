use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(book: &ContactBook<S>) -> Result<CmdResult> {
    match book.store().location() {
        Some(path) => Ok(CmdResult::default().with_paths(vec![path])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning("This store has no file on disk."));
            Ok(result)
        }
    }
}
