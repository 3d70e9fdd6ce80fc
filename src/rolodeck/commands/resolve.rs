use crate::book::ContactBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Resolve a contact by phone without changing anything. The interactive
/// update uses this to name the contact before asking for the new number.
pub fn run<S: DataStore>(book: &ContactBook<S>, phone: &str) -> Result<CmdResult> {
    let contact = book.find_by_phone(phone)?.clone();
    Ok(CmdResult::default().with_listed_contacts(vec![contact]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RolodeckError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resolves_by_digits() {
        let book = ContactBook::open(StoreFixture::new().with_defaults().store);
        let result = run(&book, "123 456 3967").unwrap();
        assert_eq!(result.listed_contacts[0].name, "Bryan");
    }

    #[test]
    fn reports_bad_key_before_lookup() {
        let book = ContactBook::open(StoreFixture::new().with_defaults().store);
        assert!(matches!(
            run(&book, "12-34"),
            Err(RolodeckError::InvalidKey(_))
        ));
        assert!(matches!(
            run(&book, "999-999-9999"),
            Err(RolodeckError::ContactNotFound(_))
        ));
    }
}
