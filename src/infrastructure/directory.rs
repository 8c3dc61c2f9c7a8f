use crate::domain::{ACCOUNT_ID_LEN, ACCOUNT_ID_PREFIX};

/// Resolves an account identifier to the holder's display name.
pub trait NameDirectory {
    fn lookup(&self, id: &str) -> Option<String>;
}

const CANNED_NAMES: [&str; 6] = [
    "Ramesh Kumar",
    "Lakshmi Devi",
    "Manjunath Gowda",
    "Savitri Patil",
    "Abdul Rahim",
    "Geetha Shetty",
];

/// Answers every well-formed identifier with one of a few canned names.
///
/// The same identifier always yields the same name.
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedDirectory;

impl NameDirectory for CannedDirectory {
    fn lookup(&self, id: &str) -> Option<String> {
        let id = id.trim().to_uppercase();
        let well_formed = id.len() == ACCOUNT_ID_LEN
            && id.starts_with(ACCOUNT_ID_PREFIX)
            && id.chars().all(|c| c.is_ascii_alphanumeric());
        if !well_formed {
            return None;
        }
        let slot = id.bytes().map(usize::from).sum::<usize>() % CANNED_NAMES.len();
        Some(CANNED_NAMES[slot].to_string())
    }
}
