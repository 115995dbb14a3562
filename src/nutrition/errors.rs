use thiserror::Error;

/// Why a single menu fragment could not become a record. These never leave
/// the extractors; they are logged and the fragment is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("entry has no nutrition link")]
    MissingLink,

    #[error("entry has no name element")]
    MissingName,

    #[error("name too short: {0:?}")]
    NameTooShort(String),

    #[error("no calories, protein, fat or carbohydrate values")]
    NoSubstantiveData,
}
