#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("insert unique violation")]
    InsertUniqueViolation,

    #[error("no document updated")]
    NoDocumentUpdated,

    #[error("invalid document: {0}")]
    InvalidDocument(&'static str),

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

impl Error {
    pub(super) fn from_insert_error(err: mongodb::error::Error) -> Self {
        use mongodb::error::{ErrorKind, WriteFailure};

        const DUPLICATE_KEY_CODE: i32 = 11000;

        let is_duplicate_key = matches!(
            *err.kind,
            ErrorKind::Write(WriteFailure::WriteError(ref write_error))
                if write_error.code == DUPLICATE_KEY_CODE
        );

        match is_duplicate_key {
            true => Error::InsertUniqueViolation,
            false => Error::Mongo(err),
        }
    }
}
