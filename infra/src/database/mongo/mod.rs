//! MongoDB repository implementations

mod account_repository;
mod record_repository;

pub use account_repository::MongoAccountRepository;
pub use record_repository::MongoRecordRepository;

/// Server error code for a unique index violation
const DUPLICATE_KEY_CODE: i32 = 11000;

pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
