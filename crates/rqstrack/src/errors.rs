//! Error handling and exit codes.

use rqstrack_core::constants::exit_codes;
use rqstrack_core::GrantError;
use rqstrack_io::PersistError;

/// Exit code for a store error.
#[must_use]
pub fn grant_error_code(err: &GrantError) -> i32 {
    match err {
        GrantError::Validation(_) => exit_codes::ERROR_VALIDATION,
        GrantError::DuplicateId(_) => exit_codes::ERROR_DUPLICATE,
        GrantError::NotFound(_) => exit_codes::ERROR_NOT_FOUND,
    }
}

/// Exit code for a persistence error.
#[must_use]
pub fn persist_error_code(err: &PersistError) -> i32 {
    match err {
        PersistError::Store(inner) => grant_error_code(inner),
        PersistError::Io(_) | PersistError::Csv(_) | PersistError::InvalidRow { .. } => {
            exit_codes::ERROR_PERSIST
        }
    }
}

/// Exit code for an application error: the first typed cause in the chain
/// decides, anything else is generic.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(grant) = cause.downcast_ref::<GrantError>() {
            return grant_error_code(grant);
        }
        if let Some(persist) = cause.downcast_ref::<PersistError>() {
            return persist_error_code(persist);
        }
    }
    exit_codes::ERROR_GENERIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use rqstrack_core::RecordId;

    #[test]
    fn store_error_codes() {
        assert_eq!(grant_error_code(&GrantError::Validation("x".into())), 2);
        assert_eq!(grant_error_code(&GrantError::DuplicateId(RecordId(1))), 3);
        assert_eq!(grant_error_code(&GrantError::NotFound(RecordId(1))), 4);
    }

    #[test]
    fn persistence_error_codes() {
        let io = PersistError::Io(std::io::Error::other("disk full"));
        assert_eq!(persist_error_code(&io), 5);
        let row = PersistError::InvalidRow {
            line: 3,
            reason: "Status: bad".into(),
        };
        assert_eq!(persist_error_code(&row), 5);
        let dup = PersistError::Store(GrantError::DuplicateId(RecordId(7)));
        assert_eq!(persist_error_code(&dup), 3);
    }

    #[test]
    fn context_does_not_hide_cause() {
        let err = Err::<(), _>(GrantError::NotFound(RecordId(99)))
            .context("updating record")
            .unwrap_err();
        assert_eq!(exit_code(&err), exit_codes::ERROR_NOT_FOUND);
    }

    #[test]
    fn untyped_error_is_generic() {
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), exit_codes::ERROR_GENERIC);
    }
}
