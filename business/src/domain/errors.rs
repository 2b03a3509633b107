/// Storage errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.read_error")]
    Read,
    #[error("storage.write_error")]
    Write,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_code_style_identifiers() {
        assert_eq!(StorageError::Read.to_string(), "storage.read_error");
        assert_eq!(StorageError::Write.to_string(), "storage.write_error");
    }
}
