use crate::utils::error::{DemoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Accepts `rs` or `.rs`; rejects anything containing a path separator.
pub fn validate_extension(field_name: &str, extension: &str) -> Result<()> {
    validate_non_empty_string(field_name, extension)?;

    let bare = extension.trim_start_matches('.');
    if bare.is_empty() || bare.contains('/') || bare.contains('\\') {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension must be a plain suffix such as 'rs'".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("src", "./src").is_ok());
        assert!(validate_path("src", "").is_err());
        assert!(validate_path("src", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension("ext", "rs").is_ok());
        assert!(validate_extension("ext", ".json").is_ok());
        assert!(validate_extension("ext", "  ").is_err());
        assert!(validate_extension("ext", ".").is_err());
        assert!(validate_extension("ext", "a/b").is_err());
    }
}
