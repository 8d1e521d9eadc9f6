//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate that a string is an `http://` or `https://` URL with a host part.
pub fn validate_http_url(value: &str, field_name: &str) -> Result<(), String> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .ok_or_else(|| format!("{} must start with http:// or https://", field_name))?;

    if rest.is_empty() || rest.starts_with('/') {
        return Err(format!("{} is missing a host", field_name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("beta-3", "name").is_ok());
        assert_eq!(
            validate_not_empty("   ", "name"),
            Err("name cannot be empty".to_string())
        );
    }

    #[test]
    fn test_validate_http_url() {
        assert!(validate_http_url("https://beta-3.fuel.network/graphql", "url").is_ok());
        assert!(validate_http_url("http://localhost:4000/graphql", "url").is_ok());
        assert!(validate_http_url("ws://localhost:4000", "url").is_err());
        assert!(validate_http_url("https://", "url").is_err());
        assert!(validate_http_url("https:///graphql", "url").is_err());
    }
}
