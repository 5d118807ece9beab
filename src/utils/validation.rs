use crate::utils::error::{BreedError, Result};
use url::Url;

/// Parses `value` as an absolute http(s) URL, naming `field` in the error.
pub fn parse_http_url(field: &str, value: &str) -> Result<Url> {
    let invalid = |reason: String| BreedError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason,
    };

    if value.trim().is_empty() {
        return Err(invalid("URL cannot be empty".to_string()));
    }

    let url = Url::parse(value).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid(format!("Unsupported URL scheme: {}", scheme))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_http_url() {
        assert!(parse_http_url("endpoint", "https://api.thecatapi.com/v1/breeds").is_ok());
        assert!(parse_http_url("endpoint", "http://127.0.0.1:8080/breeds").is_ok());
        assert!(parse_http_url("endpoint", "").is_err());
        assert!(parse_http_url("endpoint", "   ").is_err());
        assert!(parse_http_url("endpoint", "not-a-url").is_err());
        assert!(parse_http_url("endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_parse_http_url_keeps_path() {
        let url = parse_http_url("endpoint", "http://localhost:9000/v1/breeds").unwrap();
        assert_eq!(url.path(), "/v1/breeds");
        assert_eq!(url.port(), Some(9000));
    }

    #[test]
    fn test_error_names_the_field() {
        let err = parse_http_url("endpoint", "ftp://example.com").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("endpoint"));
        assert!(message.contains("Unsupported URL scheme: ftp"));
    }
}
