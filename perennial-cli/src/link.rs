//! Share link assembly and parsing.
//!
//! A share link is the application's base address with a single query
//! parameter carrying the transport token. When loading, a link-supplied
//! token takes precedence over the persisted slot.

use anyhow::{Context, Result};
use url::Url;

/// Query parameter carrying the transport token.
pub const SHARE_PARAM: &str = "events";

/// Build a share URL from a base address and a token.
pub fn share_url(base: &str, token: &str) -> Result<String> {
    let mut url =
        Url::parse(base).with_context(|| format!("Invalid base address '{}'", base))?;
    url.query_pairs_mut().append_pair(SHARE_PARAM, token);
    Ok(url.to_string())
}

/// Extract the token from a pasted share link, or pass through a bare
/// token (transport tokens never parse as absolute URLs).
pub fn extract_token(input: &str) -> Result<String> {
    if let Ok(url) = Url::parse(input) {
        return url
            .query_pairs()
            .find(|(key, _)| key == SHARE_PARAM)
            .map(|(_, value)| value.into_owned())
            .with_context(|| format!("Link has no '{}' parameter", SHARE_PARAM));
    }
    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_url_appends_the_token_parameter() {
        let url = share_url("https://perennial.app/", "dG9rZW4=").unwrap();
        assert_eq!(url, "https://perennial.app/?events=dG9rZW4%3D");
    }

    #[test]
    fn share_url_rejects_garbage_base() {
        assert!(share_url("not a url", "abc").is_err());
    }

    #[test]
    fn extract_token_from_link() {
        let token = extract_token("https://perennial.app/?events=dG9rZW4%3D").unwrap();
        assert_eq!(token, "dG9rZW4=");
    }

    #[test]
    fn extract_token_ignores_other_parameters() {
        let token = extract_token("https://perennial.app/?utm=x&events=abc").unwrap();
        assert_eq!(token, "abc");
    }

    #[test]
    fn extract_bare_token_passes_through() {
        assert_eq!(extract_token("  dG9rZW4=\n").unwrap(), "dG9rZW4=");
    }

    #[test]
    fn extract_from_link_without_parameter_fails() {
        assert!(extract_token("https://perennial.app/").is_err());
    }

    #[test]
    fn roundtrip_through_share_url() {
        let token = perennial_core::token::encode("month,day,title\n3,15,Pi Day\n");
        let url = share_url("https://perennial.app/", &token).unwrap();
        assert_eq!(extract_token(&url).unwrap(), token);
    }
}
