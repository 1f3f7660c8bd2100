use serde::Deserialize;
use ustr::Ustr;

use crate::http::Client;

/// Where the debtors backend lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Token sent as `Authorization: Token <token>` when present.
    pub auth_token: Option<String>,
}

/// Environment overrides, read from `DEBTORS_*` variables.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    debtors_api_base_url: Option<String>,
    debtors_auth_token: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            auth_token: None,
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Build-time defaults overridden by `DEBTORS_API_BASE_URL` and
    /// `DEBTORS_AUTH_TOKEN` from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Same as [`Self::from_env`] but over an explicit set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let vars: Vec<(String, String)> = vars
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_owned(), v.as_ref().to_owned()))
            .filter(|(k, _)| k.starts_with("DEBTORS_"))
            .collect();

        let raw: RawConfig = match serde_env::from_iter(vars) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("Ignoring malformed DEBTORS_* environment: {err}");
                RawConfig::default()
            }
        };

        let mut config = Self::default();
        if let Some(url) = raw.debtors_api_base_url.filter(|u| !u.trim().is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_owned();
        }
        config.auth_token = raw.debtors_auth_token.filter(|t| !t.is_empty());
        config
    }

    /// API root: `{api_base_url}/api`, or same-origin `/api` when the base is
    /// empty.
    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// HTTP client rooted at [`Self::api_url`] carrying the auth header.
    pub fn client(&self) -> Client {
        let client = Client::new(self.api_url());
        match self.auth_token() {
            Some(token) => client.with_header("authorization", format!("Token {token}")),
            None => client,
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else if cfg!(feature = "env_test") {
                "https://debtors-test.invoicely.app".to_owned()
            } else if cfg!(feature = "env_nightly") {
                "https://debtors-nightly.invoicely.app".to_owned()
            } else {
                "https://debtors.invoicely.app".to_owned()
            },
            auth_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_urls() {
        let config = BusinessConfig::default();

        if cfg!(target_arch = "wasm32") {
            assert_eq!(config.api_url(), Ustr::from("/api"));
        } else if cfg!(feature = "env_test") {
            assert_eq!(
                config.api_url(),
                Ustr::from("https://debtors-test.invoicely.app/api")
            );
        } else if cfg!(feature = "env_nightly") {
            assert_eq!(
                config.api_url(),
                Ustr::from("https://debtors-nightly.invoicely.app/api")
            );
        } else {
            assert_eq!(
                config.api_url(),
                Ustr::from("https://debtors.invoicely.app/api")
            );
        }
        assert!(config.auth_token().is_none());
    }

    #[test]
    fn test_empty_base_url_is_same_origin() {
        let config = BusinessConfig::new("");
        assert_eq!(config.api_url(), Ustr::from("/api"));
    }

    #[test]
    fn test_from_vars_overrides_defaults() {
        let config = BusinessConfig::from_vars(vec![
            ("DEBTORS_API_BASE_URL", "http://localhost:8000/"),
            ("DEBTORS_AUTH_TOKEN", "secret"),
            ("UNRELATED", "ignored"),
        ]);

        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.api_url(), Ustr::from("http://localhost:8000/api"));
        assert_eq!(config.auth_token(), Some("secret"));
    }

    #[test]
    fn test_from_vars_without_overrides_keeps_defaults() {
        let config = BusinessConfig::from_vars(Vec::<(String, String)>::new());
        assert_eq!(config, BusinessConfig::default());
    }

    #[test]
    fn test_empty_token_is_treated_as_absent() {
        let config = BusinessConfig::from_vars(vec![("DEBTORS_AUTH_TOKEN", "")]);
        assert!(config.auth_token().is_none());
    }
}
