use std::env;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";

/// Where the trivia provider lives.
///
/// Endpoint URLs are resolved once here so request code never has to deal with
/// URL parse failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    base_url: Url,
    categories_url: Url,
    questions_url: Url,
}

impl ProviderConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let raw = base_url.trim();
        let mut base = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
            raw: raw.to_string(),
            source,
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(raw.to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let join = |endpoint: &str| {
            base.join(endpoint).map_err(|source| ConfigError::InvalidUrl {
                raw: raw.to_string(),
                source,
            })
        };
        let categories_url = join("api_category.php")?;
        let questions_url = join("api.php")?;

        Ok(Self {
            base_url: base,
            categories_url,
            questions_url,
        })
    }

    /// Reads `TRIVIA_API_URL`, falling back to the public Open Trivia DB.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the variable holds an unusable URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var("TRIVIA_API_URL") {
            Ok(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn categories_url(&self) -> &Url {
        &self.categories_url
    }

    #[must_use]
    pub fn questions_url(&self) -> &Url {
        &self.questions_url
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        let base_url = Url::parse("https://opentdb.com/").expect("default base url is valid");
        Self {
            categories_url: base_url
                .join("api_category.php")
                .expect("default categories url is valid"),
            questions_url: base_url.join("api.php").expect("default questions url is valid"),
            base_url,
        }
    }
}
