use crate::core::l10n::{Locale, DEFAULT_LOCALE};
use crate::core::query::{EndpointUrl, DEFAULT_API_PREFIX};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ORIGIN: &str = "http://localhost";

static ENV_VAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    pub site: SiteSection,
    #[serde(default)]
    pub formatting: FormattingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteSection {
    pub origin: String,
    pub api_prefix: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormattingSection {
    pub locale: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteSection {
                origin: DEFAULT_ORIGIN.to_string(),
                api_prefix: None,
            },
            formatting: FormattingSection::default(),
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_ORIGIN})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn origin(&self) -> &str {
        &self.site.origin
    }

    pub fn api_prefix(&self) -> &str {
        self.site.api_prefix.as_deref().unwrap_or(DEFAULT_API_PREFIX)
    }

    pub fn locale(&self) -> Result<Locale> {
        self.formatting
            .locale
            .as_deref()
            .unwrap_or(DEFAULT_LOCALE)
            .parse()
    }

    pub fn endpoints(&self) -> Result<EndpointUrl> {
        EndpointUrl::new(self.origin(), self.api_prefix())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_url("site.origin", &self.site.origin)?;

        if let Some(prefix) = &self.site.api_prefix {
            validate_non_empty_string("site.api_prefix", prefix)?;
        }

        self.locale().map_err(|_| SiteError::InvalidConfigValueError {
            field: "formatting.locale".to_string(),
            value: self.formatting.locale.clone().unwrap_or_default(),
            reason: format!(
                "Unsupported locale. Supported locales: {}",
                Locale::SUPPORTED.join(", ")
            ),
        })?;

        Ok(())
    }
}
