use crate::config::toml_config::SiteConfig;
use crate::core::calendar::{DEFAULT_DAY_COUNT, DEFAULT_WEEK_COUNT};
use crate::utils::error::{Result, SiteError};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "sitekit")]
#[command(about = "Site API requests, query strings and display formatting")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Site origin, overrides the config file")]
    pub origin: Option<String>,

    #[arg(long, help = "Formatting locale (da-DK, en-US, en-GB, de-DE)")]
    pub locale: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the query string for key=value pairs
    Query {
        #[arg(value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
    /// Print the full URL of an API endpoint
    Url {
        endpoint: String,
        #[arg(long = "param", short = 'p', value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
    /// GET an API endpoint and print the JSON response
    Get {
        endpoint: String,
        #[arg(long = "param", short = 'p', value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
    /// POST a JSON body to an API endpoint
    Post {
        endpoint: String,
        #[arg(long, help = "JSON request body")]
        body: String,
    },
    /// POST form fields to an API endpoint
    PostForm {
        endpoint: String,
        #[arg(long = "field", short = 'f', value_parser = parse_key_val)]
        fields: Vec<(String, String)>,
    },
    /// Format an amount with an optional currency label
    Currency {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        #[arg(long)]
        currency: Option<String>,
    },
    /// Cut a HH:MM:SS time down to HH:MM
    Time { value: String },
    /// Format a length with two decimals
    Length {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        unit: Option<String>,
    },
    /// Format a date (long, medium, iso, short)
    Date {
        date: String,
        #[arg(long, default_value = "long")]
        style: String,
    },
    /// Abbreviate a month name to three letters
    Month { name: String },
    /// List day items for a date range
    Days {
        from: NaiveDate,
        #[arg(long, default_value_t = DEFAULT_DAY_COUNT)]
        count: usize,
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// List week numbers starting at a date
    Weeks {
        start: NaiveDate,
        #[arg(long, default_value_t = DEFAULT_WEEK_COUNT)]
        count: usize,
    },
    /// List the months covered by a run of days
    Months {
        start: NaiveDate,
        #[arg(long, default_value_t = DEFAULT_DAY_COUNT)]
        days: usize,
    },
    /// Check the shape of an e-mail address
    Email { address: String },
    /// Print a random identifier
    Guid,
}

fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=value: no '=' found in '{}'", s))?;
    Ok((key.to_string(), value.to_string()))
}

impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn site_config(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::from_file(path).map_err(|e| match e {
                SiteError::Io(io) => SiteError::ConfigValidationError {
                    field: "config".to_string(),
                    message: format!("Cannot read {}: {}", path, io),
                },
                other => other,
            })?,
            None => SiteConfig::default(),
        };

        if let Some(origin) = &self.origin {
            config.site.origin = origin.clone();
        }
        if let Some(locale) = &self.locale {
            config.formatting.locale = Some(locale.clone());
        }

        Ok(config)
    }
}
