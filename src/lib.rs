pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::SiteConfig;

pub use crate::core::{
    calendar::{week_of_year, CalendarGenerator},
    format::{format_length, format_month_abbrev, format_time_of_day, Formatter},
    http::HttpClient,
    l10n::Locale,
    query::{build_query, form_body, EndpointUrl},
};
pub use crate::domain::model::{DateStyle, DayItem, QueryParams, QueryValue};
pub use crate::domain::ports::{JsonApi, Localization};
pub use crate::utils::error::{Result, SiteError};
pub use crate::utils::ids::guid;
pub use crate::utils::validation::is_valid_email;
