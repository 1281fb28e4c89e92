pub mod calendar;
pub mod format;
pub mod http;
pub mod l10n;
pub mod query;

pub use crate::domain::model::{DateStyle, DayItem, QueryParams, QueryValue};
pub use crate::domain::ports::{JsonApi, Localization};
pub use crate::utils::error::Result;
