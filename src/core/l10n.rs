use crate::domain::ports::Localization;
use crate::utils::error::SiteError;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_LOCALE: &str = "da-DK";

const DANISH_DAYS: [&str; 7] = [
    "Søndag", "Mandag", "Tirsdag", "Onsdag", "Torsdag", "Fredag", "Lørdag",
];
const DANISH_MONTHS: [&str; 12] = [
    "Januar", "Februar", "Marts", "April", "Maj", "Juni", "Juli", "August", "September",
    "Oktober", "November", "December",
];

const ENGLISH_DAYS: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];
const ENGLISH_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const GERMAN_DAYS: [&str; 7] = [
    "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
];
const GERMAN_MONTHS: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
    "Oktober", "November", "Dezember",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Danish;

#[derive(Debug, Clone, Copy, Default)]
pub struct English;

#[derive(Debug, Clone, Copy, Default)]
pub struct German;

impl Localization for Danish {
    fn day_name(&self, weekday: usize) -> &str {
        DANISH_DAYS[weekday % 7]
    }

    fn month_name(&self, month: usize) -> &str {
        DANISH_MONTHS[month % 12]
    }
}

impl Localization for English {
    fn day_name(&self, weekday: usize) -> &str {
        ENGLISH_DAYS[weekday % 7]
    }

    fn month_name(&self, month: usize) -> &str {
        ENGLISH_MONTHS[month % 12]
    }
}

impl Localization for German {
    fn day_name(&self, weekday: usize) -> &str {
        GERMAN_DAYS[weekday % 7]
    }

    fn month_name(&self, month: usize) -> &str {
        GERMAN_MONTHS[month % 12]
    }
}

/// Number-format locales understood by the formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    DaDk,
    EnUs,
    EnGb,
    DeDe,
}

impl Locale {
    pub const SUPPORTED: [&'static str; 4] = ["da-DK", "en-US", "en-GB", "de-DE"];

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::DaDk => "da-DK",
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::DaDk | Locale::DeDe => ',',
            Locale::EnUs | Locale::EnGb => '.',
        }
    }

    pub fn group_separator(&self) -> char {
        match self {
            Locale::DaDk | Locale::DeDe => '.',
            Locale::EnUs | Locale::EnGb => ',',
        }
    }

    pub fn localization(&self) -> &'static dyn Localization {
        match self {
            Locale::DaDk => &Danish,
            Locale::EnUs | Locale::EnGb => &English,
            Locale::DeDe => &German,
        }
    }
}

impl FromStr for Locale {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('_', "-").to_ascii_lowercase().as_str() {
            "da-dk" | "da" => Ok(Locale::DaDk),
            "en-us" | "en" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "de-de" | "de" => Ok(Locale::DeDe),
            _ => Err(SiteError::InvalidConfigValueError {
                field: "locale".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unsupported locale. Supported locales: {}",
                    Locale::SUPPORTED.join(", ")
                ),
            }),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_danish_names() {
        assert_eq!(Danish.day_name(0), "Søndag");
        assert_eq!(Danish.day_name(6), "Lørdag");
        assert_eq!(Danish.month_name(0), "Januar");
        assert_eq!(Danish.month_name(11), "December");
    }

    #[test]
    fn test_indices_wrap() {
        assert_eq!(English.day_name(7), "Sunday");
        assert_eq!(English.month_name(12), "January");
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("da-DK".parse::<Locale>().unwrap(), Locale::DaDk);
        assert_eq!("en_us".parse::<Locale>().unwrap(), Locale::EnUs);
        assert_eq!("en-GB".parse::<Locale>().unwrap(), Locale::EnGb);
        assert_eq!("de".parse::<Locale>().unwrap(), Locale::DeDe);
        assert!("fr-FR".parse::<Locale>().is_err());
    }

    #[test]
    fn test_default_locale_is_danish() {
        assert_eq!(Locale::default().tag(), DEFAULT_LOCALE);
        assert_eq!(Locale::default().localization().month_name(2), "Marts");
    }

    #[test]
    fn test_locale_separators() {
        assert_eq!(Locale::DaDk.decimal_separator(), ',');
        assert_eq!(Locale::DaDk.group_separator(), '.');
        assert_eq!(Locale::EnUs.decimal_separator(), '.');
        assert_eq!(Locale::EnUs.group_separator(), ',');
    }
}
