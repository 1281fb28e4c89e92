//! Display formatting for amounts, lengths, times and dates.
//!
//! Missing or empty input renders as an empty string instead of failing;
//! only unparseable date text is reported as an error.

use crate::core::l10n::Locale;
use crate::domain::model::DateStyle;
use crate::utils::error::{Result, SiteError};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

/// Locale-aware formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    locale: Locale,
}

impl Formatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Whole amounts get no decimals, anything else two or three. A non-empty
    /// currency code is prefixed as a plain label: `DKK 1.234,50`.
    pub fn format_currency(&self, amount: f64, currency: Option<&str>) -> String {
        let number = self.format_number(amount);
        match currency.filter(|c| !c.is_empty()) {
            Some(code) => format!("{} {}", code, number),
            None => number,
        }
    }

    fn format_number(&self, amount: f64) -> String {
        if amount.is_nan() {
            return "NaN".to_string();
        }
        if amount.is_infinite() {
            let sign = if amount < 0.0 { "-" } else { "" };
            return format!("{}∞", sign);
        }

        // 小數: 整數 0 位，其他至少 2 位、最多 3 位
        let mut fixed = to_fixed(amount, 3);
        if amount.fract() == 0.0 {
            fixed.truncate(fixed.len() - 4);
        } else if fixed.ends_with('0') {
            fixed.pop();
        }
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::new();
        if amount < 0.0 {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, self.locale.group_separator()));
        if let Some(frac) = frac_part {
            out.push(self.locale.decimal_separator());
            out.push_str(frac);
        }
        out
    }

    pub fn format_date(&self, date: Option<NaiveDate>, style: DateStyle) -> String {
        let Some(date) = date else {
            return String::new();
        };
        let names = self.locale.localization();

        match style {
            DateStyle::Long | DateStyle::Medium => {
                let day_name = names.day_name(date.weekday().num_days_from_sunday() as usize);
                let day_name: String = if style == DateStyle::Medium {
                    day_name.chars().take(3).collect()
                } else {
                    day_name.to_string()
                };
                let month_name = names.month_name(date.month0() as usize).to_lowercase();
                format!("{} {}. {} {}", day_name, date.day(), month_name, date.year())
            }
            DateStyle::Iso => date.format("%Y-%m-%d").to_string(),
            DateStyle::Short => date.format("%d.%m.%Y").to_string(),
        }
    }

    /// Like [`Formatter::format_date`] for date text; empty text gives `""`.
    pub fn format_date_str(&self, date: &str, style: DateStyle) -> Result<String> {
        if date.is_empty() {
            return Ok(String::new());
        }
        let parsed = parse_date(date)?;
        Ok(self.format_date(Some(parsed), style))
    }
}

/// Unsigned fixed-point rendering of `value` with `digits` decimals.
///
/// Rounds on the exact decimal value of the float with ties away from zero,
/// so `0.125` becomes `0.13` where `{:.2}` would give `0.12`.
fn to_fixed(value: f64, digits: usize) -> String {
    // 1074 位足以精確表示任何 f64 的小數部分
    let exact = format!("{:.1074}", value.abs());
    let point = exact.find('.').unwrap_or(exact.len());
    let keep = point + 1 + digits;

    let mut kept: Vec<u8> = exact.as_bytes()[..keep.min(exact.len())].to_vec();
    let round_up = exact.as_bytes().get(keep).is_some_and(|d| *d >= b'5');
    if digits == 0 {
        kept.pop();
    }

    if round_up {
        let mut carry = true;
        for byte in kept.iter_mut().rev() {
            if *byte == b'.' {
                continue;
            }
            if *byte == b'9' {
                *byte = b'0';
            } else {
                *byte += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    String::from_utf8(kept).unwrap_or_default()
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Accepts `YYYY-MM-DD`, local date-times with `T` or space, and RFC 3339
/// timestamps (converted to the local date).
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Local).date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Ok(dt.date());
        }
    }

    Err(SiteError::InvalidDate {
        value: value.to_string(),
    })
}

/// `HH:MM:SS` → `HH:MM`.
pub fn format_time_of_day(time: Option<&str>) -> String {
    time.map(|t| t.chars().take(5).collect()).unwrap_or_default()
}

/// Two decimals plus an optional unit label. Zero counts as missing.
pub fn format_length(length: Option<f64>, unit: Option<&str>) -> String {
    let Some(length) = length.filter(|l| *l != 0.0 && !l.is_nan()) else {
        return String::new();
    };

    let sign = if length < 0.0 { "-" } else { "" };
    let fixed = if length.is_infinite() {
        format!("{}Infinity", sign)
    } else {
        format!("{}{}", sign, to_fixed(length, 2))
    };
    match unit.filter(|u| !u.is_empty()) {
        Some(unit) => format!("{} {}", fixed, unit),
        None => fixed,
    }
}

pub fn format_month_abbrev(month_name: Option<&str>) -> String {
    month_name
        .map(|m| m.chars().take(3).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_currency_danish() {
        let fmt = Formatter::default();
        assert_eq!(fmt.format_currency(1234.5, Some("DKK")), "DKK 1.234,50");
        assert_eq!(fmt.format_currency(1234.0, Some("DKK")), "DKK 1.234");
        assert_eq!(fmt.format_currency(0.0, None), "0");
        assert_eq!(fmt.format_currency(999.0, Some("")), "999");
        assert_eq!(fmt.format_currency(1_000_000.0, None), "1.000.000");
        assert_eq!(fmt.format_currency(-42.25, Some("EUR")), "EUR -42,25");
    }

    #[test]
    fn test_format_currency_up_to_three_decimals() {
        let fmt = Formatter::default();
        assert_eq!(fmt.format_currency(1234.567, Some("DKK")), "DKK 1.234,567");
        assert_eq!(fmt.format_currency(0.001, Some("DKK")), "DKK 0,001");
        assert_eq!(fmt.format_currency(1.9999, None), "2,00");
        assert_eq!(fmt.format_currency(1.2346, None), "1,235");
        assert_eq!(fmt.format_currency(0.1, None), "0,10");
        assert_eq!(fmt.format_currency(999.9999, None), "1.000,00");
        assert_eq!(fmt.format_currency(-0.0001, None), "-0,00");
    }

    #[test]
    fn test_rounding_ties_away_from_zero() {
        let fmt = Formatter::default();
        assert_eq!(fmt.format_currency(0.125, Some("DKK")), "DKK 0,125");
        assert_eq!(fmt.format_currency(0.0625, None), "0,063");
        assert_eq!(format_length(Some(0.125), Some("m")), "0.13 m");
        assert_eq!(format_length(Some(0.375), Some("m")), "0.38 m");
        assert_eq!(format_length(Some(-0.125), None), "-0.13");
        // 1.005 的精確值略小於 1.005
        assert_eq!(format_length(Some(1.005), None), "1.00");
        assert_eq!(format_length(Some(9.995), None), "9.99");
        assert_eq!(format_length(Some(99.999), None), "100.00");
        assert_eq!(format_length(Some(f64::NEG_INFINITY), Some("m")), "-Infinity m");
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(1234.0, 3), "1234.000");
        assert_eq!(to_fixed(9.9999, 3), "10.000");
    }

    #[test]
    fn test_format_currency_english() {
        let fmt = Formatter::new(Locale::EnUs);
        assert_eq!(fmt.format_currency(1234.5, Some("USD")), "USD 1,234.50");
        assert_eq!(fmt.format_currency(12.0, None), "12");
    }

    #[test]
    fn test_format_currency_non_finite() {
        let fmt = Formatter::default();
        assert_eq!(fmt.format_currency(f64::NAN, None), "NaN");
        assert_eq!(fmt.format_currency(f64::INFINITY, Some("DKK")), "DKK ∞");
    }

    #[test]
    fn test_format_time_of_day() {
        assert_eq!(format_time_of_day(Some("14:30:00")), "14:30");
        assert_eq!(format_time_of_day(Some("9:05")), "9:05");
        assert_eq!(format_time_of_day(Some("")), "");
        assert_eq!(format_time_of_day(None), "");
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(Some(0.0), None), "");
        assert_eq!(format_length(None, Some("m")), "");
        assert_eq!(format_length(Some(f64::NAN), Some("m")), "");
        assert_eq!(format_length(Some(3.5), Some("m")), "3.50 m");
        assert_eq!(format_length(Some(12.0), None), "12.00");
        assert_eq!(format_length(Some(12.0), Some("")), "12.00");
    }

    #[test]
    fn test_format_date_styles_danish() {
        let fmt = Formatter::default();
        // 2026-01-05 是星期一
        let d = Some(date(2026, 1, 5));

        assert_eq!(fmt.format_date(d, DateStyle::Long), "Mandag 5. januar 2026");
        assert_eq!(fmt.format_date(d, DateStyle::Medium), "Man 5. januar 2026");
        assert_eq!(fmt.format_date(d, DateStyle::Iso), "2026-01-05");
        assert_eq!(fmt.format_date(d, DateStyle::Short), "05.01.2026");
        assert_eq!(fmt.format_date(d, DateStyle::from("short")), "05.01.2026");
        assert_eq!(fmt.format_date(None, DateStyle::Long), "");
    }

    #[test]
    fn test_format_date_medium_truncates_by_character() {
        let fmt = Formatter::default();
        // 2026-01-10 是星期六 (Lørdag)
        assert_eq!(
            fmt.format_date(Some(date(2026, 1, 10)), DateStyle::Medium),
            "Lør 10. januar 2026"
        );
    }

    #[test]
    fn test_format_date_english() {
        let fmt = Formatter::new(Locale::EnGb);
        assert_eq!(
            fmt.format_date(Some(date(2025, 12, 24)), DateStyle::Long),
            "Wednesday 24. december 2025"
        );
    }

    #[test]
    fn test_format_date_iso_for_many_dates() {
        let fmt = Formatter::default();
        let mut d = date(1999, 12, 25);
        for _ in 0..400 {
            let iso = fmt.format_date(Some(d), DateStyle::Iso);
            assert_eq!(NaiveDate::parse_from_str(&iso, "%Y-%m-%d").unwrap(), d);
            assert_eq!(iso.len(), 10);
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_format_date_str() {
        let fmt = Formatter::default();
        assert_eq!(
            fmt.format_date_str("2026-03-01", DateStyle::Long).unwrap(),
            "Søndag 1. marts 2026"
        );
        assert_eq!(
            fmt.format_date_str("2026-03-01T10:15:00", DateStyle::Short).unwrap(),
            "01.03.2026"
        );
        assert_eq!(fmt.format_date_str("", DateStyle::Long).unwrap(), "");
        assert!(matches!(
            fmt.format_date_str("tomorrow", DateStyle::Iso),
            Err(SiteError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_parse_date_variants() {
        assert_eq!(parse_date("2026-02-28").unwrap(), date(2026, 2, 28));
        assert_eq!(parse_date(" 2026-02-28 ").unwrap(), date(2026, 2, 28));
        assert_eq!(parse_date("2026-02-28T23:59").unwrap(), date(2026, 2, 28));
        assert_eq!(parse_date("2026-02-28 08:00:00").unwrap(), date(2026, 2, 28));
        assert!(parse_date("2026-02-30").is_err());
    }

    #[test]
    fn test_format_month_abbrev() {
        assert_eq!(format_month_abbrev(Some("September")), "Sep");
        assert_eq!(format_month_abbrev(Some("Maj")), "Maj");
        assert_eq!(format_month_abbrev(Some("")), "");
        assert_eq!(format_month_abbrev(None), "");
    }
}
