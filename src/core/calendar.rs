use crate::domain::model::DayItem;
use crate::domain::ports::Localization;
use chrono::{Datelike, Days, Local, NaiveDate};

pub const DEFAULT_DAY_COUNT: usize = 7;
pub const DEFAULT_WEEK_COUNT: usize = 7;

/// Builds day lists, month-name lists and week numbers for date ranges.
///
/// Past/today flags are computed against a fixed reference date, the local
/// date at construction unless [`CalendarGenerator::with_today`] overrides it.
#[derive(Clone, Copy)]
pub struct CalendarGenerator<'a> {
    names: &'a dyn Localization,
    today: NaiveDate,
}

impl<'a> CalendarGenerator<'a> {
    pub fn new(names: &'a dyn Localization) -> Self {
        Self {
            names,
            today: Local::now().date_naive(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// One item per day starting at `from`, for `number_of_days` days.
    ///
    /// When `to` is given, days on or after it are left out; the day count
    /// still bounds the walk.
    pub fn day_items(
        &self,
        from: NaiveDate,
        number_of_days: usize,
        to: Option<NaiveDate>,
    ) -> Vec<DayItem> {
        let mut days = Vec::with_capacity(number_of_days);
        let mut date = from;

        for _ in 0..number_of_days {
            if to.map_or(true, |end| end > date) {
                days.push(self.day_item(date));
            }
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }

        tracing::trace!("Built {} day items from {}", days.len(), from);
        days
    }

    fn day_item(&self, date: NaiveDate) -> DayItem {
        let is_today = date == self.today;
        DayItem {
            is_past_day: date < self.today && !is_today,
            is_today,
            day_name: self
                .names
                .day_name(date.weekday().num_days_from_sunday() as usize)
                .to_string(),
            day_of_month: date.day(),
            month_name: self.names.month_name(date.month0() as usize).to_string(),
            iso_date: date.format("%Y-%m-%d").to_string(),
            is_alternate_month: date.month0() % 2 != 0,
        }
    }

    /// Week numbers for `start` and every seventh day after it.
    ///
    /// The counter advances by 7 per entry while staying below
    /// `number_of_weeks`, so the result holds `ceil(number_of_weeks / 7)`
    /// entries. Callers rely on that count.
    pub fn week_numbers(&self, start: NaiveDate, number_of_weeks: usize) -> Vec<u32> {
        let mut weeks = Vec::new();
        let mut date = start;

        for _ in (0..number_of_weeks).step_by(7) {
            weeks.push(week_of_year(date));
            match date.checked_add_days(Days::new(7)) {
                Some(next) => date = next,
                None => break,
            }
        }

        weeks
    }

    /// Distinct month names met while walking `days` days from `start`, in order.
    pub fn month_names(&self, start: NaiveDate, days: usize) -> Vec<String> {
        let mut months: Vec<String> = Vec::new();
        let mut date = start;

        for _ in 0..days {
            let name = self.names.month_name(date.month0() as usize);
            if months.last().map(String::as_str) != Some(name) {
                months.push(name.to_string());
            }
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }

        months
    }
}

/// `1 + whole weeks since January 1st` of the date's year.
///
/// Not ISO-8601: there is no Thursday anchoring, so 31 December can be
/// week 53 and 1 January is always week 1.
pub fn week_of_year(date: NaiveDate) -> u32 {
    date.ordinal0() / 7 + 1
}
