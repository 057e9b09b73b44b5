use crate::bundle::Bundle;
use crate::dateformat::DateFormatMap;
use crate::error::{CalculatorError, CalculatorResult};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const START_DATE_KEY: &str = "calculation.start-date";
pub const END_DATE_KEY: &str = "calculation.end-date";
pub const VACATION_YEAR_OFFSET_KEY: &str = "calculation.vacation-year-offset";

/// Exception-date categories, tied to their bundle key prefix and the name
/// of the date format they are parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionKind {
    Vacation,
    ExtraVacation,
    ExtraWorkday,
}

impl ExceptionKind {
    pub const ALL: [ExceptionKind; 3] = [
        ExceptionKind::Vacation,
        ExceptionKind::ExtraVacation,
        ExceptionKind::ExtraWorkday,
    ];

    pub fn key_prefix(self) -> &'static str {
        match self {
            ExceptionKind::Vacation => "vacation.",
            ExceptionKind::ExtraVacation => "extra-vacation.",
            ExceptionKind::ExtraWorkday => "extra-workday.",
        }
    }

    pub fn format_role(self) -> &'static str {
        match self {
            ExceptionKind::Vacation => "vacation-format",
            ExceptionKind::ExtraVacation => "extra-vacation-format",
            ExceptionKind::ExtraWorkday => "extra-workday-format",
        }
    }

    fn match_key(key: &str) -> Option<ExceptionKind> {
        Self::ALL
            .into_iter()
            .find(|kind| key.starts_with(kind.key_prefix()))
    }
}

/// Calculation window and the year shift applied to vacation dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub vacation_year_offset: u32,
}

impl Default for CalculationWindow {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2016, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
            vacation_year_offset: 16,
        }
    }
}

/// Strongly-typed configuration shaped from a raw bundle in a single pass.
///
/// Exception entries stay unparsed here; the calculator parses them against
/// the resolved formats when it is built.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    pub window: CalculationWindow,
    pub workweek: HashSet<Weekday>,
    pub formats: DateFormatMap,
    pub vacation_entries: Vec<String>,
    pub extra_vacation_entries: Vec<String>,
    pub extra_workday_entries: Vec<String>,
}

impl CalculatorConfig {
    /// Categorize every bundle entry by its key name.
    ///
    /// Key conventions: category prefixes (`vacation.`, `extra-vacation.`,
    /// `extra-workday.`) hold raw date strings, keys containing `format`
    /// hold format patterns, keys containing `workday.` with no hyphen
    /// anywhere hold ISO weekday numbers, and `calculation.*` keys override
    /// the window. Unrecognized keys are ignored.
    pub fn from_bundle(bundle: &Bundle) -> CalculatorResult<Self> {
        let mut window = CalculationWindow::default();
        let mut workweek = HashSet::new();
        let mut formats = DateFormatMap::new();
        let mut vacation_entries = Vec::new();
        let mut extra_vacation_entries = Vec::new();
        let mut extra_workday_entries = Vec::new();

        for (key, value) in bundle.iter() {
            if let Some(kind) = ExceptionKind::match_key(key) {
                let entries = match kind {
                    ExceptionKind::Vacation => &mut vacation_entries,
                    ExceptionKind::ExtraVacation => &mut extra_vacation_entries,
                    ExceptionKind::ExtraWorkday => &mut extra_workday_entries,
                };
                entries.push(value.to_string());
            } else if key.contains("format") {
                log::info!("format for {key} is {value}");
                formats.insert(key, value);
            } else if key.contains("workday.") && !key.contains('-') {
                let number: u32 = value.trim().parse().map_err(|_| {
                    CalculatorError::InvalidConfig(format!(
                        "weekday number '{value}' for key {key} is not an integer"
                    ))
                })?;
                log::info!("new workday number added: {number}");
                workweek.insert(weekday_from_iso(number)?);
            } else if key == START_DATE_KEY {
                window.start_date = parse_window_date(key, value)?;
            } else if key == END_DATE_KEY {
                window.end_date = parse_window_date(key, value)?;
            } else if key == VACATION_YEAR_OFFSET_KEY {
                window.vacation_year_offset = value.trim().parse().map_err(|_| {
                    CalculatorError::InvalidConfig(format!(
                        "{key} value '{value}' is not an unsigned integer"
                    ))
                })?;
            } else {
                log::debug!("ignoring unrecognized bundle key {key}");
            }
        }

        Ok(Self {
            window,
            workweek,
            formats,
            vacation_entries,
            extra_vacation_entries,
            extra_workday_entries,
        })
    }

    pub fn entries(&self, kind: ExceptionKind) -> &[String] {
        match kind {
            ExceptionKind::Vacation => &self.vacation_entries,
            ExceptionKind::ExtraVacation => &self.extra_vacation_entries,
            ExceptionKind::ExtraWorkday => &self.extra_workday_entries,
        }
    }
}

/// Map an ISO weekday number (1=Monday..7=Sunday) to a weekday.
pub fn weekday_from_iso(number: u32) -> CalculatorResult<Weekday> {
    match number {
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        7 => Ok(Weekday::Sun),
        _ => Err(CalculatorError::InvalidConfig(format!(
            "weekday number {number} is outside 1..=7"
        ))),
    }
}

fn parse_window_date(key: &str, value: &str) -> CalculatorResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CalculatorError::InvalidConfig(format!("{key} value '{value}' is not an ISO date"))
    })
}
