use crate::range::DateRange;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Work calendar combining a weekly work pattern with exception dates.
#[derive(Debug, Clone)]
pub struct WorkdayCalendar {
    workweek: HashSet<Weekday>,
    vacation_days: HashSet<NaiveDate>,
    extra_vacation_days: HashSet<NaiveDate>,
    extra_work_days: HashSet<NaiveDate>,
}

impl Default for WorkdayCalendar {
    fn default() -> Self {
        Self::with_workweek([
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ])
    }
}

impl WorkdayCalendar {
    /// Create a calendar with the given working weekdays and no exceptions.
    pub fn with_workweek(days: impl IntoIterator<Item = Weekday>) -> Self {
        Self {
            workweek: days.into_iter().collect(),
            vacation_days: HashSet::new(),
            extra_vacation_days: HashSet::new(),
            extra_work_days: HashSet::new(),
        }
    }

    pub fn add_vacation_day(&mut self, date: NaiveDate) {
        self.vacation_days.insert(date);
    }

    pub fn add_extra_vacation_day(&mut self, date: NaiveDate) {
        self.extra_vacation_days.insert(date);
    }

    pub fn add_extra_work_day(&mut self, date: NaiveDate) {
        self.extra_work_days.insert(date);
    }

    pub fn workweek(&self) -> &HashSet<Weekday> {
        &self.workweek
    }

    /// Check whether a date counts as a workday.
    ///
    /// A workday falls on a configured weekday and on none of the three
    /// exception lists. Extra workdays are excluded the same way the
    /// vacation categories are under the combined rule.
    pub fn is_workday(&self, date: NaiveDate) -> bool {
        self.workweek.contains(&date.weekday())
            && !self.vacation_days.contains(&date)
            && !self.extra_work_days.contains(&date)
            && !self.extra_vacation_days.contains(&date)
    }

    /// All workdays in a range, oldest first.
    pub fn workdays_in_range(&self, range: &DateRange) -> Vec<NaiveDate> {
        range.days().filter(|date| self.is_workday(*date)).collect()
    }
}
