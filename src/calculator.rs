use crate::bundle::Bundle;
use crate::calendar::WorkdayCalendar;
use crate::config::{CalculatorConfig, ExceptionKind};
use crate::dateformat;
use crate::error::{CalculatorError, CalculatorResult};
use crate::range::DateRange;
use crate::report::WorkdaySink;
use chrono::{Months, NaiveDate};
use log::info;

/// Ready-to-run workday calculator.
///
/// The constructors perform every load/parse step and only hand back an
/// instance once all of it succeeded, so a calculator in hand always holds
/// fully validated data.
#[derive(Debug, Clone)]
pub struct WorkdayCalculator {
    range: DateRange,
    calendar: WorkdayCalendar,
}

impl WorkdayCalculator {
    /// Build a calculator from a raw bundle.
    pub fn from_bundle(bundle: &Bundle) -> CalculatorResult<Self> {
        Self::from_config(CalculatorConfig::from_bundle(bundle)?)
    }

    /// Build a calculator from typed configuration, parsing the exception
    /// entries against their configured formats.
    pub fn from_config(config: CalculatorConfig) -> CalculatorResult<Self> {
        let range = DateRange::new(config.window.start_date, config.window.end_date)?;
        let mut calendar = WorkdayCalendar::with_workweek(config.workweek.iter().copied());

        for kind in ExceptionKind::ALL {
            let entries = config.entries(kind);
            if entries.is_empty() {
                continue;
            }
            let pattern = config.formats.resolve(kind.format_role())?;
            for raw in entries {
                let date = dateformat::parse_date(raw, pattern)?;
                match kind {
                    ExceptionKind::Vacation => {
                        let shifted =
                            shift_years(date, config.window.vacation_year_offset, raw)?;
                        info!("new vacation date added: {shifted}");
                        calendar.add_vacation_day(shifted);
                    }
                    ExceptionKind::ExtraVacation => {
                        info!("new extra vacation date added: {date}");
                        calendar.add_extra_vacation_day(date);
                    }
                    ExceptionKind::ExtraWorkday => {
                        info!("new extra workday date added: {date}");
                        calendar.add_extra_work_day(date);
                    }
                }
            }
        }

        info!(
            "workday calculator ready: {} day window starting {}",
            range.num_days(),
            range.start()
        );
        Ok(Self { range, calendar })
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn calendar(&self) -> &WorkdayCalendar {
        &self.calendar
    }

    /// Run the calculation: enumerate the window and keep the workdays.
    pub fn calculate(&self) -> Vec<NaiveDate> {
        info!(
            "calculating workdays between {} and {}",
            self.range.start(),
            self.range.end()
        );
        self.calendar.workdays_in_range(&self.range)
    }

    /// Calculate and hand the result to a reporter sink.
    pub fn report_into<S: WorkdaySink>(&self, sink: &mut S) -> CalculatorResult<()> {
        let workdays = self.calculate();
        sink.emit(&workdays)
    }
}

/// Advance a date by whole years. Feb 29 clamps to Feb 28 when the target
/// year is not a leap year.
fn shift_years(date: NaiveDate, years: u32, raw: &str) -> CalculatorResult<NaiveDate> {
    date.checked_add_months(Months::new(years.saturating_mul(12)))
        .ok_or_else(|| {
            CalculatorError::InvalidConfig(format!(
                "vacation date '{raw}' leaves the supported calendar after the {years}-year shift"
            ))
        })
}
