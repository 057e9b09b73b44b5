use crate::error::CalculatorResult;
use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use std::io::Write;

/// Reporter seam consuming the final ordered workday list.
///
/// Implementations observe the list only; they must not mutate or retain it.
pub trait WorkdaySink {
    fn emit(&mut self, workdays: &[NaiveDate]) -> CalculatorResult<()>;
}

/// Logs one line per workday.
#[derive(Debug, Default)]
pub struct LogSink;

impl WorkdaySink for LogSink {
    fn emit(&mut self, workdays: &[NaiveDate]) -> CalculatorResult<()> {
        info!("=== calculation result ===");
        for date in workdays {
            info!("{date} is workday.");
        }
        Ok(())
    }
}

/// Newline-delimited ISO dates.
#[derive(Debug)]
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> WorkdaySink for TextSink<W> {
    fn emit(&mut self, workdays: &[NaiveDate]) -> CalculatorResult<()> {
        for date in workdays {
            writeln!(self.writer, "{date}")?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct WorkdayReport<'a> {
    workday_count: usize,
    workdays: &'a [NaiveDate],
}

/// JSON report: workday count plus the date list.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> WorkdaySink for JsonSink<W> {
    fn emit(&mut self, workdays: &[NaiveDate]) -> CalculatorResult<()> {
        let report = WorkdayReport {
            workday_count: workdays.len(),
            workdays,
        };
        serde_json::to_writer_pretty(&mut self.writer, &report)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct WorkdayCsvRecord {
    date: NaiveDate,
}

/// CSV report, one record per workday.
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    writer: W,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> WorkdaySink for CsvSink<W> {
    fn emit(&mut self, workdays: &[NaiveDate]) -> CalculatorResult<()> {
        let mut csv_writer = csv::Writer::from_writer(&mut self.writer);
        for date in workdays {
            csv_writer.serialize(WorkdayCsvRecord { date: *date })?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
