use std::env;
use std::io;
use std::process::ExitCode;

use workday_tool::report::{CsvSink, JsonSink, LogSink, TextSink};
use workday_tool::{Bundle, CalculatorResult, WorkdayCalculator};

fn print_usage() {
    println!(
        "Usage: cli <bundle.json> [--format text|json|csv|log]\n  <bundle.json>    Flat key/value configuration bundle\n  --format         Output rendering, default text (newline-delimited ISO dates)"
    );
}

fn run(bundle_path: &str, format: &str) -> CalculatorResult<()> {
    let bundle = Bundle::load(bundle_path)?;
    let calculator = WorkdayCalculator::from_bundle(&bundle)?;
    let stdout = io::stdout();
    match format {
        "json" => calculator.report_into(&mut JsonSink::new(stdout.lock())),
        "csv" => calculator.report_into(&mut CsvSink::new(stdout.lock())),
        "log" => calculator.report_into(&mut LogSink),
        _ => calculator.report_into(&mut TextSink::new(stdout.lock())),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut bundle_path: Option<String> = None;
    let mut format = String::from("text");

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            "--format" => {
                i += 1;
                match args.get(i) {
                    Some(value) => format = value.clone(),
                    None => {
                        print_usage();
                        return ExitCode::from(2);
                    }
                }
            }
            other if bundle_path.is_none() => bundle_path = Some(other.to_string()),
            _ => {
                print_usage();
                return ExitCode::from(2);
            }
        }
        i += 1;
    }

    let Some(bundle_path) = bundle_path else {
        print_usage();
        return ExitCode::from(2);
    };
    if !matches!(format.as_str(), "text" | "json" | "csv" | "log") {
        print_usage();
        return ExitCode::from(2);
    }

    match run(&bundle_path, &format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
