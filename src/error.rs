use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum CalculatorError {
    Io(io::Error),
    Serialization(SerdeJsonError),
    Csv(csv::Error),
    MissingFormat(String),
    DateFormat { value: String, pattern: String },
    InvalidConfig(String),
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorError::Io(err) => write!(f, "io error: {err}"),
            CalculatorError::Serialization(err) => write!(f, "serialization error: {err}"),
            CalculatorError::Csv(err) => write!(f, "csv error: {err}"),
            CalculatorError::MissingFormat(role) => {
                write!(f, "no date format configured for '{role}'")
            }
            CalculatorError::DateFormat { value, pattern } => {
                write!(f, "date '{value}' does not match pattern '{pattern}'")
            }
            CalculatorError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for CalculatorError {}

impl From<io::Error> for CalculatorError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<SerdeJsonError> for CalculatorError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<csv::Error> for CalculatorError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type CalculatorResult<T> = Result<T, CalculatorError>;
