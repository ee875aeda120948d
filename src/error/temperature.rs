use thiserror::Error as ThisError;

/// Why a temperature token such as `F51` or `C11.5` was rejected.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum TemperatureError {
    #[error("input must be at least 2 characters, got {0}")]
    TooShort(usize),

    #[error("unknown scale prefix {0:?}; expected 'F' or 'C'")]
    UnknownPrefix(char),

    #[error("{0:?} is not a non-negative decimal number")]
    InvalidNumber(String),
}

impl TemperatureError {
    /// Fixed message shown to the user regardless of the precise reason.
    pub const USER_MESSAGE: &'static str =
        "Invalid input. Please enter the temperature with the correct 'C' or 'F' prefix.";
}
