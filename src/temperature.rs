//! `F51` / `C11` style temperature tokens and their conversion.

use std::fmt;
use std::str::FromStr;

use crate::error::TemperatureError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Fahrenheit,
    Celsius,
}

impl Scale {
    pub fn prefix(self) -> char {
        match self {
            Scale::Fahrenheit => 'F',
            Scale::Celsius => 'C',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scale::Fahrenheit => "Fahrenheit",
            Scale::Celsius => "Celsius",
        }
    }

    fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'F' => Some(Scale::Fahrenheit),
            'C' => Some(Scale::Celsius),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Temperature {
    pub scale: Scale,
    pub value: f64,
}

impl Temperature {
    pub fn new(scale: Scale, value: f64) -> Self {
        Self { scale, value }
    }

    /// The same temperature expressed in the other scale.
    pub fn convert(&self) -> Temperature {
        match self.scale {
            Scale::Fahrenheit => Temperature::new(Scale::Celsius, (self.value - 32.0) * 5.0 / 9.0),
            Scale::Celsius => Temperature::new(Scale::Fahrenheit, self.value * 9.0 / 5.0 + 32.0),
        }
    }
}

impl FromStr for Temperature {
    type Err = TemperatureError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let len = input.chars().count();
        if len < 2 {
            return Err(TemperatureError::TooShort(len));
        }

        let mut chars = input.chars();
        let prefix = chars.next().unwrap_or_default();
        let scale = Scale::from_prefix(prefix).ok_or(TemperatureError::UnknownPrefix(prefix))?;

        let number = chars.as_str();
        if !is_unsigned_decimal(number) {
            return Err(TemperatureError::InvalidNumber(number.to_string()));
        }
        let value = number
            .parse::<f64>()
            .map_err(|_| TemperatureError::InvalidNumber(number.to_string()))?;

        Ok(Temperature::new(scale, value))
    }
}

/// ASCII digits with at most one `.` and at least one digit.
fn is_unsigned_decimal(s: &str) -> bool {
    let mut digits = 0usize;
    let mut dots = 0usize;
    for b in s.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

/// A parsed input together with its converted value, rendered as the
/// user-facing report line.
#[derive(Debug, Clone)]
pub struct Conversion {
    raw: String,
    pub input: Temperature,
    pub output: Temperature,
}

impl Conversion {
    pub fn parse(input: &str) -> Result<Self, TemperatureError> {
        let parsed: Temperature = input.parse()?;
        let output = parsed.convert();
        Ok(Self {
            raw: input.trim().to_string(),
            input: parsed,
            output,
        })
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} degrees {} is converted to {:.2} degrees {}",
            self.raw,
            self.input.scale.name(),
            self.output.value,
            self.output.scale.name()
        )
    }
}
