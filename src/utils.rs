use crate::config::WAGE_QUERY_KEY;

/// Errors reading widget configuration from the page URL.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    UnreadableUrl(String),
    InvalidWage(String),
    NonFiniteWage(f64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnreadableUrl(reason) => write!(f, "Could not read page URL: {}", reason),
            ConfigError::InvalidWage(raw) => {
                write!(f, "Invalid {} parameter: {:?} is not a number", WAGE_QUERY_KEY, raw)
            }
            ConfigError::NonFiniteWage(w) => {
                write!(f, "Invalid {} parameter: {} is not finite", WAGE_QUERY_KEY, w)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Interpret the text of the wage field the way a browser number input does.
///
/// Empty text means zero. Text that is not a number yields `None` and the
/// caller keeps the previous wage. No range checks: zero and negative wages
/// are accepted.
pub fn parse_wage_input(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|w| w.is_finite())
}

/// Parse the already-decoded value of the `?wage=` page parameter.
pub fn parse_wage_param(raw: &str) -> Result<f64, ConfigError> {
    let wage: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidWage(raw.to_string()))?;
    if !wage.is_finite() {
        return Err(ConfigError::NonFiniteWage(wage));
    }
    Ok(wage)
}
