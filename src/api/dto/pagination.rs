//! Range-based pagination query parameters.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::domain::entities::RangeParam;
use crate::error::AppError;

/// `[<start>, <end>]`, optional ASCII whitespace after the comma and nothing else.
static RANGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([0-9]+),[ \t\n\f\r]*([0-9]+)\]$").unwrap());

/// Query string for the list endpoints, e.g. `?range=[5,10]`.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    #[serde(default)]
    pub range: Option<String>,
}

impl RangeQuery {
    /// Parses the range, falling back to the first ten items.
    pub fn into_range(self) -> Result<RangeParam, AppError> {
        parse_range(self.range.as_deref(), RangeParam::DEFAULT)
    }
}

/// Parses a range expression.
///
/// An absent or empty value yields `default`. The range is not checked
/// against the collection size: a start past the end produces an empty page.
///
/// # Errors
///
/// Returns [`AppError::InvalidRange`] if the value does not match the exact
/// shape, a number does not fit in a `u64`, or `end < start`.
pub fn parse_range(raw: Option<&str>, default: RangeParam) -> Result<RangeParam, AppError> {
    let raw = match raw {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };

    let captures = RANGE_PATTERN.captures(raw).ok_or(AppError::InvalidRange)?;
    let start: u64 = captures[1].parse().map_err(|_| AppError::InvalidRange)?;
    let end: u64 = captures[2].parse().map_err(|_| AppError::InvalidRange)?;

    if end < start {
        return Err(AppError::InvalidRange);
    }

    Ok(RangeParam { start, end })
}
