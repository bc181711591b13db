use crate::error::GridError;

/// Smallest grid extent accepted on either axis.
pub const MIN_DIMENSION: i32 = 1;
/// Largest grid extent accepted on either axis.
pub const MAX_DIMENSION: i32 = 50;
/// Default column count offered by the setup form.
pub const DEFAULT_COLS: i32 = 20;
/// Default row count offered by the setup form.
pub const DEFAULT_ROWS: i32 = 10;

/// Parse one free-form dimension field.
///
/// Accepts surrounding whitespace; anything unparseable or outside
/// `[MIN_DIMENSION, MAX_DIMENSION]` is an `InvalidDimension`.
pub fn parse_dimension(raw: &str) -> Result<i32, GridError> {
    let value: i32 = raw
        .trim()
        .parse()
        .map_err(|_| GridError::InvalidDimension)?;
    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
        return Err(GridError::InvalidDimension);
    }
    Ok(value)
}

/// Validate both setup fields together; either failing fails the pair.
pub fn validate_dimensions(raw_cols: &str, raw_rows: &str) -> Result<(i32, i32), GridError> {
    let cols = parse_dimension(raw_cols)?;
    let rows = parse_dimension(raw_rows)?;
    Ok((cols, rows))
}
