use chrono::NaiveDate;

use crate::error::ParseDateError;

const DATE_FORMAT: &str = "%F";

/// Pure
#[must_use] pub fn format_date(date: NaiveDate) -> String {
    format_date_borrowed(&date)
}

/// Pure
#[must_use] pub fn format_date_borrowed(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Pure
///
/// Only the exact `YYYY-MM-DD` shape is accepted. chrono on its own would
/// also take single digit months and days, or signed years.
///
/// # Errors
/// Returns an error if the string is not shaped like `YYYY-MM-DD`, or names a day
/// that does not exist
pub fn parse_date(date_string: &str) -> Result<NaiveDate, ParseDateError> {
    let well_formed = date_string.len() == 10
        && date_string
            .bytes()
            .enumerate()
            .all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _     => b.is_ascii_digit(),
            });

    if !well_formed {
        return Err(ParseDateError::Format(date_string.into()));
    }

    NaiveDate::parse_from_str(date_string, DATE_FORMAT)
        .map_err(|_| ParseDateError::OutOfRange(date_string.into()))
}
