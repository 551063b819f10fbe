use chrono::{
    Datelike,
    NaiveDate,
};

use serde::{
    Serialize,
    Deserialize,
};

use std::str::FromStr;
use core::fmt::Display;

use crate::error::ParseDateError;
use crate::utils::{
    format_date_borrowed,
    parse_date,
};

/// A calendar day with no time of day or timezone.
///
/// Decoding from JSON goes through [`FromStr`], so every date in a payload is
/// held to the same `YYYY-MM-DD` rule as [`parse_date`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HolidayDate(NaiveDate);

impl HolidayDate{
    #[must_use] pub fn as_naive_date(&self) -> NaiveDate{
        self.0
    }

    #[must_use] pub fn year(&self) -> i32{
        self.0.year()
    }

    #[must_use] pub fn month(&self) -> u32{
        self.0.month()
    }

    #[must_use] pub fn day(&self) -> u32{
        self.0.day()
    }
}

impl From<NaiveDate> for HolidayDate{
    fn from(date: NaiveDate) -> Self {
        HolidayDate(date)
    }
}

impl From<HolidayDate> for NaiveDate{
    fn from(date: HolidayDate) -> Self {
        date.0
    }
}

impl FromStr for HolidayDate{
    type Err = ParseDateError;

    fn from_str(date_string: &str) -> Result<Self, Self::Err> {
        Ok(HolidayDate(parse_date(date_string)?))
    }
}

impl TryFrom<String> for HolidayDate{
    type Error = ParseDateError;

    fn try_from(date_string: String) -> Result<Self, Self::Error> {
        HolidayDate::from_str(&date_string)
    }
}

impl From<HolidayDate> for String{
    fn from(value: HolidayDate) -> Self {
        format_date_borrowed(&value.0)
    }
}

impl Display for HolidayDate{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_date_borrowed(&self.0))
    }
}

#[cfg(test)]
#[allow(clippy::zero_prefixed_literal)]
mod tests{
    use super::*;

    #[test]
    fn test_holiday_date_string_round_trip(){
        for s in ["2024-12-25", "2025-01-01", "2020-02-29"]{
            assert_eq!(HolidayDate::from_str(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_holiday_date_parts(){
        let d: HolidayDate = "2024-12-25".parse().unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 12, 25));
        assert_eq!(d.as_naive_date(), NaiveDate::from_ymd_opt(2024,12,25).unwrap());
    }

    #[test]
    fn test_holiday_date_rejects_other_formats(){
        assert_eq!(
            HolidayDate::from_str("25/12/2024"),
            Err(ParseDateError::Format("25/12/2024".into())),
        );
        assert_eq!(
            HolidayDate::from_str("2024-13-01"),
            Err(ParseDateError::OutOfRange("2024-13-01".into())),
        );
        assert!(HolidayDate::from_str("20241225").is_err());
    }

    #[test]
    fn test_holiday_date_ordering(){
        let earlier: HolidayDate = "2024-12-25".parse().unwrap();
        let later: HolidayDate = "2024-12-26".parse().unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_holiday_date_json(){
        let d: HolidayDate = serde_json::from_str("\"2024-05-06\"").unwrap();
        assert_eq!(d, HolidayDate::from(NaiveDate::from_ymd_opt(2024,05,06).unwrap()));
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2024-05-06\"");

        let err = serde_json::from_str::<HolidayDate>("\"06/05/2024\"").unwrap_err();
        assert!(err.to_string().contains("06/05/2024"));
    }
}
