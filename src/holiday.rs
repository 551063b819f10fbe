use serde::{
    Serialize,
    Deserialize,
};

use crate::HolidayDate;

/// A day off work in some part of the UK, e.g. Christmas
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Serialize, Deserialize)]
pub struct BankHoliday {
    pub title: String,
    pub date: HolidayDate,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub bunting: bool,
}

/// A part of the UK with its own holidays, e.g. Scotland.
///
/// Events keep the order the source listed them in.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
#[derive(Serialize, Deserialize)]
pub struct Division {
    #[serde(rename = "division")]
    pub name: String,
    pub events: Vec<BankHoliday>,
}

impl Division {
    #[must_use] pub fn is_holiday(&self, date: HolidayDate) -> bool {
        self.events.iter().any(|e| e.date == date)
    }

    pub fn holidays_in_year(&self, year: i32) -> impl Iterator<Item = &BankHoliday> {
        self.events.iter().filter(move |e| e.date.year() == year)
    }
}

/// The payload returned from gov.uk.
///
/// Divisions other than these three are dropped, and a division the payload
/// leaves out comes back as [`Division::default`].
#[derive(Clone, Default, PartialEq, Eq, Debug)]
#[derive(Serialize, Deserialize)]
pub struct HolidaySet {
    #[serde(rename = "england-and-wales", default)]
    pub england_and_wales: Division,
    #[serde(default)]
    pub scotland: Division,
    #[serde(rename = "northern-ireland", default)]
    pub northern_ireland: Division,
}

impl HolidaySet {
    /// Pure
    ///
    /// # Errors
    /// Returns an error if the bytes are not JSON of the expected shape, or any
    /// event date is not a `YYYY-MM-DD` calendar date
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// England and Wales, Scotland, then Northern Ireland.
    pub fn divisions(&self) -> impl Iterator<Item = &Division> {
        [&self.england_and_wales, &self.scotland, &self.northern_ireland].into_iter()
    }
}
