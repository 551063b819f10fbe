//! Fetches the list of UK bank holidays published at
//! <https://www.gov.uk/bank-holidays.json>.
//!
//! ```no_run
//! let holidays = bank_holidays::fetch()?;
//! for holiday in &holidays.scotland.events {
//!     println!("{} {}", holiday.date, holiday.title);
//! }
//! # Ok::<(), bank_holidays::FetchError>(())
//! ```

pub mod error;
pub use error::{
    FetchError,
    ParseDateError,
};

pub mod fetcher;
pub use fetcher::{
    fetch,
    HolidayFetcher,
    HolidayFetcherBuilder,
    BANK_HOLIDAYS_URL,
};

pub mod holiday;
pub use holiday::{
    BankHoliday,
    Division,
    HolidaySet,
};

pub mod holiday_date;
pub use holiday_date::HolidayDate;

pub mod utils;
