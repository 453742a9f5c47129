//! Today's date source.

use chrono::{Local, NaiveDate};

/// Display format for dates on generated documents.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Where "today" comes from when a record leaves a date blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// The local wall clock.
    #[default]
    System,
    /// A pinned date.
    Fixed(NaiveDate),
}

impl Clock {
    /// Use the local wall clock.
    pub fn system() -> Self {
        Clock::System
    }

    /// Pin today to `date`.
    pub fn fixed(date: NaiveDate) -> Self {
        Clock::Fixed(date)
    }

    /// Today's date.
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }

    /// Today in `DD/MM/YYYY` form.
    pub fn today_display(&self) -> String {
        self.today().format(DISPLAY_DATE_FORMAT).to_string()
    }

    /// Today in `YYYYMMDD` form, used in file names.
    pub fn today_compact(&self) -> String {
        self.today().format("%Y%m%d").to_string()
    }
}
