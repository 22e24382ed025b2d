//! Shared wiring for command handlers.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::adapter::outbound::calendar::BsCalendar;
use crate::adapter::outbound::clock::{FixedClock, SystemClock};
use crate::application::{BsPicker, DateRangeResolver};
use crate::domain::calendar::parse_ad;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::Clock;

/// Services every handler works against, built once from the config.
pub struct Context {
    pub config: Config,
    pub calendar: Arc<BsCalendar>,
    pub resolver: DateRangeResolver,
    pub picker: BsPicker,
}

impl Context {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let calendar = Arc::new(BsCalendar::new());
        let resolver = DateRangeResolver::new(calendar.clone());
        let picker = BsPicker::new(calendar.clone(), config.calendar.first_selectable_year);
        Self {
            config,
            calendar,
            resolver,
            picker,
        }
    }
}

/// The clock a command runs against: fixed when `--today` is given.
pub fn clock(today: Option<&str>) -> Result<Box<dyn Clock>> {
    match today {
        Some(raw) => Ok(Box::new(FixedClock::new(parse_ad(raw)?))),
        None => Ok(Box::new(SystemClock)),
    }
}

/// Today's date for a command.
pub fn today(override_today: Option<&str>) -> Result<NaiveDate> {
    Ok(clock(override_today)?.today())
}
