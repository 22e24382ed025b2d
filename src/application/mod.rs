//! Application services built on the domain and ports.
//!
//! - [`resolver`] - selector + today to AD range
//! - [`picker`] - selectable BS years and months
//! - [`query`] - reporting API URLs for a range
//! - [`sequence`] - drops out-of-order responses

pub mod picker;
pub mod query;
pub mod resolver;
pub mod sequence;

pub use picker::{BsPicker, FIRST_SELECTABLE_YEAR};
pub use query::ReportEndpoints;
pub use resolver::{describe, DateRangeResolver};
pub use sequence::{RequestTicket, ResponseSequencer};
