//! Domain types for the SL query engine.
//!
//! Records own every string they hold. Construction and list growth are
//! fallible, so a record is either fully built and stored or not stored at
//! all.

mod departure;
mod error;
mod list;
mod stop;
pub mod text;
mod time;

pub use departure::{DepartureRecord, LineRecord};
pub use error::AllocationFailure;
pub use list::{DEPARTURE_LIST_CAPACITY, RecordList, STOP_LIST_CAPACITY};
pub use stop::StopRecord;
pub use time::{ExpectedTime, TimeError, UNKNOWN_CLOCK, Wait, clock_label};
