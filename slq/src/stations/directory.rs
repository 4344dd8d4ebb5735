//! Name matching over the sites directory.

use crate::domain::text::fold;
use crate::domain::{RecordList, StopRecord};

/// The first stop, in directory order, whose name contains `name`
/// (ASCII case-insensitive).
///
/// Earlier entries win even when a later one matches more closely.
pub fn first_match<'a>(stops: &'a RecordList<StopRecord>, name: &str) -> Option<&'a StopRecord> {
    let needle = fold(name);
    stops.iter().find(|stop| fold(&stop.name).contains(&needle))
}

/// Keep only the stops whose name contains `query` (ASCII case-insensitive),
/// in directory order. An empty query keeps every stop.
pub fn retain_matching(stops: &mut RecordList<StopRecord>, query: &str) {
    let needle = fold(query);
    stops.retain(|stop| fold(&stop.name).contains(&needle));
}
