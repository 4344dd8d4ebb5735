//! Station resolution and name search.
//!
//! Both operations read the full SL sites directory and match names by
//! ASCII case-insensitive substring containment.

mod directory;
mod token;

use tracing::debug;

use crate::domain::{RecordList, StopRecord};
use crate::error::QueryError;
use crate::sl::{SlClient, Transport};

pub use directory::{first_match, retain_matching};
pub use token::StationToken;

/// Find every stop whose name contains `query`, in directory order.
///
/// An empty query returns the whole directory.
pub fn search_stops<T: Transport>(
    client: &SlClient<T>,
    query: &str,
) -> Result<RecordList<StopRecord>, QueryError> {
    let mut stops = client.fetch_sites()?;
    let total = stops.len();
    retain_matching(&mut stops, query);
    debug!(query, total, matches = stops.len(), "searched sites");
    Ok(stops)
}

/// Turn a station token into a site id.
///
/// Numeric tokens are used as is without touching the network. Names are
/// looked up in the directory and resolve to the first stop whose name
/// contains them.
pub fn resolve_station<T: Transport>(client: &SlClient<T>, token: &str) -> Result<u32, QueryError> {
    let name = match StationToken::parse(token) {
        StationToken::Id(id) => return Ok(id),
        StationToken::Name(name) => name,
    };

    let stops = client.fetch_sites()?;
    let stop = first_match(&stops, &name).ok_or_else(|| QueryError::StationNotFound {
        token: token.to_string(),
    })?;
    debug!(token, id = stop.id, name = %stop.name, "resolved station");
    Ok(stop.id)
}
