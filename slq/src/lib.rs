//! Query Storstockholms Lokaltrafik (SL) from the command line.
//!
//! Resolves station names to site ids, searches the site directory, and
//! lists upcoming departures filtered by line, transport type and
//! destination.

pub mod cli;
pub mod departures;
pub mod domain;
pub mod error;
pub mod render;
pub mod sl;
pub mod stations;

pub use error::QueryError;
