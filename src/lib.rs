//! Generates a static GTFS feed for a conference shuttle-bus service.
//!
//! A [`Schedule`] describes stops, routes, single-date service periods and
//! timetables. [`Schedule::assemble`] turns it into a [`Feed`] by running
//! the trip generators of [`generator::Shuttles`], and the feed is then
//! validated and written as a zipped GTFS archive.
//!
//! ```no_run
//! use shuttle_gtfs::Schedule;
//!
//! let feed = Schedule::bundled()?.assemble()?;
//! feed.validate()?;
//! feed.write("google_transit.zip")?;
//! # Ok::<(), shuttle_gtfs::Error>(())
//! ```
pub mod error;
pub mod feed;
pub mod generator;
pub mod schedule;
pub mod time;

pub use error::Error;
pub use feed::{Agency, BoardingPolicy, Feed};
pub use schedule::Schedule;
pub use time::{add_minutes, ServiceTime};
