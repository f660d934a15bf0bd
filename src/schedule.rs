//! Declarative description of a shuttle schedule and its assembly into a [`Feed`].
use std::collections::HashMap;

use chrono::NaiveDate;
use gtfs_structures::RouteType;
use log::info;
use serde::Deserialize;

use crate::error::EntityKind;
use crate::feed::{Agency, Feed};
use crate::generator::{Departure, Leg, Shuttles};
use crate::time::ServiceTime;
use crate::Error;

/// The conference shuttle schedule bundled with the binary
pub const BUNDLED_SCHEDULE: &str = include_str!("../data/conference_shuttles.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Schedule {
    pub agency: Agency,
    /// Id of the stop every trip starts or ends at
    pub venue: String,
    pub service_periods: Vec<ServicePeriodConfig>,
    pub stops: Vec<StopConfig>,
    pub routes: Vec<RouteConfig>,
    /// Departure times shared between timetables, by name
    #[serde(default)]
    pub time_sets: HashMap<String, Vec<ServiceTime>>,
    /// Leg lists shared between timetables, by name
    #[serde(default)]
    pub stop_sequences: HashMap<String, Vec<Leg>>,
    pub timetables: Vec<Timetable>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServicePeriodConfig {
    pub id: String,
    pub dates: Vec<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StopConfig {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteConfig {
    pub id: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub long_name: String,
    #[serde(default = "default_route_type")]
    pub route_type: RouteType,
}

fn default_route_type() -> RouteType {
    RouteType::Bus
}

/// Either an inline list or the name of a shared one
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Shared<T> {
    Named(String),
    Inline(Vec<T>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Timetable {
    /// One trip to the venue per departure, each with its own service and duration
    ToVenue {
        route: String,
        origin: String,
        departures: Vec<Departure>,
    },
    ToVenueAtTimes {
        route: String,
        service: String,
        origin: String,
        start_times: Shared<ServiceTime>,
        minutes: u32,
    },
    FromVenue {
        route: String,
        service: String,
        headsign: String,
        start_times: Shared<ServiceTime>,
        legs: Shared<Leg>,
    },
    Loop {
        route: String,
        service: String,
        headsign: String,
        start_times: Shared<ServiceTime>,
        legs: Shared<Leg>,
    },
}

impl Schedule {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn bundled() -> Result<Self, Error> {
        Self::from_json(BUNDLED_SCHEDULE)
    }

    /// Declares every entity of the schedule and generates all of its trips
    pub fn assemble(&self) -> Result<Feed, Error> {
        let mut feed = Feed::new(self.agency.clone());

        for service in &self.service_periods {
            feed.add_service_period(&service.id)?;
            for &date in &service.dates {
                feed.mark_date_active(&service.id, date)?;
            }
        }
        for stop in &self.stops {
            feed.add_stop(&stop.id, stop.lat, stop.lon, &stop.name)?;
        }
        for route in &self.routes {
            feed.add_route(&route.id, &route.short_name, &route.long_name, route.route_type)?;
        }

        let mut shuttles = Shuttles::new(&mut feed, &self.venue)?;
        for timetable in &self.timetables {
            match timetable {
                Timetable::ToVenue { route, origin, departures } => {
                    shuttles.trips_to_venue(route, origin, departures)?;
                }
                Timetable::ToVenueAtTimes { route, service, origin, start_times, minutes } => {
                    let start_times = self.start_times(start_times)?;
                    shuttles
                        .trips_to_venue_at_times(route, service, origin, start_times, *minutes)?;
                }
                Timetable::FromVenue { route, service, headsign, start_times, legs } => {
                    let start_times = self.start_times(start_times)?;
                    let legs = self.legs(legs)?;
                    shuttles
                        .trips_from_venue_at_times(route, service, headsign, start_times, legs)?;
                }
                Timetable::Loop { route, service, headsign, start_times, legs } => {
                    let start_times = self.start_times(start_times)?;
                    let legs = self.legs(legs)?;
                    shuttles.loop_trips_at_times(route, service, headsign, start_times, legs)?;
                }
            }
        }

        info!(
            "Assembled {} stops, {} routes, {} service periods and {} trips",
            feed.stops().len(),
            feed.routes().len(),
            feed.service_periods().len(),
            feed.trips().len()
        );
        Ok(feed)
    }

    fn start_times<'s>(
        &'s self,
        times: &'s Shared<ServiceTime>,
    ) -> Result<&'s [ServiceTime], Error> {
        resolve(&self.time_sets, EntityKind::TimeSet, times)
    }

    fn legs<'s>(&'s self, legs: &'s Shared<Leg>) -> Result<&'s [Leg], Error> {
        resolve(&self.stop_sequences, EntityKind::StopSequence, legs)
    }
}

fn resolve<'s, T>(
    named: &'s HashMap<String, Vec<T>>,
    kind: EntityKind,
    shared: &'s Shared<T>,
) -> Result<&'s [T], Error> {
    match shared {
        Shared::Inline(items) => Ok(items),
        Shared::Named(name) => named
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownReference { kind, id: name.clone() }),
    }
}
