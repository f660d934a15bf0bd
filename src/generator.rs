//! Trip generators for a network where every trip starts or ends at one venue.
use log::debug;
use serde::Deserialize;

use crate::error::EntityKind;
use crate::feed::{BoardingPolicy, Feed};
use crate::time::ServiceTime;
use crate::Error;

/// One step of a multi-stop trip: drive `minutes` from the previous stop to `stop`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Leg {
    pub stop: String,
    pub minutes: u32,
}

impl Leg {
    pub fn new(stop: &str, minutes: u32) -> Self {
        Leg {
            stop: stop.to_string(),
            minutes,
        }
    }
}

/// A single departure towards the venue
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Departure {
    pub service: String,
    pub start: ServiceTime,
    pub minutes: u32,
}

/// Generates shuttle trips into `feed`, all of them touching `venue`.
pub struct Shuttles<'a> {
    feed: &'a mut Feed,
    venue: String,
    to_venue_headsign: String,
}

impl<'a> Shuttles<'a> {
    pub fn new(feed: &'a mut Feed, venue: &str) -> Result<Self, Error> {
        let venue_name = feed
            .stop(venue)
            .map(|stop| stop.name.clone())
            .ok_or_else(|| Error::UnknownReference {
                kind: EntityKind::Stop,
                id: venue.to_string(),
            })?;
        Ok(Shuttles {
            feed,
            venue: venue.to_string(),
            to_venue_headsign: format!("To {}", venue_name),
        })
    }

    pub fn feed(&self) -> &Feed {
        &*self.feed
    }

    /// A two-stop trip from `origin` to the venue, `minutes` long
    pub fn trip_to_venue(
        &mut self,
        route: &str,
        service: &str,
        origin: &str,
        start: ServiceTime,
        minutes: u32,
    ) -> Result<String, Error> {
        self.check_stop(origin)?;
        let arrival = start.plus_minutes(minutes)?;
        let trip_id = self.feed.add_trip(route, service, &self.to_venue_headsign)?;
        self.feed.append_stop_time(&trip_id, origin, start, BoardingPolicy::PickupOnly)?;
        self.feed
            .append_stop_time(&trip_id, &self.venue, arrival, BoardingPolicy::DropOffOnly)?;
        debug!("{}: {} {} -> {} ({} min)", trip_id, start, origin, self.venue, minutes);
        Ok(trip_id)
    }

    pub fn trips_to_venue(
        &mut self,
        route: &str,
        origin: &str,
        departures: &[Departure],
    ) -> Result<Vec<String>, Error> {
        departures
            .iter()
            .map(|d| self.trip_to_venue(route, &d.service, origin, d.start, d.minutes))
            .collect()
    }

    pub fn trips_to_venue_at_times(
        &mut self,
        route: &str,
        service: &str,
        origin: &str,
        start_times: &[ServiceTime],
        minutes: u32,
    ) -> Result<Vec<String>, Error> {
        start_times
            .iter()
            .map(|&start| self.trip_to_venue(route, service, origin, start, minutes))
            .collect()
    }

    /// A trip leaving the venue at `start` and dropping riders off along `legs`
    pub fn trip_from_venue(
        &mut self,
        route: &str,
        service: &str,
        headsign: &str,
        start: ServiceTime,
        legs: &[Leg],
    ) -> Result<String, Error> {
        if legs.is_empty() {
            return Err(Error::EmptyLegs { headsign: headsign.to_string() });
        }
        self.check_legs(legs)?;
        let times = leg_times(start, legs)?;

        let trip_id = self.feed.add_trip(route, service, headsign)?;
        self.feed.append_stop_time(&trip_id, &self.venue, start, BoardingPolicy::PickupOnly)?;
        for (leg, &time) in legs.iter().zip(&times) {
            self.feed.append_stop_time(&trip_id, &leg.stop, time, BoardingPolicy::DropOffOnly)?;
        }
        debug!("{}: {} from {} with {} stops", trip_id, start, self.venue, legs.len());
        Ok(trip_id)
    }

    pub fn trips_from_venue_at_times(
        &mut self,
        route: &str,
        service: &str,
        headsign: &str,
        start_times: &[ServiceTime],
        legs: &[Leg],
    ) -> Result<Vec<String>, Error> {
        start_times
            .iter()
            .map(|&start| self.trip_from_venue(route, service, headsign, start, legs))
            .collect()
    }

    /// A round trip from the venue through `legs`, the last of which must be the venue.
    ///
    /// Riders may board anywhere but the final stop, where they can only alight.
    pub fn loop_trip(
        &mut self,
        route: &str,
        service: &str,
        headsign: &str,
        start: ServiceTime,
        legs: &[Leg],
    ) -> Result<String, Error> {
        match legs.last() {
            None => return Err(Error::EmptyLegs { headsign: headsign.to_string() }),
            Some(last) if last.stop != self.venue => {
                return Err(Error::OpenLoop { headsign: headsign.to_string() })
            }
            Some(_) => {}
        }
        self.check_legs(legs)?;
        let times = leg_times(start, legs)?;
        let back = times.last().copied().unwrap_or(start);

        let trip_id = self.feed.add_trip(route, service, headsign)?;
        self.feed.append_stop_time(&trip_id, &self.venue, start, BoardingPolicy::PickupOnly)?;
        for (i, (leg, &time)) in legs.iter().zip(&times).enumerate() {
            let policy = if i + 1 == legs.len() {
                BoardingPolicy::DropOffOnly
            } else {
                BoardingPolicy::PickupOnly
            };
            self.feed.append_stop_time(&trip_id, &leg.stop, time, policy)?;
        }
        debug!("{}: {} loop of {} stops, back at {}", trip_id, start, legs.len(), back);
        Ok(trip_id)
    }

    pub fn loop_trips_at_times(
        &mut self,
        route: &str,
        service: &str,
        headsign: &str,
        start_times: &[ServiceTime],
        legs: &[Leg],
    ) -> Result<Vec<String>, Error> {
        start_times
            .iter()
            .map(|&start| self.loop_trip(route, service, headsign, start, legs))
            .collect()
    }

    // Checked up front so a bad stop never leaves a half-built trip behind
    fn check_legs(&self, legs: &[Leg]) -> Result<(), Error> {
        legs.iter().try_for_each(|leg| self.check_stop(&leg.stop))
    }

    fn check_stop(&self, stop: &str) -> Result<(), Error> {
        match self.feed.stop(stop) {
            Some(_) => Ok(()),
            None => Err(Error::UnknownReference {
                kind: EntityKind::Stop,
                id: stop.to_string(),
            }),
        }
    }
}

/// Arrival time at the end of each leg, counting from `start`
fn leg_times(start: ServiceTime, legs: &[Leg]) -> Result<Vec<ServiceTime>, Error> {
    let mut time = start;
    legs.iter()
        .map(|leg| {
            time = time.plus_minutes(leg.minutes)?;
            Ok(time)
        })
        .collect()
}
