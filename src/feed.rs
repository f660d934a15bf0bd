use std::collections::{BTreeSet, HashMap, HashSet};
use std::io::{Seek, Write};
use std::path::Path;

use chrono::NaiveDate;
use gtfs_structures::{Exception, PickupDropOffType, RouteType};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{EntityKind, ValidationIssue};
use crate::time::ServiceTime;
use crate::Error;

const DEFAULT_AGENCY_ID: &str = "AGENCY";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Agency {
    #[serde(default = "default_agency_id")]
    pub id: String,
    pub name: String,
    pub url: String,
    pub timezone: String,
    #[serde(default)]
    pub lang: Option<String>,
}

fn default_agency_id() -> String {
    DEFAULT_AGENCY_ID.to_string()
}

impl Default for Agency {
    fn default() -> Self {
        Agency {
            id: default_agency_id(),
            name: "Shuttle Transit".to_string(),
            url: "http://example.com".to_string(),
            timezone: "America/Los_Angeles".to_string(),
            lang: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: String,
    pub short_name: String,
    pub long_name: String,
    pub route_type: RouteType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServicePeriod {
    pub id: String,
    pub dates: BTreeSet<NaiveDate>,
}

/// Who may get on and off the vehicle at a stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardingPolicy {
    /// Riders may board but not alight, eg. at the origin of a trip
    PickupOnly,
    /// Riders may alight but not board, eg. at the destination of a trip
    DropOffOnly,
    Both,
}

impl BoardingPolicy {
    pub fn pickup_type(&self) -> PickupDropOffType {
        match self {
            BoardingPolicy::DropOffOnly => PickupDropOffType::NotAvailable,
            _ => PickupDropOffType::Regular,
        }
    }

    pub fn drop_off_type(&self) -> PickupDropOffType {
        match self {
            BoardingPolicy::PickupOnly => PickupDropOffType::NotAvailable,
            _ => PickupDropOffType::Regular,
        }
    }

    pub fn allows_pickup(&self) -> bool {
        self.pickup_type() == PickupDropOffType::Regular
    }

    pub fn allows_drop_off(&self) -> bool {
        self.drop_off_type() == PickupDropOffType::Regular
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StopTime {
    pub stop_id: String,
    pub time: ServiceTime,
    pub policy: BoardingPolicy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: String,
    pub route_id: String,
    pub service_id: String,
    pub headsign: String,
    pub stop_times: Vec<StopTime>,
}

/// In-memory accumulator of a whole GTFS feed.
///
/// Entities are only ever appended. Every id is unique within its kind and
/// trips may only reference routes, service periods and stops that were
/// added before them.
#[derive(Debug, Default)]
pub struct Feed {
    pub agency: Agency,
    stops: Vec<Stop>,
    routes: Vec<Route>,
    service_periods: Vec<ServicePeriod>,
    trips: Vec<Trip>,
    stop_index: HashMap<String, usize>,
    route_index: HashMap<String, usize>,
    service_index: HashMap<String, usize>,
    trip_index: HashMap<String, usize>,
    // Number of the last trip added, shared by every route and service period
    trip_counter: usize,
}

impl Feed {
    pub fn new(agency: Agency) -> Self {
        Feed {
            agency,
            ..Default::default()
        }
    }

    pub fn set_agency(&mut self, agency: Agency) {
        self.agency = agency;
    }

    pub fn add_stop(&mut self, id: &str, lat: f64, lon: f64, name: &str) -> Result<(), Error> {
        insert_unique(&mut self.stop_index, EntityKind::Stop, id, self.stops.len())?;
        self.stops.push(Stop {
            id: id.to_string(),
            name: name.to_string(),
            lat,
            lon,
        });
        Ok(())
    }

    pub fn add_route(
        &mut self,
        id: &str,
        short_name: &str,
        long_name: &str,
        route_type: RouteType,
    ) -> Result<(), Error> {
        insert_unique(&mut self.route_index, EntityKind::Route, id, self.routes.len())?;
        self.routes.push(Route {
            id: id.to_string(),
            short_name: short_name.to_string(),
            long_name: long_name.to_string(),
            route_type,
        });
        Ok(())
    }

    pub fn add_service_period(&mut self, id: &str) -> Result<(), Error> {
        let position = self.service_periods.len();
        insert_unique(&mut self.service_index, EntityKind::ServicePeriod, id, position)?;
        self.service_periods.push(ServicePeriod {
            id: id.to_string(),
            dates: BTreeSet::new(),
        });
        Ok(())
    }

    pub fn mark_date_active(&mut self, service_id: &str, date: NaiveDate) -> Result<(), Error> {
        let idx = lookup(&self.service_index, EntityKind::ServicePeriod, service_id)?;
        self.service_periods[idx].dates.insert(date);
        Ok(())
    }

    /// Creates an empty trip and returns its generated id
    pub fn add_trip(
        &mut self,
        route_id: &str,
        service_id: &str,
        headsign: &str,
    ) -> Result<String, Error> {
        lookup(&self.route_index, EntityKind::Route, route_id)?;
        lookup(&self.service_index, EntityKind::ServicePeriod, service_id)?;

        self.trip_counter += 1;
        let trip_id = format!("{}-{}-{}", route_id, service_id, self.trip_counter);

        insert_unique(&mut self.trip_index, EntityKind::Trip, &trip_id, self.trips.len())?;
        self.trips.push(Trip {
            id: trip_id.clone(),
            route_id: route_id.to_string(),
            service_id: service_id.to_string(),
            headsign: headsign.to_string(),
            stop_times: Vec::new(),
        });
        Ok(trip_id)
    }

    pub fn append_stop_time(
        &mut self,
        trip_id: &str,
        stop_id: &str,
        time: ServiceTime,
        policy: BoardingPolicy,
    ) -> Result<(), Error> {
        lookup(&self.stop_index, EntityKind::Stop, stop_id)?;
        let idx = lookup(&self.trip_index, EntityKind::Trip, trip_id)?;
        self.trips[idx].stop_times.push(StopTime {
            stop_id: stop_id.to_string(),
            time,
            policy,
        });
        Ok(())
    }

    pub fn stop(&self, id: &str) -> Option<&Stop> {
        self.stop_index.get(id).map(|&idx| &self.stops[idx])
    }

    pub fn trip(&self, id: &str) -> Option<&Trip> {
        self.trip_index.get(id).map(|&idx| &self.trips[idx])
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn service_periods(&self) -> &[ServicePeriod] {
        &self.service_periods
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Checks the feed for consistency problems.
    ///
    /// Every problem is collected into a single [`Error::Validation`].
    /// Unused stops, routes and service periods are only logged.
    pub fn validate(&self) -> Result<(), Error> {
        let mut issues = Vec::new();
        let mut issue = |entity: &str, message: String| {
            issues.push(ValidationIssue {
                entity: entity.to_string(),
                message,
            })
        };

        let agency_fields = [
            ("name", &self.agency.name),
            ("url", &self.agency.url),
            ("timezone", &self.agency.timezone),
        ];
        for (field, value) in agency_fields {
            if value.trim().is_empty() {
                issue(&self.agency.id, format!("agency {} is empty", field));
            }
        }

        for stop in &self.stops {
            if stop.name.trim().is_empty() {
                issue(&stop.id, "stop has no name".to_string());
            }
            if !(-90.0..=90.0).contains(&stop.lat) || !(-180.0..=180.0).contains(&stop.lon) {
                let message = format!("coordinates ({}, {}) are out of range", stop.lat, stop.lon);
                issue(&stop.id, message);
            }
        }

        for route in &self.routes {
            if route.short_name.trim().is_empty() && route.long_name.trim().is_empty() {
                issue(&route.id, "route needs a short or a long name".to_string());
            }
        }

        for service in &self.service_periods {
            if service.dates.is_empty() {
                issue(&service.id, "service period has no active date".to_string());
            }
        }

        if self.trips.is_empty() {
            issue(&self.agency.id, "feed has no trips".to_string());
        }

        for trip in &self.trips {
            if trip.stop_times.len() < 2 {
                let message = format!(
                    "trip has {} stop time(s), at least 2 are needed",
                    trip.stop_times.len()
                );
                issue(&trip.id, message);
                continue;
            }
            for pair in trip.stop_times.windows(2) {
                if pair[1].time < pair[0].time {
                    let message = format!(
                        "stop time {} at {} is before {} at {}",
                        pair[1].time, pair[1].stop_id, pair[0].time, pair[0].stop_id
                    );
                    issue(&trip.id, message);
                }
            }
            if let Some(first) = trip.stop_times.first() {
                if !first.policy.allows_pickup() {
                    issue(&trip.id, format!("first stop {} does not allow pickup", first.stop_id));
                }
            }
            if let Some(last) = trip.stop_times.last() {
                if !last.policy.allows_drop_off() {
                    issue(&trip.id, format!("last stop {} does not allow drop off", last.stop_id));
                }
            }
        }

        self.warn_unused();

        if issues.is_empty() {
            Ok(())
        } else {
            for issue in &issues {
                error!("{}", issue);
            }
            Err(Error::Validation(issues))
        }
    }

    fn warn_unused(&self) {
        let used_routes: HashSet<&str> = self.trips.iter().map(|t| t.route_id.as_str()).collect();
        let used_services: HashSet<&str> =
            self.trips.iter().map(|t| t.service_id.as_str()).collect();
        let used_stops: HashSet<&str> = self
            .trips
            .iter()
            .flat_map(|t| t.stop_times.iter().map(|st| st.stop_id.as_str()))
            .collect();

        for route in self.routes.iter().filter(|r| !used_routes.contains(r.id.as_str())) {
            warn!("Route {} has no trips", route.id);
        }
        let unused_services = self
            .service_periods
            .iter()
            .filter(|s| !used_services.contains(s.id.as_str()));
        for service in unused_services {
            warn!("Service period {} has no trips", service.id);
        }
        for stop in self.stops.iter().filter(|s| !used_stops.contains(s.id.as_str())) {
            warn!("Stop {} ({}) is never served", stop.id, stop.name);
        }
    }

    /// Writes the feed as a zipped GTFS archive.
    ///
    /// The archive is first written next to `path` and then renamed, so
    /// `path` either holds a complete feed or is left untouched.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let file = tempfile::NamedTempFile::new_in(dir)?;
        let mut zip = ZipWriter::new(file);
        self.write_tables(&mut zip)?;
        let file = zip.finish()?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| e.error)?;

        info!("Wrote {} trips to {}", self.trips.len(), path.display());
        Ok(())
    }

    fn write_tables<W: Write + Seek>(&self, zip: &mut ZipWriter<W>) -> Result<(), Error> {
        let agency = &self.agency;
        write_table(zip, "agency.txt", [AgencyRecord {
            agency_id: &agency.id,
            agency_name: &agency.name,
            agency_url: &agency.url,
            agency_timezone: &agency.timezone,
            agency_lang: agency.lang.as_deref(),
        }])?;

        write_table(zip, "stops.txt", self.stops.iter().map(|stop| StopRecord {
            stop_id: &stop.id,
            stop_name: &stop.name,
            stop_lat: stop.lat,
            stop_lon: stop.lon,
        }))?;

        write_table(zip, "routes.txt", self.routes.iter().map(|route| RouteRecord {
            route_id: &route.id,
            agency_id: &agency.id,
            route_short_name: &route.short_name,
            route_long_name: &route.long_name,
            route_type: route.route_type,
        }))?;

        write_table(zip, "trips.txt", self.trips.iter().map(|trip| TripRecord {
            route_id: &trip.route_id,
            service_id: &trip.service_id,
            trip_id: &trip.id,
            trip_headsign: &trip.headsign,
        }))?;

        write_table(zip, "stop_times.txt", self.trips.iter().flat_map(|trip| {
            trip.stop_times.iter().enumerate().map(move |(sequence, st)| StopTimeRecord {
                trip_id: &trip.id,
                arrival_time: st.time,
                departure_time: st.time,
                stop_id: &st.stop_id,
                stop_sequence: sequence,
                pickup_type: st.policy.pickup_type(),
                drop_off_type: st.policy.drop_off_type(),
            })
        }))?;

        write_table(zip, "calendar_dates.txt", self.service_periods.iter().flat_map(|service| {
            service.dates.iter().map(move |date| CalendarDateRecord {
                service_id: &service.id,
                date: date.format("%Y%m%d").to_string(),
                exception_type: Exception::Added,
            })
        }))?;

        Ok(())
    }
}

fn insert_unique(
    index: &mut HashMap<String, usize>,
    kind: EntityKind,
    id: &str,
    position: usize,
) -> Result<(), Error> {
    if index.contains_key(id) {
        return Err(Error::DuplicateId { kind, id: id.to_string() });
    }
    index.insert(id.to_string(), position);
    Ok(())
}

fn lookup(index: &HashMap<String, usize>, kind: EntityKind, id: &str) -> Result<usize, Error> {
    index
        .get(id)
        .copied()
        .ok_or_else(|| Error::UnknownReference { kind, id: id.to_string() })
}

fn write_table<W, R, I>(zip: &mut ZipWriter<W>, name: &str, records: I) -> Result<(), Error>
where
    W: Write + Seek,
    R: Serialize,
    I: IntoIterator<Item = R>,
{
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(name, options)?;

    let mut writer = csv::Writer::from_writer(&mut *zip);
    let mut count = 0;
    for record in records {
        writer.serialize(record)?;
        count += 1;
    }
    writer.flush()?;
    debug!("{}: {} rows", name, count);
    Ok(())
}

#[derive(Serialize)]
struct AgencyRecord<'a> {
    agency_id: &'a str,
    agency_name: &'a str,
    agency_url: &'a str,
    agency_timezone: &'a str,
    agency_lang: Option<&'a str>,
}

#[derive(Serialize)]
struct StopRecord<'a> {
    stop_id: &'a str,
    stop_name: &'a str,
    stop_lat: f64,
    stop_lon: f64,
}

#[derive(Serialize)]
struct RouteRecord<'a> {
    route_id: &'a str,
    agency_id: &'a str,
    route_short_name: &'a str,
    route_long_name: &'a str,
    route_type: RouteType,
}

#[derive(Serialize)]
struct TripRecord<'a> {
    route_id: &'a str,
    service_id: &'a str,
    trip_id: &'a str,
    trip_headsign: &'a str,
}

#[derive(Serialize)]
struct StopTimeRecord<'a> {
    trip_id: &'a str,
    arrival_time: ServiceTime,
    departure_time: ServiceTime,
    stop_id: &'a str,
    stop_sequence: usize,
    pickup_type: PickupDropOffType,
    drop_off_type: PickupDropOffType,
}

#[derive(Serialize)]
struct CalendarDateRecord<'a> {
    service_id: &'a str,
    date: String,
    exception_type: Exception,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2017, 5, day).unwrap()
    }

    fn small_feed() -> Feed {
        let mut feed = Feed::new(Agency::default());
        feed.add_stop("venue", 37.4263, -122.078634, "Venue").unwrap();
        feed.add_stop("hotel", 37.44129, -122.163991, "Hotel").unwrap();
        feed.add_route("yellow", "Yellow", "Hotel shuttle", RouteType::Bus).unwrap();
        feed.add_service_period("day1").unwrap();
        feed.mark_date_active("day1", date(17)).unwrap();
        feed
    }

    fn add_two_stop_trip(
        feed: &mut Feed,
        first: (&str, &str, BoardingPolicy),
        second: (&str, &str, BoardingPolicy),
    ) -> String {
        let trip_id = feed.add_trip("yellow", "day1", "To Venue").unwrap();
        for (stop, time, policy) in [first, second] {
            feed.append_stop_time(&trip_id, stop, time.parse().unwrap(), policy).unwrap();
        }
        trip_id
    }

    fn issues(result: Result<(), Error>) -> Vec<ValidationIssue> {
        match result {
            Err(Error::Validation(issues)) => issues,
            other => panic!("expected validation issues, got {:?}", other),
        }
    }

    #[test]
    fn boarding_policies_map_to_gtfs_codes() {
        assert_eq!(BoardingPolicy::PickupOnly.pickup_type(), PickupDropOffType::Regular);
        assert_eq!(BoardingPolicy::PickupOnly.drop_off_type(), PickupDropOffType::NotAvailable);
        assert_eq!(BoardingPolicy::DropOffOnly.pickup_type(), PickupDropOffType::NotAvailable);
        assert_eq!(BoardingPolicy::DropOffOnly.drop_off_type(), PickupDropOffType::Regular);
        assert!(BoardingPolicy::Both.allows_pickup() && BoardingPolicy::Both.allows_drop_off());
    }

    #[test]
    fn generates_sequential_trip_ids() {
        let mut feed = small_feed();
        assert_eq!(feed.add_trip("yellow", "day1", "A").unwrap(), "yellow-day1-1");
        assert_eq!(feed.add_trip("yellow", "day1", "B").unwrap(), "yellow-day1-2");
        assert_eq!(feed.trips().len(), 2);
        assert_eq!(feed.trip("yellow-day1-2").unwrap().headsign, "B");
    }

    #[test]
    fn trip_ids_stay_unique_when_ids_contain_dashes() {
        let mut feed = small_feed();
        feed.add_route("a-b", "AB", "Dashed route", RouteType::Bus).unwrap();
        feed.add_route("a", "A", "Plain route", RouteType::Bus).unwrap();
        feed.add_service_period("c").unwrap();
        feed.add_service_period("b-c").unwrap();

        let first = feed.add_trip("a-b", "c", "To Venue").unwrap();
        let second = feed.add_trip("a", "b-c", "To Venue").unwrap();
        assert_ne!(first, second);
        assert_eq!(feed.trip(&first).unwrap().route_id, "a-b");
        assert_eq!(feed.trip(&second).unwrap().route_id, "a");
    }

    #[test]
    fn numbers_trips_across_routes_and_services() {
        let mut feed = small_feed();
        feed.add_service_period("day2").unwrap();
        assert_eq!(feed.add_trip("yellow", "day1", "A").unwrap(), "yellow-day1-1");
        assert_eq!(feed.add_trip("yellow", "day2", "B").unwrap(), "yellow-day2-2");
        assert_eq!(feed.add_trip("yellow", "day1", "C").unwrap(), "yellow-day1-3");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut feed = small_feed();
        assert!(matches!(
            feed.add_stop("hotel", 0.0, 0.0, "Other hotel"),
            Err(Error::DuplicateId { kind: EntityKind::Stop, .. })
        ));
        assert!(matches!(
            feed.add_service_period("day1"),
            Err(Error::DuplicateId { kind: EntityKind::ServicePeriod, .. })
        ));
    }

    #[test]
    fn rejects_unknown_references() {
        let mut feed = small_feed();
        assert!(matches!(
            feed.add_trip("purple", "day1", "To Venue"),
            Err(Error::UnknownReference { kind: EntityKind::Route, .. })
        ));
        assert!(matches!(
            feed.mark_date_active("day9", date(20)),
            Err(Error::UnknownReference { kind: EntityKind::ServicePeriod, .. })
        ));
        let trip_id = feed.add_trip("yellow", "day1", "To Venue").unwrap();
        let seven = ServiceTime::from_hms_opt(7, 0, 0).unwrap();
        assert!(matches!(
            feed.append_stop_time(&trip_id, "airport", seven, BoardingPolicy::Both),
            Err(Error::UnknownReference { kind: EntityKind::Stop, .. })
        ));
    }

    #[test]
    fn valid_feed_passes() {
        let mut feed = small_feed();
        add_two_stop_trip(
            &mut feed,
            ("hotel", "07:00:00", BoardingPolicy::PickupOnly),
            ("venue", "07:30:00", BoardingPolicy::DropOffOnly),
        );
        feed.validate().unwrap();
    }

    #[test]
    fn empty_feed_has_no_trips() {
        let issues = issues(small_feed().validate());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("no trips"));
    }

    #[test]
    fn agency_needs_a_timezone() {
        let mut feed = small_feed();
        add_two_stop_trip(
            &mut feed,
            ("hotel", "07:00:00", BoardingPolicy::PickupOnly),
            ("venue", "07:30:00", BoardingPolicy::DropOffOnly),
        );
        feed.set_agency(Agency {
            timezone: String::new(),
            ..Agency::default()
        });
        let issues = issues(feed.validate());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].entity, "AGENCY");
        assert!(issues[0].message.contains("timezone"));
    }

    #[test]
    fn detects_out_of_order_stop_times() {
        let mut feed = small_feed();
        let trip_id = add_two_stop_trip(
            &mut feed,
            ("hotel", "08:00:00", BoardingPolicy::PickupOnly),
            ("venue", "07:30:00", BoardingPolicy::DropOffOnly),
        );
        let issues = issues(feed.validate());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].entity, trip_id);
    }

    #[test]
    fn detects_wrong_endpoint_policies() {
        let mut feed = small_feed();
        add_two_stop_trip(
            &mut feed,
            ("hotel", "07:00:00", BoardingPolicy::DropOffOnly),
            ("venue", "07:30:00", BoardingPolicy::PickupOnly),
        );
        let issues = issues(feed.validate());
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn detects_short_trips_and_dateless_services() {
        let mut feed = small_feed();
        feed.add_service_period("day2").unwrap();
        let trip_id = feed.add_trip("yellow", "day2", "To Venue").unwrap();
        let seven = ServiceTime::from_hms_opt(7, 0, 0).unwrap();
        feed.append_stop_time(&trip_id, "hotel", seven, BoardingPolicy::PickupOnly).unwrap();
        let entities: Vec<String> = issues(feed.validate()).into_iter().map(|i| i.entity).collect();
        assert!(entities.contains(&"day2".to_string()));
        assert!(entities.contains(&trip_id));
    }

    #[test]
    fn detects_bad_stops_and_routes() {
        let mut feed = small_feed();
        feed.add_stop("nowhere", 137.0, 0.0, " ").unwrap();
        feed.add_route("blank", "", "", RouteType::Bus).unwrap();
        add_two_stop_trip(
            &mut feed,
            ("hotel", "07:00:00", BoardingPolicy::PickupOnly),
            ("venue", "07:30:00", BoardingPolicy::DropOffOnly),
        );
        let issues = issues(feed.validate());
        assert_eq!(issues.iter().filter(|i| i.entity == "nowhere").count(), 2);
        assert_eq!(issues.iter().filter(|i| i.entity == "blank").count(), 1);
    }

    #[test]
    fn writes_every_table() {
        let mut feed = small_feed();
        add_two_stop_trip(
            &mut feed,
            ("hotel", "07:00:00", BoardingPolicy::PickupOnly),
            ("venue", "07:30:00", BoardingPolicy::DropOffOnly),
        );

        let mut buffer = std::io::Cursor::new(Vec::new());
        {
            let mut zip = ZipWriter::new(&mut buffer);
            feed.write_tables(&mut zip).unwrap();
            zip.finish().unwrap();
        }

        let mut archive = zip::ZipArchive::new(buffer).unwrap();
        let mut names: Vec<&str> = archive.file_names().collect();
        names.sort_unstable();
        assert_eq!(
            names,
            [
                "agency.txt",
                "calendar_dates.txt",
                "routes.txt",
                "stop_times.txt",
                "stops.txt",
                "trips.txt"
            ]
        );

        let mut stop_times = String::new();
        let mut file = archive.by_name("stop_times.txt").unwrap();
        std::io::Read::read_to_string(&mut file, &mut stop_times).unwrap();
        drop(file);
        assert_eq!(
            stop_times,
            "trip_id,arrival_time,departure_time,stop_id,stop_sequence,pickup_type,drop_off_type\n\
             yellow-day1-1,07:00:00,07:00:00,hotel,0,0,1\n\
             yellow-day1-1,07:30:00,07:30:00,venue,1,1,0\n"
        );

        let mut calendar_dates = String::new();
        let mut file = archive.by_name("calendar_dates.txt").unwrap();
        std::io::Read::read_to_string(&mut file, &mut calendar_dates).unwrap();
        assert_eq!(calendar_dates, "service_id,date,exception_type\nday1,20170517,1\n");
    }
}
