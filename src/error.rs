//! Module for the error management
use std::fmt;

use thiserror::Error;

/// The kind of entity an id refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Stop,
    Route,
    ServicePeriod,
    Trip,
    TimeSet,
    StopSequence,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Stop => "stop",
            EntityKind::Route => "route",
            EntityKind::ServicePeriod => "service period",
            EntityKind::Trip => "trip",
            EntityKind::TimeSet => "time set",
            EntityKind::StopSequence => "stop sequence",
        })
    }
}

/// A single consistency problem found while validating a feed
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// Id of the offending entity, eg. a trip id
    pub entity: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.entity, self.message)
    }
}

/// An error that can occur while building or writing a shuttle feed.
#[derive(Error, Debug)]
pub enum Error {
    /// The time is not given in the HH:MM:SS format
    #[error("'{0}' is not a valid time; HH:MM:SS format is expected")]
    InvalidTimeFormat(String),
    /// The result of adding minutes does not fit in a service time
    #[error("adding {minutes} minutes to {time} overflows")]
    TimeOverflow { time: String, minutes: u32 },
    #[error("{kind} {id:?} is declared more than once")]
    DuplicateId { kind: EntityKind, id: String },
    #[error("{kind} {id:?} is not declared")]
    UnknownReference { kind: EntityKind, id: String },
    /// A trip leaving the venue needs somewhere to go
    #[error("trip {headsign:?} has no stops after the venue")]
    EmptyLegs { headsign: String },
    /// A loop must end back at the venue
    #[error("loop {headsign:?} does not end at the venue")]
    OpenLoop { headsign: String },
    #[error("the feed has {} validation issue(s), first: {}", .0.len(), first_issue(.0))]
    Validation(Vec<ValidationIssue>),
    #[error("impossible to read the schedule configuration")]
    Config(#[from] serde_json::Error),
    #[error("impossible to write csv")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
    #[error("input/output error")]
    Io(#[from] std::io::Error),
}

fn first_issue(issues: &[ValidationIssue]) -> String {
    issues
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}
