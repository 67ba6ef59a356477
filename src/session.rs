//! Replay of a recorded session: each line is a map click plus the form
//! submitted for it.
//!
//! ```text
//! # type    lat,lng       distance duration cadence|elevation
//! running   51.5,-0.1     5        30       178
//! cycling   51.51,-0.12   20       60       500
//! ```
//!
//! A `-` field is an input left empty.

use crate::dlog;
use crate::error::ValidationError;
use crate::form::FormValues;
use crate::ids::{Clock, IdSource};
use crate::store::WorkoutStore;
use crate::types::{Location, WorkoutKind};
use anyhow::{Context, Result, bail};
use std::io::BufRead;

const EMPTY: &str = "-";

/// One form submission at a clicked location, as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEvent {
    pub line: usize,
    pub kind: String,
    pub location: Location,
    pub distance: String,
    pub duration: String,
    pub metric: String,
}

impl SessionEvent {
    /// Form values with the metric placed in the input `kind` shows.
    pub fn form(&self, kind: WorkoutKind) -> FormValues {
        let metric = field_text(&self.metric);
        let (cadence, elevation) = match kind {
            WorkoutKind::Running => (metric, ""),
            WorkoutKind::Cycling => ("", metric),
        };
        FormValues::from_raw(
            field_text(&self.distance),
            field_text(&self.duration),
            cadence,
            elevation,
        )
    }
}

fn field_text(s: &str) -> &str {
    if s == EMPTY { "" } else { s }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub line: usize,
    pub error: ValidationError,
}

#[derive(Debug, Default)]
pub struct ReplaySummary {
    pub accepted: usize,
    pub rejected: Vec<Rejection>,
}

/// Parse one session line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<SessionEvent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    let [kind, location, distance, duration, metric] = fields.as_slice() else {
        bail!(
            "line {line_no}: expected `<type> <lat>,<lng> <distance> <duration> <metric>`, got {} fields",
            fields.len()
        );
    };

    let location =
        parse_location(location).with_context(|| format!("line {line_no}: bad location"))?;

    Ok(Some(SessionEvent {
        line: line_no,
        kind: (*kind).to_string(),
        location,
        distance: (*distance).to_string(),
        duration: (*duration).to_string(),
        metric: (*metric).to_string(),
    }))
}

/// `"51.5,-0.1"` -> `Location { lat: 51.5, lng: -0.1 }`
pub fn parse_location(s: &str) -> Result<Location> {
    let Some((lat, lng)) = s.split_once(',') else {
        bail!("expected `<lat>,<lng>`, got {s:?}");
    };
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("latitude {lat:?}"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .with_context(|| format!("longitude {lng:?}"))?;
    Ok(Location::new(lat, lng))
}

/// Submit one event to the store.
pub fn submit<I: IdSource, C: Clock>(
    store: &mut WorkoutStore<I, C>,
    event: &SessionEvent,
) -> Result<(), ValidationError> {
    let kind: WorkoutKind = event.kind.parse()?;
    store.add_workout(kind, &event.form(kind), event.location)?;
    Ok(())
}

/// Replay every event from `reader` into `store`.
///
/// Malformed lines abort the replay. Rejected submissions are logged and
/// skipped, the way an alert dismisses a bad form.
pub fn replay<R, I, C>(reader: R, store: &mut WorkoutStore<I, C>) -> Result<ReplaySummary>
where
    R: BufRead,
    I: IdSource,
    C: Clock,
{
    let mut summary = ReplaySummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("reading session line {line_no}"))?;
        let Some(event) = parse_line(line_no, &line)? else {
            continue;
        };
        dlog!("event line={line_no} kind={} location={:?}", event.kind, event.location);

        match submit(store, &event) {
            Ok(()) => summary.accepted += 1,
            Err(error) => {
                tracing::warn!(line = line_no, %error, "{}", ValidationError::ALERT);
                summary.rejected.push(Rejection {
                    line: line_no,
                    error,
                });
            }
        }
    }

    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected.len(),
        "session replayed"
    );
    Ok(summary)
}
