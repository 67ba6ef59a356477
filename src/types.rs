use crate::error::{Field, ValidationError};
use crate::ids::{Clock, IdSource};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Lowercase name, as used by the form's type selector and popup classes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cycling => "Cycling",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" => Ok(Self::Running),
            "cycling" => Ok(Self::Cycling),
            _ => Err(ValidationError::UnknownKind(s.to_string())),
        }
    }
}

/// Map click position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub const fn as_pair(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl From<[f64; 2]> for Location {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Location {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Activity-specific input plus the metric derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Activity {
    /// `pace` in min/km.
    Running { cadence: f64, pace: f64 },
    /// `speed` in km/h.
    Cycling { elevation_gain: f64, speed: f64 },
}

impl Activity {
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running { .. } => WorkoutKind::Running,
            Self::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// Submitted inputs for a workout, before validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewWorkout {
    pub kind: WorkoutKind,
    /// km
    pub distance: f64,
    /// minutes
    pub duration: f64,
    pub location: Location,
    /// Cadence (spm) for running, elevation gain (m) for cycling.
    pub extra: f64,
}

impl NewWorkout {
    /// Distance, duration and cadence must be finite and positive.
    ///
    /// Elevation gain is only required to be finite: descents and flat rides
    /// are accepted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        positive(Field::Distance, self.distance)?;
        positive(Field::Duration, self.duration)?;
        match self.kind {
            WorkoutKind::Running => positive(Field::Cadence, self.extra),
            WorkoutKind::Cycling => finite(Field::ElevationGain, self.extra),
        }
    }
}

fn finite(field: Field, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field, value })
    }
}

fn positive(field: Field, value: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}

/// One logged workout. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workout {
    id: String,
    created_at: DateTime<Local>,
    distance: f64,
    duration: f64,
    location: Location,
    description: String,
    #[serde(flatten)]
    activity: Activity,
}

impl Workout {
    /// Validate `new`, then draw an id and a timestamp and derive the
    /// metric and description.
    ///
    /// Nothing is drawn from `ids` when validation fails.
    pub fn create<I, C>(new: NewWorkout, ids: &mut I, clock: &C) -> Result<Self, ValidationError>
    where
        I: IdSource + ?Sized,
        C: Clock + ?Sized,
    {
        new.validate()?;
        let id = ids.next_id();
        let created_at = clock.now();
        Ok(Self::derive(new, id, created_at))
    }

    fn derive(new: NewWorkout, id: String, created_at: DateTime<Local>) -> Self {
        let NewWorkout {
            kind,
            distance,
            duration,
            location,
            extra,
        } = new;

        let activity = match kind {
            WorkoutKind::Running => Activity::Running {
                cadence: extra,
                pace: duration / distance,
            },
            WorkoutKind::Cycling => Activity::Cycling {
                elevation_gain: extra,
                speed: distance / (duration / 60.0),
            },
        };

        Self {
            id,
            created_at,
            distance,
            duration,
            location,
            description: describe(kind, created_at),
            activity,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub const fn distance(&self) -> f64 {
        self.distance
    }

    pub const fn duration(&self) -> f64 {
        self.duration
    }

    pub const fn location(&self) -> Location {
        self.location
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn activity(&self) -> &Activity {
        &self.activity
    }

    pub const fn kind(&self) -> WorkoutKind {
        self.activity.kind()
    }

    pub const fn pace(&self) -> Option<f64> {
        match self.activity {
            Activity::Running { pace, .. } => Some(pace),
            Activity::Cycling { .. } => None,
        }
    }

    pub const fn speed(&self) -> Option<f64> {
        match self.activity {
            Activity::Cycling { speed, .. } => Some(speed),
            Activity::Running { .. } => None,
        }
    }

    pub const fn cadence(&self) -> Option<f64> {
        match self.activity {
            Activity::Running { cadence, .. } => Some(cadence),
            Activity::Cycling { .. } => None,
        }
    }

    pub const fn elevation_gain(&self) -> Option<f64> {
        match self.activity {
            Activity::Cycling { elevation_gain, .. } => Some(elevation_gain),
            Activity::Running { .. } => None,
        }
    }
}

/// `"Running on April 14"`
pub fn describe(kind: WorkoutKind, at: DateTime<Local>) -> String {
    format!("{} on {}", kind.label(), at.format("%B %-d"))
}
