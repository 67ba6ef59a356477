use crate::types::{Activity, Location, Workout, WorkoutKind};
use serde::Serialize;
use std::fmt;

/// One labelled value in a list entry, e.g. `⏱ 30 min`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.icon, self.value, self.unit)
    }
}

/// Sidebar list item for one workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub id: String,
    pub kind: WorkoutKind,
    pub title: String,
    pub details: [Detail; 4],
}

impl fmt::Display for ListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        let [a, b, c, d] = &self.details;
        write!(f, "  {a}  {b}  {c}  {d}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PopupOptions {
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self {
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
        }
    }
}

/// Map marker with an always-open popup showing the description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub location: Location,
    pub popup: String,
    pub class_name: String,
    pub options: PopupOptions,
}

pub fn list_entry(w: &Workout) -> ListEntry {
    let (kind_icon, metric, extra) = match *w.activity() {
        Activity::Running { cadence, pace } => (
            "🏃‍♂️",
            detail("⚡️", format!("{pace:.1}"), "min/km"),
            detail("🦶🏼", format_number(cadence), "spm"),
        ),
        Activity::Cycling {
            elevation_gain,
            speed,
        } => (
            "🚴‍♀️",
            detail("⚡️", format!("{speed:.1}"), "km/h"),
            detail("⛰", format_number(elevation_gain), "m"),
        ),
    };

    ListEntry {
        id: w.id().to_string(),
        kind: w.kind(),
        title: w.description().to_string(),
        details: [
            detail(kind_icon, format_number(w.distance()), "km"),
            detail("⏱", format_number(w.duration()), "min"),
            metric,
            extra,
        ],
    }
}

pub fn marker(w: &Workout) -> Marker {
    Marker {
        location: w.location(),
        popup: w.description().to_string(),
        class_name: format!("{}-popup", w.kind().as_str()),
        options: PopupOptions::default(),
    }
}

/// Render every workout as text, separated by blank lines.
pub fn render_list<'a>(workouts: impl IntoIterator<Item = &'a Workout>) -> String {
    workouts
        .into_iter()
        .map(|w| list_entry(w).to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn detail(icon: &'static str, value: String, unit: &'static str) -> Detail {
    Detail { icon, value, unit }
}

/// Shortest display form: `5` rather than `5.0`, `2.5` stays `2.5`.
pub fn format_number(v: f64) -> String {
    v.to_string()
}
