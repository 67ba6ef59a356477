use crate::error::{Field, ValidationError};
use crate::types::WorkoutKind;

/// Numbers read off the workout form. `None` means the input was left empty.
///
/// Both activity-specific inputs are carried; only the one matching the
/// selected type is read.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FormValues {
    pub distance: Option<f64>,
    pub duration: Option<f64>,
    pub cadence: Option<f64>,
    pub elevation_gain: Option<f64>,
}

impl FormValues {
    pub const fn running(distance: f64, duration: f64, cadence: f64) -> Self {
        Self {
            distance: Some(distance),
            duration: Some(duration),
            cadence: Some(cadence),
            elevation_gain: None,
        }
    }

    pub const fn cycling(distance: f64, duration: f64, elevation_gain: f64) -> Self {
        Self {
            distance: Some(distance),
            duration: Some(duration),
            cadence: None,
            elevation_gain: Some(elevation_gain),
        }
    }

    /// Build from the raw input strings.
    pub fn from_raw(distance: &str, duration: &str, cadence: &str, elevation_gain: &str) -> Self {
        Self {
            distance: parse_number(distance),
            duration: parse_number(duration),
            cadence: parse_number(cadence),
            elevation_gain: parse_number(elevation_gain),
        }
    }

    /// The activity-specific input for `kind` and the field it came from.
    pub const fn metric_for(&self, kind: WorkoutKind) -> (Field, Option<f64>) {
        match kind {
            WorkoutKind::Running => (Field::Cadence, self.cadence),
            WorkoutKind::Cycling => (Field::ElevationGain, self.elevation_gain),
        }
    }

    /// `(distance, duration, metric)` for `kind`, or the first empty field.
    pub fn required(&self, kind: WorkoutKind) -> Result<(f64, f64, f64), ValidationError> {
        let (metric_field, metric) = self.metric_for(kind);
        let distance = require(Field::Distance, self.distance)?;
        let duration = require(Field::Duration, self.duration)?;
        let metric = require(metric_field, metric)?;
        Ok((distance, duration, metric))
    }
}

fn require(field: Field, v: Option<f64>) -> Result<f64, ValidationError> {
    v.ok_or(ValidationError::Missing { field })
}

/// Coerce a form string to a number.
///
/// Blank input is `None`. Text that is not a number becomes NaN, which the
/// finiteness check rejects with the offending field.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    Some(s.parse::<f64>().unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_coerces_like_a_form() {
        assert_eq!(parse_number(" 5.5 "), Some(5.5));
        assert_eq!(parse_number("-5"), Some(-5.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert!(parse_number("fast").is_some_and(f64::is_nan));
    }

    #[test]
    fn metric_follows_the_selected_type() {
        let v = FormValues::from_raw("5", "30", "178", "420");
        assert_eq!(v.metric_for(WorkoutKind::Running), (Field::Cadence, Some(178.0)));
        assert_eq!(
            v.metric_for(WorkoutKind::Cycling),
            (Field::ElevationGain, Some(420.0))
        );
    }

    #[test]
    fn required_reports_first_empty_field() {
        let v = FormValues::from_raw("5", "", "", "");
        assert_eq!(
            v.required(WorkoutKind::Running),
            Err(ValidationError::Missing {
                field: Field::Duration
            })
        );

        let v = FormValues::running(5.0, 30.0, 178.0);
        assert_eq!(
            v.required(WorkoutKind::Cycling),
            Err(ValidationError::Missing {
                field: Field::ElevationGain
            })
        );
        assert_eq!(v.required(WorkoutKind::Running), Ok((5.0, 30.0, 178.0)));
    }
}
