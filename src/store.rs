use crate::dlog;
use crate::error::ValidationError;
use crate::form::FormValues;
use crate::ids::{Clock, IdSource, RandomIds, SystemClock};
use crate::types::{Location, NewWorkout, Workout, WorkoutKind};

/// Workouts logged during one session, in the order they were added.
///
/// Append-only: records are never edited or removed.
#[derive(Debug)]
pub struct WorkoutStore<I = RandomIds, C = SystemClock> {
    workouts: Vec<Workout>,
    ids: I,
    clock: C,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::with_sources(RandomIds, SystemClock)
    }
}

impl Default for WorkoutStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource, C: Clock> WorkoutStore<I, C> {
    pub const fn with_sources(ids: I, clock: C) -> Self {
        Self {
            workouts: Vec::new(),
            ids,
            clock,
        }
    }

    /// Create a workout from a form submission at `location` and append it.
    ///
    /// On error the store is left as it was.
    pub fn add_workout(
        &mut self,
        kind: WorkoutKind,
        form: &FormValues,
        location: Location,
    ) -> Result<&Workout, ValidationError> {
        let (distance, duration, extra) = form.required(kind)?;
        let new = NewWorkout {
            kind,
            distance,
            duration,
            location,
            extra,
        };
        let workout = Workout::create(new, &mut self.ids, &self.clock)?;

        if let Some(elevation) = workout.elevation_gain()
            && elevation < 0.0
        {
            dlog!("negative elevation gain accepted id={} elevation={elevation}", workout.id());
        }
        tracing::info!(
            id = %workout.id(),
            kind = %kind,
            distance = workout.distance(),
            duration = workout.duration(),
            "workout added"
        );

        self.workouts.push(workout);
        Ok(&self.workouts[self.workouts.len() - 1])
    }

    pub fn list(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Workout> {
        self.workouts.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

impl<'a, I, C> IntoIterator for &'a WorkoutStore<I, C> {
    type Item = &'a Workout;
    type IntoIter = std::slice::Iter<'a, Workout>;

    fn into_iter(self) -> Self::IntoIter {
        self.workouts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;
    use crate::ids::{FixedClock, SequentialIds};
    use chrono::{Local, TimeZone};
    use std::collections::HashSet;

    const LONDON: Location = Location::new(51.5, -0.1);

    fn store() -> WorkoutStore<SequentialIds, FixedClock> {
        let t = Local.with_ymd_and_hms(2026, 4, 14, 12, 0, 0).unwrap();
        WorkoutStore::with_sources(SequentialIds::default(), FixedClock(t))
    }

    #[test]
    fn running_submission_is_stored() {
        let mut s = store();
        let w = s
            .add_workout(
                WorkoutKind::Running,
                &FormValues::running(5.0, 30.0, 178.0),
                LONDON,
            )
            .unwrap();
        assert!((w.pace().unwrap() - 6.0).abs() < 1e-12);
        assert_eq!(w.description(), "Running on April 14");

        assert_eq!(s.len(), 1);
        assert_eq!(s.list()[0].location().as_pair(), [51.5, -0.1]);
    }

    #[test]
    fn cycling_submission_is_stored() {
        let mut s = store();
        let w = s
            .add_workout(
                WorkoutKind::Cycling,
                &FormValues::cycling(20.0, 60.0, 500.0),
                LONDON,
            )
            .unwrap();
        assert!((w.speed().unwrap() - 20.0).abs() < 1e-12);
        assert_eq!(s.list().len(), 1);
    }

    #[test]
    fn list_keeps_insertion_order() {
        let mut s = store();
        let w1 = s
            .add_workout(WorkoutKind::Running, &FormValues::running(5.0, 30.0, 178.0), LONDON)
            .unwrap()
            .clone();
        let w2 = s
            .add_workout(WorkoutKind::Cycling, &FormValues::cycling(20.0, 60.0, 500.0), LONDON)
            .unwrap()
            .clone();
        let w3 = s
            .add_workout(WorkoutKind::Running, &FormValues::running(10.0, 55.0, 170.0), LONDON)
            .unwrap()
            .clone();

        assert_eq!(s.list(), &[w1, w2, w3]);
    }

    #[test]
    fn invalid_submissions_leave_store_untouched() {
        let mut s = store();
        s.add_workout(WorkoutKind::Running, &FormValues::running(5.0, 30.0, 178.0), LONDON)
            .unwrap();

        let bad = [
            (WorkoutKind::Running, FormValues::running(0.0, 30.0, 178.0)),
            (WorkoutKind::Cycling, FormValues::cycling(10.0, -5.0, 100.0)),
            (WorkoutKind::Running, FormValues::from_raw("5", "30", "quick", "")),
            (WorkoutKind::Running, FormValues::from_raw("5", "30", "", "")),
        ];
        for (kind, form) in &bad {
            assert!(s.add_workout(*kind, form, LONDON).is_err());
        }

        assert_eq!(s.len(), 1);
        assert_eq!(s.list()[0].id(), "w-1");

        let next = s
            .add_workout(WorkoutKind::Cycling, &FormValues::cycling(20.0, 60.0, 0.0), LONDON)
            .unwrap();
        assert_eq!(next.id(), "w-2");
    }

    #[test]
    fn non_numeric_cadence_is_not_finite() {
        let mut s = store();
        let err = s
            .add_workout(
                WorkoutKind::Running,
                &FormValues::from_raw("5", "30", "abc", ""),
                LONDON,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotFinite {
                field: Field::Cadence,
                ..
            }
        ));
        assert!(s.is_empty());
    }

    #[test]
    fn ids_are_unique_and_resolvable() {
        let mut s = WorkoutStore::new();
        for i in 1..=50 {
            let d = f64::from(i);
            s.add_workout(WorkoutKind::Running, &FormValues::running(d, d * 6.0, 170.0), LONDON)
                .unwrap();
        }

        let ids: HashSet<&str> = s.iter().map(Workout::id).collect();
        assert_eq!(ids.len(), 50);

        let third = s.list()[2].id().to_string();
        assert_eq!(s.get(&third).map(Workout::distance), Some(3.0));
        assert!(s.get("missing").is_none());
    }
}
