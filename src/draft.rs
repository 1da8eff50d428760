use chrono::NaiveDate;
use thiserror::Error;

use crate::models::WorkoutType;

/// Text-backed integer field. Whatever the user types is kept; a value
/// that does not parse, or does not fit in an `i32`, reads back as `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumericInput {
    raw: String,
}

impl NumericInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> Option<i64> {
        self.raw.trim().parse::<i32>().ok().map(i64::from)
    }
}

impl Default for NumericInput {
    fn default() -> Self {
        Self::new("0")
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please select a workout type.")]
    MissingType,
    #[error("Duration must be a whole number of minutes.")]
    InvalidDuration,
    #[error("Calories must be a whole number.")]
    InvalidCalories,
    #[error("the add-workout form is not open")]
    ModalClosed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DraftUpdate {
    Date(NaiveDate),
    Type(Option<WorkoutType>),
    Duration(String),
    Calories(String),
}

/// Fields validated and ready to become a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckedDraft {
    pub date: NaiveDate,
    pub workout_type: WorkoutType,
    pub duration: i64,
    pub calories: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DraftWorkout {
    pub date: NaiveDate,
    pub workout_type: Option<WorkoutType>,
    pub duration: NumericInput,
    pub calories: NumericInput,
}

impl DraftWorkout {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            workout_type: None,
            duration: NumericInput::default(),
            calories: NumericInput::default(),
        }
    }

    pub fn apply(&mut self, update: DraftUpdate) {
        match update {
            DraftUpdate::Date(date) => self.date = date,
            DraftUpdate::Type(workout_type) => self.workout_type = workout_type,
            DraftUpdate::Duration(raw) => self.duration = NumericInput::new(raw),
            DraftUpdate::Calories(raw) => self.calories = NumericInput::new(raw),
        }
    }

    /// Presence check only. Range hints (duration >= 1, calories >= 0)
    /// are left to the form widgets.
    pub fn check_required(&self) -> Result<CheckedDraft, FormError> {
        let workout_type = self.workout_type.ok_or(FormError::MissingType)?;
        let duration = self.duration.value().ok_or(FormError::InvalidDuration)?;
        let calories = self.calories.value().ok_or(FormError::InvalidCalories)?;
        Ok(CheckedDraft {
            date: self.date,
            workout_type,
            duration,
            calories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
    }

    #[test]
    fn numeric_input_keeps_garbage_text() {
        let input = NumericInput::new("12a");
        assert_eq!(input.raw(), "12a");
        assert_eq!(input.value(), None);
        assert_eq!(NumericInput::new(" 45 ").value(), Some(45));
        assert_eq!(NumericInput::new("").value(), None);
        assert_eq!(NumericInput::default().value(), Some(0));
    }

    #[test]
    fn numeric_input_rejects_values_outside_i32() {
        assert_eq!(NumericInput::new("9223372036854775807").value(), None);
        assert_eq!(NumericInput::new("2147483648").value(), None);
        assert_eq!(NumericInput::new("2147483647").value(), Some(i32::MAX as i64));
        assert_eq!(NumericInput::new("-2147483648").value(), Some(i32::MIN as i64));
    }

    #[test]
    fn apply_replaces_only_the_named_field() {
        let mut draft = DraftWorkout::new(day());
        draft.apply(DraftUpdate::Type(Some(WorkoutType::Yoga)));
        draft.apply(DraftUpdate::Duration("60".into()));

        assert_eq!(draft.date, day());
        assert_eq!(draft.workout_type, Some(WorkoutType::Yoga));
        assert_eq!(draft.duration.value(), Some(60));
        assert_eq!(draft.calories.raw(), "0");
    }

    #[test]
    fn check_required_reports_first_missing_field() {
        let mut draft = DraftWorkout::new(day());
        assert_eq!(draft.check_required(), Err(FormError::MissingType));

        draft.apply(DraftUpdate::Type(Some(WorkoutType::Cycling)));
        draft.apply(DraftUpdate::Duration("abc".into()));
        assert_eq!(draft.check_required(), Err(FormError::InvalidDuration));

        draft.apply(DraftUpdate::Duration("20".into()));
        draft.apply(DraftUpdate::Calories("".into()));
        assert_eq!(draft.check_required(), Err(FormError::InvalidCalories));
    }

    #[test]
    fn range_hints_are_not_enforced() {
        let mut draft = DraftWorkout::new(day());
        draft.apply(DraftUpdate::Type(Some(WorkoutType::Running)));
        draft.apply(DraftUpdate::Duration("-5".into()));
        draft.apply(DraftUpdate::Calories("-1".into()));

        let checked = draft.check_required().unwrap();
        assert_eq!(checked.duration, -5);
        assert_eq!(checked.calories, -1);
    }
}
