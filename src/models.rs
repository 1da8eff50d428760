//models.rs
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum WorkoutType {
    Running,
    WeightTraining,
    Cycling,
    Swimming,
    Yoga,
}

impl WorkoutType {
    /// Selector order.
    pub const ALL: [WorkoutType; 5] = [
        WorkoutType::Running,
        WorkoutType::WeightTraining,
        WorkoutType::Cycling,
        WorkoutType::Swimming,
        WorkoutType::Yoga,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::WeightTraining => "Weight Training",
            WorkoutType::Cycling => "Cycling",
            WorkoutType::Swimming => "Swimming",
            WorkoutType::Yoga => "Yoga",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown workout type: {0}")]
pub struct ParseWorkoutTypeError(pub String);

impl FromStr for WorkoutType {
    type Err = ParseWorkoutTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| ParseWorkoutTypeError(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Workout {
    pub id: u64,
    pub date: NaiveDate,
    pub workout_type: WorkoutType,
    /// Minutes.
    pub duration: i64,
    pub calories: i64,
}

impl Workout {
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Records shown before anything is logged, newest first.
pub fn seed_workouts() -> Vec<Workout> {
    vec![
        Workout {
            id: 1,
            date: NaiveDate::from_ymd_opt(2024, 3, 10).expect("valid seed date"),
            workout_type: WorkoutType::Running,
            duration: 30,
            calories: 300,
        },
        Workout {
            id: 2,
            date: NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid seed date"),
            workout_type: WorkoutType::WeightTraining,
            duration: 45,
            calories: 200,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back_to_their_type() {
        for t in WorkoutType::ALL {
            assert_eq!(t.label().parse::<WorkoutType>(), Ok(t));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "Rowing".parse::<WorkoutType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown workout type: Rowing");
        assert!("".parse::<WorkoutType>().is_err());
    }

    #[test]
    fn seed_is_newest_first() {
        let seed = seed_workouts();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].id, 1);
        assert_eq!(seed[0].date_label(), "2024-03-10");
        assert_eq!(seed[0].workout_type, WorkoutType::Running);
        assert_eq!(seed[1].date_label(), "2024-03-09");
        assert_eq!(seed[1].workout_type.to_string(), "Weight Training");
        assert_eq!(seed.iter().map(|w| w.calories).sum::<i64>(), 500);
    }
}
