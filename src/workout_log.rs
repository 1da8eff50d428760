use chrono::{Local, NaiveDate};
use log::{debug, info, warn};

use crate::draft::{DraftUpdate, DraftWorkout, FormError};
use crate::models::{seed_workouts, Workout};

/// Placeholder shown on the "This Week" card; not derived from the records.
pub const THIS_WEEK_LABEL: &str = "5 workouts";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// In-memory workout list plus the add-workout form state.
pub struct WorkoutLog {
    workouts: Vec<Workout>,
    draft: DraftWorkout,
    modal: ModalState,
    next_id: u64,
    today: fn() -> NaiveDate,
}

impl WorkoutLog {
    pub fn new() -> Self {
        Self::with_clock(local_today)
    }

    pub fn with_clock(today: fn() -> NaiveDate) -> Self {
        let workouts = seed_workouts();
        let next_id = workouts.len() as u64 + 1;
        WorkoutLog {
            workouts,
            draft: DraftWorkout::new(today()),
            modal: ModalState::Closed,
            next_id,
            today,
        }
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn draft(&self) -> &DraftWorkout {
        &self.draft
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal() == ModalState::Open
    }

    pub fn total_workouts(&self) -> usize {
        self.workouts.len()
    }

    pub fn this_week_label(&self) -> &'static str {
        THIS_WEEK_LABEL
    }

    pub fn total_calories(&self) -> i64 {
        self.workouts.iter().map(|w| w.calories).sum()
    }

    pub fn open_modal(&mut self) {
        debug!("add-workout modal opened");
        self.modal = ModalState::Open;
    }

    /// Cancel. The draft is kept as-is, so reopening shows the earlier input.
    pub fn close_modal(&mut self) {
        debug!("add-workout modal closed");
        self.modal = ModalState::Closed;
    }

    pub fn update_draft(&mut self, update: DraftUpdate) {
        self.draft.apply(update);
    }

    /// Prepends a record built from the draft, closes the modal and resets
    /// the draft. On error nothing changes.
    pub fn submit(&mut self) -> Result<&Workout, FormError> {
        if self.modal != ModalState::Open {
            return Err(FormError::ModalClosed);
        }
        let checked = self.draft.check_required().map_err(|e| {
            warn!("workout rejected: {}", e);
            e
        })?;

        let workout = Workout {
            id: self.next_id,
            date: checked.date,
            workout_type: checked.workout_type,
            duration: checked.duration,
            calories: checked.calories,
        };
        self.next_id += 1;
        info!(
            "workout {} added: {} {} min {} kcal",
            workout.id, workout.workout_type, workout.duration, workout.calories
        );

        self.workouts.insert(0, workout);
        self.modal = ModalState::Closed;
        self.draft = DraftWorkout::new((self.today)());
        Ok(&self.workouts[0])
    }
}

impl Default for WorkoutLog {
    fn default() -> Self {
        Self::new()
    }
}
