//! Training formulas for each workout kind.
//!
//! Every kind shares the step-based distance and the distance-over-time
//! mean speed. Calorie expenditure has no common formula, so each kind
//! supplies its own.

use crate::report::InfoMessage;
use crate::workouts::types::WorkoutKind;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;
/// Step length in meters for running and walking.
pub const LEN_STEP: f64 = 0.65;
/// Stroke length in meters for swimming.
pub const LEN_STROKE: f64 = 1.38;

/// Floored quotient computed from the remainder, so `floor_div(1.0, 0.1)` is
/// 9 even though `1.0 / 0.1` rounds to exactly 10.
pub fn floor_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return a / b;
    }

    // f64 `%` is C fmod
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }

    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

/// Common behaviour of a finished training session.
pub trait Training {
    /// Meters covered per action (step or stroke).
    const LEN_STEP: f64 = LEN_STEP;

    /// Which kind of workout this is.
    fn kind(&self) -> WorkoutKind;

    /// Number of actions (steps or strokes).
    fn action(&self) -> u32;

    /// Duration in hours.
    fn duration(&self) -> f64;

    /// Athlete weight in kilograms.
    fn weight(&self) -> f64;

    /// Distance covered in kilometers.
    fn distance(&self) -> f64 {
        self.action() as f64 * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.duration()
    }

    /// Calories burned in kcal.
    fn spent_calories(&self) -> f64;

    /// Summarise the session as a report record.
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.kind().label(),
            self.duration(),
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

/// Running session.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    action: u32,
    duration: f64,
    weight: f64,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed() - Self::CALORIES_SPEED_SHIFT)
            * self.weight
            / M_IN_KM
            * self.duration
            * MIN_IN_H
    }
}

/// Sports walking session.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    action: u32,
    duration: f64,
    weight: f64,
    /// Height in centimeters
    height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            height,
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn spent_calories(&self) -> f64 {
        // Only the speed^2 / height term is floored.
        let speed_height_ratio = floor_div(self.mean_speed().powi(2), self.height);
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.weight
            + speed_height_ratio * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.weight)
            * self.duration
            * MIN_IN_H
    }
}

/// Pool swimming session.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    action: u32,
    duration: f64,
    weight: f64,
    /// Pool length in meters
    length_pool: f64,
    /// Laps swum
    count_pool: f64,
}

impl Swimming {
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(action: u32, duration: f64, weight: f64, length_pool: f64, count_pool: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            length_pool,
            count_pool,
        }
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> f64 {
        self.count_pool
    }
}

impl Training for Swimming {
    const LEN_STEP: f64 = LEN_STROKE;

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.weight
    }
}

/// A workout of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(w) => w.kind(),
            Workout::SportsWalking(w) => w.kind(),
            Workout::Swimming(w) => w.kind(),
        }
    }

    pub fn distance(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance(),
            Workout::SportsWalking(w) => w.distance(),
            Workout::Swimming(w) => w.distance(),
        }
    }

    pub fn mean_speed(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed(),
            Workout::SportsWalking(w) => w.mean_speed(),
            Workout::Swimming(w) => w.mean_speed(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
            Workout::Swimming(w) => w.spent_calories(),
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        match self {
            Workout::Running(w) => w.show_training_info(),
            Workout::SportsWalking(w) => w.show_training_info(),
            Workout::Swimming(w) => w.show_training_info(),
        }
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}
