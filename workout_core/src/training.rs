//! Metric formulas for each workout type.
//!
//! Every workout implements [`Training`]:
//! - `distance` from the action count and the stride length
//! - `mean_speed`, defaulting to distance over duration
//! - `spent_calories`, specific to each workout

use crate::InfoMessage;

/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;
/// Stride length for running and walking, metres
pub const LEN_STEP: f64 = 0.65;

/// Readings shared by every workout
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingBase {
    /// Steps or strokes
    pub action: f64,
    /// Hours
    pub duration: f64,
    /// Kilograms
    pub weight: f64,
}

/// Capabilities of a workout
pub trait Training {
    fn base(&self) -> &TrainingBase;

    /// Name shown in the summary
    fn training_type(&self) -> &'static str;

    /// Distance covered by one action, metres
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km
    fn distance(&self) -> f64 {
        self.base().action * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration
    }

    /// Spent energy in kcal
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.training_type(),
            self.base().duration,
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

/// Running
#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    pub base: TrainingBase,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            base: TrainingBase {
                action,
                duration,
                weight,
            },
        }
    }
}

impl Training for Running {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight
            / M_IN_KM
            * self.base.duration
            * MIN_IN_H
    }
}

/// Sports walking
#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    pub base: TrainingBase,
    /// Centimetres
    pub height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const KMH_IN_MSEC: f64 = 3.6;
    const CM_IN_M: f64 = 100.0;

    pub fn new(action: f64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            base: TrainingBase {
                action,
                duration,
                weight,
            },
            height,
        }
    }
}

impl Training for SportsWalking {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn spent_calories(&self) -> f64 {
        let speed_m_s = self.mean_speed() / Self::KMH_IN_MSEC;
        let height_m = self.height / Self::CM_IN_M;

        (Self::CALORIES_WEIGHT_MULTIPLIER * self.base.weight
            + speed_m_s.powi(2) / height_m
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.base.weight)
            * self.base.duration
            * MIN_IN_H
    }
}

/// Swimming
///
/// `count_pool` and `length_pool` are recorded but no formula reads them yet.
#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    pub base: TrainingBase,
    /// Laps swum
    pub count_pool: f64,
    /// Pool length, metres
    pub length_pool: f64,
}

impl Swimming {
    const LEN_STEP: f64 = 1.38;
    const CALORIES_SPEED_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: f64,
        duration: f64,
        weight: f64,
        count_pool: f64,
        length_pool: f64,
    ) -> Self {
        Self {
            base: TrainingBase {
                action,
                duration,
                weight,
            },
            count_pool,
            length_pool,
        }
    }
}

impl Training for Swimming {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    fn mean_speed(&self) -> f64 {
        self.distance() / self.base.duration
    }

    fn spent_calories(&self) -> f64 {
        self.mean_speed() * Self::CALORIES_SPEED_MULTIPLIER * self.base.weight
    }
}

/// A constructed workout of any supported type
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn base(&self) -> &TrainingBase {
        self.as_training().base()
    }

    fn training_type(&self) -> &'static str {
        self.as_training().training_type()
    }

    fn len_step(&self) -> f64 {
        self.as_training().len_step()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_running_metrics() {
        let run = Running::new(15000.0, 1.0, 75.0);

        assert_close(run.distance(), 9.75);
        assert_close(run.mean_speed(), 9.75);
        assert_close(
            run.spent_calories(),
            (18.0 * 9.75 + 1.79) * 75.0 / 1000.0 * 1.0 * 60.0,
        );
        assert_eq!(format!("{:.3}", run.spent_calories()), "797.805");
    }

    #[test]
    fn test_walking_metrics() {
        let walk = SportsWalking::new(9000.0, 1.0, 75.0, 180.0);

        assert_close(walk.distance(), 5.85);
        assert_close(walk.mean_speed(), 5.85);

        let speed_m_s: f64 = 5.85 / 3.6;
        let expected = (0.035 * 75.0 + speed_m_s * speed_m_s / 1.8 * 0.029 * 75.0) * 60.0;
        assert_close(walk.spent_calories(), expected);
        assert_eq!(format!("{:.3}", walk.spent_calories()), "348.945");
    }

    #[test]
    fn test_swimming_metrics() {
        let swim = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0);

        assert_close(swim.distance(), 0.9936);
        assert_close(swim.mean_speed(), 0.9936);
        assert_close(swim.spent_calories(), 158.976);
    }

    #[test]
    fn test_mean_speed_is_distance_over_duration() {
        for duration in [0.25, 0.5, 1.0, 1.75, 3.0] {
            let run = Running::new(12000.0, duration, 70.0);
            assert_close(run.mean_speed(), run.distance() / duration);

            let walk = SportsWalking::new(8000.0, duration, 70.0, 175.0);
            assert_close(walk.mean_speed(), walk.distance() / duration);
        }
    }

    #[test]
    fn test_workout_delegates_to_variant() {
        let swim = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0);
        let workout = Workout::Swimming(swim.clone());

        assert_eq!(workout.training_type(), "Swimming");
        assert_close(workout.len_step(), 1.38);
        assert_eq!(workout.show_training_info(), swim.show_training_info());
    }

    #[test]
    fn test_show_training_info() {
        let info = Running::new(15000.0, 1.0, 75.0).show_training_info();

        assert_eq!(info.training_type(), "Running");
        assert_close(info.duration(), 1.0);
        assert_close(info.distance(), 9.75);
        assert_close(info.speed(), 9.75);
    }
}
