//! Workout summary record.

use serde::Serialize;
use std::fmt;

/// Computed metrics of a single workout
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InfoMessage {
    training_type: String,
    duration: f64,
    distance: f64,
    speed: f64,
    calories: f64,
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    pub fn training_type(&self) -> &str {
        &self.training_type
    }

    /// Duration in hours
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Distance in kilometres
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Mean speed in km/h
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Spent energy in kcal
    pub fn calories(&self) -> f64 {
        self.calories
    }

    /// Render the summary line, every number with three decimals
    pub fn render(&self) -> String {
        format!(
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_format() {
        let info = InfoMessage::new("Swimming", 1.0, 0.9936, 0.9936, 158.976);
        assert_eq!(
            info.render(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 0.994 км/ч; Потрачено ккал: 158.976."
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let info = InfoMessage::new("Running", 1.5, 9.75, 6.5, 512.25);
        assert_eq!(info.render(), info.render());
        assert_eq!(info.to_string(), info.render());
    }

    #[test]
    fn test_render_zero_values() {
        let info = InfoMessage::new("SportsWalking", 0.0, 0.0, 0.0, 0.0);
        assert!(info.render().contains("Дистанция: 0.000 км"));
    }
}
