//! Turning raw sensor packages into workouts.
//!
//! A package is a workout type code plus a flat list of readings. Readings are
//! assigned positionally: action, duration, weight, then the fields specific to
//! the workout type.

use crate::training::{Running, SportsWalking, Swimming, Training, Workout};
use crate::PackageError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// One positional reading of a package
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reading {
    pub name: &'static str,
    /// Zero is rejected, the formulas divide by this reading
    pub positive: bool,
}

impl Reading {
    const fn new(name: &'static str, positive: bool) -> Self {
        Self { name, positive }
    }
}

const ACTION: Reading = Reading::new("action", false);
const DURATION: Reading = Reading::new("duration", true);
const WEIGHT: Reading = Reading::new("weight", false);
const HEIGHT: Reading = Reading::new("height", true);
const COUNT_POOL: Reading = Reading::new("count_pool", false);
const LENGTH_POOL: Reading = Reading::new("length_pool", false);

/// Supported workout type codes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkoutType {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 3] = [
        WorkoutType::Swimming,
        WorkoutType::Running,
        WorkoutType::SportsWalking,
    ];

    /// Short code used in sensor packages
    pub fn code(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "SWM",
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
        }
    }

    /// Readings in package order
    pub fn fields(self) -> &'static [Reading] {
        match self {
            WorkoutType::Swimming => &[ACTION, DURATION, WEIGHT, COUNT_POOL, LENGTH_POOL],
            WorkoutType::Running => &[ACTION, DURATION, WEIGHT],
            WorkoutType::SportsWalking => &[ACTION, DURATION, WEIGHT, HEIGHT],
        }
    }

    /// Number of readings the workout takes
    pub fn arity(self) -> usize {
        self.fields().len()
    }

    pub fn name(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "Swimming",
            WorkoutType::Running => "Running",
            WorkoutType::SportsWalking => "SportsWalking",
        }
    }

    /// Comma separated list of every supported code
    pub fn allowed_codes() -> String {
        Self::ALL
            .iter()
            .map(|t| t.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkoutType {
    type Err = PackageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| PackageError::UnsupportedType {
                tag: s.to_string(),
                allowed: Self::allowed_codes(),
            })
    }
}

/// A raw package as received from the sensors
#[derive(Clone, Debug, PartialEq)]
pub struct Package {
    pub workout_type: String,
    pub data: Value,
}

/// Lenient conversion of one entry of a packages file
///
/// A missing `data` becomes null and a non-string `workout_type` keeps its
/// JSON text, so a malformed entry is rejected by [`read_package`] on its own
/// instead of failing the whole file. An entry that is not an object has no
/// type code and is used as the data.
impl From<Value> for Package {
    fn from(entry: Value) -> Self {
        match entry {
            Value::Object(mut fields) => {
                let workout_type = match fields.remove("workout_type") {
                    Some(Value::String(code)) => code,
                    Some(other) => other.to_string(),
                    None => String::new(),
                };
                let data = fields.remove("data").unwrap_or(Value::Null);
                Self { workout_type, data }
            }
            other => Self {
                workout_type: String::new(),
                data: other,
            },
        }
    }
}

impl<'de> Deserialize<'de> for Package {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Package::from)
    }
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Value) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    pub fn read(&self) -> Result<Workout, PackageError> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Build a workout from a type code and raw package data
///
/// Checks run in this order: data is a list, the code is known, the list has
/// the right length, no value is null, every value is a number in range.
pub fn read_package(workout_type: &str, data: &Value) -> Result<Workout, PackageError> {
    let values = data.as_array().ok_or(PackageError::NotASequence {
        found: json_kind(data),
    })?;

    let kind: WorkoutType = workout_type.parse()?;
    check_arity(kind, values.len())?;

    if let Some(index) = values.iter().position(Value::is_null) {
        return Err(PackageError::MissingValue {
            index,
            field: kind.fields()[index].name,
        });
    }

    let numbers = values
        .iter()
        .enumerate()
        .map(|(index, value)| number_at(kind, index, value))
        .collect::<Result<Vec<_>, _>>()?;

    Workout::from_values(kind, &numbers)
}

impl Workout {
    /// Build a workout from already numeric readings
    pub fn from_values(kind: WorkoutType, values: &[f64]) -> Result<Self, PackageError> {
        check_arity(kind, values.len())?;
        for (reading, &value) in kind.fields().iter().zip(values) {
            check_range(reading, value)?;
        }

        let workout = match (kind, values) {
            (WorkoutType::Running, &[action, duration, weight]) => {
                Workout::Running(Running::new(action, duration, weight))
            }
            (WorkoutType::SportsWalking, &[action, duration, weight, height]) => {
                Workout::SportsWalking(SportsWalking::new(action, duration, weight, height))
            }
            (WorkoutType::Swimming, &[action, duration, weight, count_pool, length_pool]) => {
                Workout::Swimming(Swimming::new(
                    action,
                    duration,
                    weight,
                    count_pool,
                    length_pool,
                ))
            }
            _ => return Err(arity_error(kind, values.len())),
        };

        check_metrics(&workout)?;

        tracing::debug!("Built {} from {:?}", kind.name(), values);
        Ok(workout)
    }
}

fn check_arity(kind: WorkoutType, actual: usize) -> Result<(), PackageError> {
    if actual != kind.arity() {
        return Err(arity_error(kind, actual));
    }
    Ok(())
}

fn arity_error(kind: WorkoutType, actual: usize) -> PackageError {
    PackageError::Arity {
        workout: kind.name(),
        expected: kind.arity(),
        actual,
    }
}

fn number_at(kind: WorkoutType, index: usize, value: &Value) -> Result<f64, PackageError> {
    let field = kind.fields()[index].name;
    match value {
        Value::Number(n) => n.as_f64().ok_or(PackageError::NotANumber { index, field }),
        _ => Err(PackageError::NotANumber { index, field }),
    }
}

fn check_range(reading: &Reading, value: f64) -> Result<(), PackageError> {
    let reason = if !value.is_finite() {
        "must be finite"
    } else if value < 0.0 {
        "must not be negative"
    } else if reading.positive && value == 0.0 {
        "must be positive"
    } else {
        return Ok(());
    };

    Err(PackageError::InvalidValue {
        field: reading.name,
        value,
        reason,
    })
}

/// Readings in range can still overflow the formulas
fn check_metrics(workout: &Workout) -> Result<(), PackageError> {
    let metrics = [
        ("distance", workout.distance()),
        ("speed", workout.mean_speed()),
        ("calories", workout.spent_calories()),
    ];

    match metrics.into_iter().find(|(_, value)| !value.is_finite()) {
        Some((field, value)) => Err(PackageError::InvalidValue {
            field,
            value,
            reason: "result is not finite",
        }),
        None => Ok(()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
