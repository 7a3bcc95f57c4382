//! Processing a batch of sensor packages.
//!
//! Each package is handled on its own: a rejected package produces an error
//! line and the next package is processed as usual.

use crate::package::Package;
use crate::{ErrorCategory, InfoMessage, PackageError, Result, Training};
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::json;
use std::io::Write;

/// Built-in sample packages, used when no input file is given
static SAMPLE_PACKAGES: Lazy<Vec<Package>> = Lazy::new(|| {
    vec![
        Package::new("SWM", json!([720, 1, 80, 25, 40])),
        Package::new("RUN", json!([15000, 1, 75])),
        Package::new("WLK", json!([9000, 1, 75, 180])),
    ]
});

pub fn sample_packages() -> &'static [Package] {
    &SAMPLE_PACKAGES
}

/// Result of processing one package
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Summary(InfoMessage),
    Failure {
        category: ErrorCategory,
        detail: String,
    },
}

impl Outcome {
    /// Line shown to the user for this package
    pub fn line(&self) -> String {
        match self {
            Outcome::Summary(info) => info.render(),
            Outcome::Failure { category, .. } => category.user_message().to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Summary(_))
    }
}

impl From<PackageError> for Outcome {
    fn from(e: PackageError) -> Self {
        Outcome::Failure {
            category: e.category(),
            detail: e.to_string(),
        }
    }
}

/// Process a single package, never failing
pub fn process_one(package: &Package) -> Outcome {
    match package.read() {
        Ok(workout) => Outcome::Summary(workout.show_training_info()),
        Err(e) => {
            tracing::warn!(
                "Rejected {} package {}: {}",
                package.workout_type,
                package.data,
                e
            );
            Outcome::from(e)
        }
    }
}

/// Process packages in order
pub fn process(packages: &[Package]) -> Vec<Outcome> {
    tracing::info!("Processing {} packages", packages.len());
    packages.iter().map(process_one).collect()
}

/// Process packages and write one line per package
///
/// Returns the number of packages that were rejected.
pub fn run<W: Write>(packages: &[Package], out: &mut W) -> Result<usize> {
    let mut failed = 0;
    for outcome in process(packages) {
        if !outcome.is_success() {
            failed += 1;
        }
        writeln!(out, "{}", outcome.line())?;
    }
    Ok(failed)
}

/// Read packages from a JSON file holding a list of packages
pub fn load_packages(path: &std::path::Path) -> Result<Vec<Package>> {
    let contents = std::fs::read_to_string(path)?;
    let packages: Vec<Package> = serde_json::from_str(&contents)?;
    tracing::info!("Loaded {} packages from {:?}", packages.len(), path);
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_packages_all_succeed() {
        crate::logging::init_test();
        let outcomes = process(sample_packages());

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(Outcome::is_success));
        assert_eq!(
            outcomes[0].line(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 0.994 км/ч; Потрачено ккал: 158.976."
        );
        assert_eq!(
            outcomes[1].line(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
        );
        assert_eq!(
            outcomes[2].line(),
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
             Ср. скорость: 5.850 км/ч; Потрачено ккал: 348.945."
        );
    }

    #[test]
    fn test_errors_are_isolated_per_package() {
        crate::logging::init_test();
        let packages = vec![
            Package::new("BIKE", json!([1, 1, 1])),
            Package::new("RUN", json!([15000, 1])),
            Package::new("WLK", json!("9000, 1, 75, 180")),
            Package::new("SWM", json!([720, 1, null, 25, 40])),
            Package::new("RUN", json!([15000, 0, 75])),
            Package::new("RUN", json!([15000, 1, 75])),
        ];

        let outcomes = process(&packages);
        let lines: Vec<_> = outcomes.iter().map(Outcome::line).collect();

        assert_eq!(lines[0], "Неизвестный тип тренировки");
        assert_eq!(lines[1], "Передано неверное количество аргументов");
        assert_eq!(lines[2], "Ожидается список числовых данных");
        assert_eq!(lines[3], "Передано пустое значение");
        assert_eq!(lines[4], "Не удалось обработать тренировку");
        assert!(lines[5].starts_with("Тип тренировки: Running;"));
    }

    #[test]
    fn test_failure_keeps_detail() {
        let outcome = process_one(&Package::new("XYZ", json!([1])));
        match outcome {
            Outcome::Failure { category, detail } => {
                assert_eq!(category, ErrorCategory::UnsupportedType);
                assert!(detail.contains("XYZ"));
            }
            Outcome::Summary(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_run_writes_one_line_per_package() {
        let mut packages = sample_packages().to_vec();
        packages.push(Package::new("RUN", json!([1, 2, 3, 4])));

        let mut out = Vec::new();
        let failed = run(&packages, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(failed, 1);
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_load_packages_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"workout_type": "RUN", "data": [15000, 1, 75]}},
                {{"workout_type": "SWM", "data": null}}]"#
        )
        .unwrap();

        let packages = load_packages(file.path()).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[1].data, serde_json::Value::Null);

        let outcomes = process(&packages);
        assert!(outcomes[0].is_success());
        assert!(!outcomes[1].is_success());
    }

    #[test]
    fn test_malformed_entries_do_not_stop_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"workout_type": "RUN", "data": [15000, 1, 75]}},
                {{"workout_type": "SWM"}},
                {{"workout_type": 7, "data": [1, 1, 1]}},
                42,
                {{"workout_type": "WLK", "data": [9000, 1, 75, 180]}}]"#
        )
        .unwrap();

        let packages = load_packages(file.path()).unwrap();
        let lines: Vec<_> = process(&packages).iter().map(Outcome::line).collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Тип тренировки: Running;"));
        assert_eq!(lines[1], "Ожидается список числовых данных");
        assert_eq!(lines[2], "Неизвестный тип тренировки");
        assert_eq!(lines[3], "Ожидается список числовых данных");
        assert!(lines[4].starts_with("Тип тренировки: SportsWalking;"));
    }

    #[test]
    fn test_non_finite_results_are_reported() {
        let outcomes = process(&[
            Package::new("WLK", json!([0, 1, 75, 0])),
            Package::new("WLK", json!([9000, 1, 75, 0])),
            Package::new("RUN", json!([1e308, 1e-300, 75])),
        ]);

        for outcome in outcomes {
            assert_eq!(outcome.line(), "Не удалось обработать тренировку");
        }
    }

    #[test]
    fn test_load_packages_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            load_packages(file.path()),
            Err(crate::Error::Json(_))
        ));
    }
}
