//! Integration tests for the full package-to-report run.

use fittrack::config::{load_config_from, save_config_to, AppConfig};
use fittrack::report::{Locale, ReportFormat};
use fittrack::{run, sample_packages, RunError, SensorPackage, WorkoutError};
use tempfile::TempDir;

const EXPECTED_REPORT: &str = "\
Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.
Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.
Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.
";

fn report(config: &AppConfig, packages: &[SensorPackage]) -> Result<String, RunError> {
    let mut out = Vec::new();
    run(config, packages, &mut out)?;
    Ok(String::from_utf8(out).expect("report is UTF-8"))
}

#[test]
fn test_sample_packages_match_reference_report() {
    let output = report(&AppConfig::default(), &sample_packages()).unwrap();
    assert_eq!(output, EXPECTED_REPORT);
}

#[test]
fn test_sample_packages_are_fixed() {
    let packages = sample_packages();
    let codes: Vec<&str> = packages.iter().map(|p| p.code.as_str()).collect();
    assert_eq!(codes, vec!["SWM", "RUN", "WLK"]);
    assert_eq!(packages[0].data, vec![720.0, 1.0, 80.0, 25.0, 40.0]);
    assert_eq!(packages[1].data, vec![15000.0, 1.0, 75.0]);
    assert_eq!(packages[2].data, vec![9000.0, 1.0, 75.0, 180.0]);
}

#[test]
fn test_run_is_repeatable() {
    let config = AppConfig::default();
    let first = report(&config, &sample_packages()).unwrap();
    let second = report(&config, &sample_packages()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_english_config_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.report.locale = Locale::En;
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    let output = report(&loaded, &sample_packages()).unwrap();
    assert_eq!(
        output.lines().nth(1),
        Some(
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Mean speed: 9.750 km/h; Calories burned: 699.750."
        )
    );
}

#[test]
fn test_json_lines_carry_raw_values() {
    let mut config = AppConfig::default();
    config.report.format = ReportFormat::Json;

    let output = report(&config, &sample_packages()).unwrap();
    let swim: serde_json::Value = serde_json::from_str(output.lines().next().unwrap()).unwrap();
    assert_eq!(swim["training_type"], "Swimming");
    let distance = swim["distance"].as_f64().unwrap();
    assert!((distance - 0.9936).abs() < 1e-9);
}

#[test]
fn test_bad_package_surfaces_error() {
    let packages = vec![SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0])];
    let err = report(&AppConfig::default(), &packages).unwrap_err();
    assert!(matches!(
        err,
        RunError::Workout(WorkoutError::ParameterCount {
            expected: 4,
            actual: 3,
            ..
        })
    ));
}
