//! Unit tests for sensor package decoding.

use fittrack::workouts::{read_package, SensorPackage, Workout, WorkoutError, WorkoutKind};

#[test]
fn test_each_code_builds_its_kind() {
    let cases = [
        ("RUN", vec![15000.0, 1.0, 75.0], WorkoutKind::Running),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0], WorkoutKind::SportsWalking),
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0], WorkoutKind::Swimming),
    ];

    for (code, data, kind) in cases {
        let workout = read_package(code, &data).unwrap();
        assert_eq!(workout.kind(), kind, "code {}", code);
    }
}

#[test]
fn test_unknown_code_carries_code() {
    match read_package("XYZ", &[15000.0, 1.0, 75.0]) {
        Err(WorkoutError::UnknownWorkoutType(code)) => assert_eq!(code, "XYZ"),
        other => panic!("Expected unknown workout type, got {:?}", other),
    }
}

#[test]
fn test_unknown_code_wins_over_arity() {
    // No kind is resolved, so the count is never checked
    let err = read_package("", &[]).unwrap_err();
    assert_eq!(err, WorkoutError::UnknownWorkoutType(String::new()));
}

#[test]
fn test_too_many_readings_are_rejected() {
    let err = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap_err();
    assert_eq!(
        err,
        WorkoutError::ParameterCount {
            kind: WorkoutKind::Running,
            expected: 3,
            actual: 4,
        }
    );
}

#[test]
fn test_weight_and_duration_are_not_range_checked() {
    let workout = read_package("RUN", &[15000.0, -1.0, -75.0]).unwrap();
    assert!(matches!(workout, Workout::Running(_)));
    assert!(workout.mean_speed() < 0.0);
}

#[test]
fn test_sensor_package_read() {
    let package = SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]);
    let workout = package.read().unwrap();
    assert_eq!(workout.kind(), WorkoutKind::SportsWalking);
}
