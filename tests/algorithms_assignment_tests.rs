use approx::assert_relative_eq;
use funcmatch_rs::prelude::*;
use std::f64::consts::SQRT_2;

fn single_point_series(x: f64, y: f64) -> SampledSeries<f64> {
    SampledSeries::new(vec![x], vec![y]).unwrap()
}

// ============================================================================
// Basic Assignment Tests
// ============================================================================

#[test]
fn test_observation_within_tolerance_is_assigned() {
    // Candidate sampled at (1, 1), tolerance 1.5 * sqrt(2).
    // Observation (1, 1.2) sits 0.2 away and must be captured.
    let candidate = single_point_series(1.0, 1.0);
    let observations = [ObservationPoint::new(1.0, 1.2)];
    let mut records = AssignmentRecord::table(1);

    assign(&observations, &mut records, &candidate, "f1", 1.5 * SQRT_2).unwrap();

    assert_eq!(records[0].candidate.as_deref(), Some("f1"));
    assert_relative_eq!(records[0].deviation, 0.2);
}

#[test]
fn test_observation_beyond_tolerance_is_untouched() {
    let candidate = single_point_series(0.0, 0.0);
    let observations = [ObservationPoint::new(5.0, 5.0)];
    let mut records = AssignmentRecord::table(1);

    assign(&observations, &mut records, &candidate, "f1", 1.0).unwrap();

    assert!(!records[0].is_assigned());
    assert_relative_eq!(records[0].deviation, 0.0);
}

#[test]
fn test_zero_distance_assigns_even_with_zero_tolerance() {
    // An observation coinciding with a sampled point is always captured,
    // for any tolerance >= 0.
    let candidate = single_point_series(2.0, 3.0);
    let observations = [ObservationPoint::new(2.0, 3.0)];
    let mut records = AssignmentRecord::table(1);

    assign(&observations, &mut records, &candidate, "f1", 0.0).unwrap();

    assert_eq!(records[0].candidate.as_deref(), Some("f1"));
    assert_relative_eq!(records[0].deviation, 0.0);
}

#[test]
fn test_nearest_point_is_found_across_the_whole_frame() {
    // The nearest sample need not share the observation's x value.
    let candidate =
        SampledSeries::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 2.0, 3.0]).unwrap();
    let observations = [ObservationPoint::new(2.9, 3.0)];
    let mut records = AssignmentRecord::table(1);

    assign(&observations, &mut records, &candidate, "f1", 1.0).unwrap();

    // Nearest is (3, 3) at distance 0.1, not the x-matched (2.9, ~2.9) pair.
    assert_eq!(records[0].candidate.as_deref(), Some("f1"));
    assert_relative_eq!(records[0].deviation, 0.1, epsilon = 1e-12);
}

// ============================================================================
// Replacement Semantics Tests
// ============================================================================

#[test]
fn test_closer_candidate_replaces_assignment() {
    let observations = [ObservationPoint::new(0.0, 0.0)];
    let mut records = vec![AssignmentRecord {
        candidate: Some("a".to_string()),
        deviation: 0.5,
    }];

    // New candidate's nearest point is 0.3 away: 0.5 > 0.3, so replace.
    let closer = single_point_series(0.3, 0.0);
    assign(&observations, &mut records, &closer, "b", 2.0).unwrap();

    assert_eq!(records[0].candidate.as_deref(), Some("b"));
    assert_relative_eq!(records[0].deviation, 0.3);
}

#[test]
fn test_farther_candidate_does_not_replace() {
    let observations = [ObservationPoint::new(0.0, 0.0)];
    let mut records = vec![AssignmentRecord {
        candidate: Some("a".to_string()),
        deviation: 0.5,
    }];

    // New candidate's nearest point is 0.6 away: 0.5 > 0.6 is false.
    let farther = single_point_series(0.6, 0.0);
    assign(&observations, &mut records, &farther, "b", 2.0).unwrap();

    assert_eq!(records[0].candidate.as_deref(), Some("a"));
    assert_relative_eq!(records[0].deviation, 0.5);
}

#[test]
fn test_equal_distance_keeps_existing_assignment() {
    // Strictly-greater comparison: a tie leaves the earlier candidate.
    let observations = [ObservationPoint::new(0.0, 0.0)];
    let mut records = vec![AssignmentRecord {
        candidate: Some("a".to_string()),
        deviation: 0.5,
    }];

    let equal = single_point_series(0.5, 0.0);
    assign(&observations, &mut records, &equal, "b", 2.0).unwrap();

    assert_eq!(records[0].candidate.as_deref(), Some("a"));
}

#[test]
fn test_pass_order_decides_equal_distance_ties() {
    // Candidates "a" at (0, 1) and "b" at (0, -1) are equidistant from the
    // observation; whichever pass runs first keeps the assignment.
    let a = single_point_series(0.0, 1.0);
    let b = single_point_series(0.0, -1.0);
    let observations = [ObservationPoint::new(0.0, 0.0)];

    let mut records = AssignmentRecord::table(1);
    assign(&observations, &mut records, &a, "a", 2.0).unwrap();
    assign(&observations, &mut records, &b, "b", 2.0).unwrap();
    assert_eq!(records[0].candidate.as_deref(), Some("a"));

    let mut records = AssignmentRecord::table(1);
    assign(&observations, &mut records, &b, "b", 2.0).unwrap();
    assign(&observations, &mut records, &a, "a", 2.0).unwrap();
    assert_eq!(records[0].candidate.as_deref(), Some("b"));
}

#[test]
fn test_assignment_is_idempotent() {
    let candidate =
        SampledSeries::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap();
    let observations = [
        ObservationPoint::new(0.1, 0.0),
        ObservationPoint::new(1.0, 1.1),
        ObservationPoint::new(9.0, 9.0),
    ];
    let mut records = AssignmentRecord::table(3);

    assign(&observations, &mut records, &candidate, "f1", 1.0).unwrap();
    let after_first = records.clone();
    assign(&observations, &mut records, &candidate, "f1", 1.0).unwrap();

    assert_eq!(records, after_first);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_rejects_empty_frame() {
    let empty = SampledSeries::new(vec![], vec![]).unwrap();
    let observations = [ObservationPoint::new(0.0, 0.0)];
    let mut records = AssignmentRecord::table(1);

    let err = assign(&observations, &mut records, &empty, "f1", 1.0).unwrap_err();
    assert_eq!(err, MatchError::EmptyFrame);
    assert!(!records[0].is_assigned());
}

#[test]
fn test_rejects_negative_tolerance() {
    let candidate = single_point_series(0.0, 0.0);
    let observations = [ObservationPoint::new(0.0, 0.0)];
    let mut records = AssignmentRecord::table(1);

    let err = assign(&observations, &mut records, &candidate, "f1", -1.0).unwrap_err();
    assert_eq!(err, MatchError::InvalidTolerance(-1.0));
}

#[test]
fn test_rejects_non_finite_tolerance() {
    let candidate = single_point_series(0.0, 0.0);
    let observations = [ObservationPoint::new(0.0, 0.0)];
    let mut records = AssignmentRecord::table(1);

    let err = assign(&observations, &mut records, &candidate, "f1", f64::NAN).unwrap_err();
    assert!(matches!(err, MatchError::InvalidTolerance(t) if t.is_nan()));
}

#[test]
fn test_rejects_misaligned_record_table() {
    let candidate = single_point_series(0.0, 0.0);
    let observations = [
        ObservationPoint::new(0.0, 0.0),
        ObservationPoint::new(1.0, 1.0),
    ];
    let mut records = AssignmentRecord::table(1);

    let err = assign(&observations, &mut records, &candidate, "f1", 1.0).unwrap_err();
    assert_eq!(
        err,
        MatchError::MismatchedRecords {
            observations: 2,
            records: 1,
        }
    );
}
