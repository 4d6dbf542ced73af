use funcmatch_rs::prelude::MatchError;

#[test]
fn test_match_error_display() {
    // EmptyInput
    let err = MatchError::EmptyInput;
    assert_eq!(format!("{}", err), "Target series is empty");

    // EmptyLibrary
    let err = MatchError::EmptyLibrary;
    assert_eq!(format!("{}", err), "Candidate library contains no candidates");

    // EmptyFrame
    let err = MatchError::EmptyFrame;
    assert_eq!(
        format!("{}", err),
        "Sampled series contains no coordinate pairs"
    );

    // MismatchedFrame
    let err = MatchError::MismatchedFrame { x_len: 3, y_len: 4 };
    assert_eq!(
        format!("{}", err),
        "Frame length mismatch: x has 3 points, y has 4"
    );

    // LengthMismatch
    let err = MatchError::LengthMismatch {
        target_len: 2,
        candidate_len: 4,
    };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: target has 2 points, candidates have 4"
    );

    // InvalidSeriesValue
    let err = MatchError::InvalidSeriesValue("target[1]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid series value: target[1]=NaN");

    // MismatchedRecords
    let err = MatchError::MismatchedRecords {
        observations: 3,
        records: 2,
    };
    assert_eq!(
        format!("{}", err),
        "Record table mismatch: 3 observations, 2 records"
    );

    // DuplicateCandidate
    let err = MatchError::DuplicateCandidate("y1".to_string());
    assert_eq!(format!("{}", err), "Duplicate candidate name: 'y1'");

    // UnknownCandidate
    let err = MatchError::UnknownCandidate("y9".to_string());
    assert_eq!(format!("{}", err), "Unknown candidate name: 'y9'");

    // InvalidTolerance
    let err = MatchError::InvalidTolerance(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid tolerance: -1 (must be >= 0 and finite)"
    );
}

#[test]
fn test_match_error_properties() {
    let err1 = MatchError::EmptyInput;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, MatchError::EmptyLibrary);
}

#[test]
fn test_match_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<MatchError>();
}
