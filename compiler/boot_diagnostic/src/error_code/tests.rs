use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::W2002.as_str(), "W2002");
}

#[test]
fn test_snapshot_error_codes() {
    assert!(ErrorCode::E1001.is_snapshot_error());
    assert!(ErrorCode::E1005.is_snapshot_error());
    assert!(!ErrorCode::E1001.is_registration_error());
    assert!(!ErrorCode::E1001.is_warning());
}

#[test]
fn test_registration_error_codes() {
    assert!(ErrorCode::E2001.is_registration_error());
    assert!(ErrorCode::E2003.is_registration_error());
    assert!(!ErrorCode::E2002.is_snapshot_error());
    assert!(!ErrorCode::E2002.is_warning());
}

#[test]
fn test_warning_codes() {
    assert!(ErrorCode::W2001.is_warning());
    assert!(ErrorCode::W3001.is_warning());
    assert!(ErrorCode::W3001.is_listener_warning());
    assert!(!ErrorCode::W2001.is_listener_warning());
}

#[test]
fn test_all_variants_classified() {
    for code in ErrorCode::ALL {
        let classes = [
            code.is_snapshot_error(),
            code.is_registration_error(),
            code.is_warning(),
        ];
        assert_eq!(
            classes.iter().filter(|c| **c).count(),
            1,
            "{code} must belong to exactly one class"
        );
    }
}

#[test]
fn test_from_str() {
    assert_eq!("E2001".parse::<ErrorCode>(), Ok(ErrorCode::E2001));
    assert_eq!("w3001".parse::<ErrorCode>(), Ok(ErrorCode::W3001));
    assert_eq!(" e1002 ".parse::<ErrorCode>(), Ok(ErrorCode::E1002));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_all_round_trips_through_as_str() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
}
