use hp_core::errors::{ErrorInfo, HpError};

#[test]
fn display_includes_code_and_context() {
    let err = HpError::Parameters(
        ErrorInfo::new("invalid-parameters", "replica count must be positive")
            .with_context("replicas", "0"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("invalid-parameters"));
    assert!(rendered.contains("replicas=0"));
}

#[test]
fn validation_families_are_flagged() {
    let sequence = HpError::Sequence(ErrorInfo::new("invalid-residue", "bad letter"));
    let lattice = HpError::Lattice(ErrorInfo::new("init-failure", "no placement found"));
    assert!(sequence.is_validation());
    assert!(!lattice.is_validation());
}

#[test]
fn errors_roundtrip_through_json() {
    let err = HpError::Lattice(
        ErrorInfo::new("grid-overflow", "translated cell leaves the grid")
            .with_context("side", "8"),
    );
    let json = serde_json::to_string(&err).unwrap();
    let back: HpError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, back);
}
