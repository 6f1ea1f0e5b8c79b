use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AgsError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        AgsError::protocol("x")
            .to_string()
            .contains("protocol error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AgsError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
