use super::*;

#[test]
fn constructor_helpers_pick_variants() {
    assert!(matches!(
        SkyvecError::validation("bad"),
        SkyvecError::Validation(_)
    ));
    assert!(matches!(
        SkyvecError::unbound_surface("none"),
        SkyvecError::UnboundSurface(_)
    ));
    assert!(matches!(SkyvecError::replay("nope"), SkyvecError::Replay(_)));
}

#[test]
fn display_includes_category_and_message() {
    let err = SkyvecError::replay("backend rejected geometry");
    assert_eq!(err.to_string(), "replay error: backend rejected geometry");

    let err = SkyvecError::unbound_surface("readback");
    assert_eq!(err.to_string(), "no surface bound: readback");
}

#[test]
fn anyhow_errors_pass_through() {
    let err: SkyvecError = anyhow::anyhow!("backend exploded").into();
    assert_eq!(err.to_string(), "backend exploded");
}
