// Own test binary: the global subscriber can only be installed once per process.
use app_utils::setup_logging;

#[test]
fn second_setup_is_a_no_op() {
    assert!(setup_logging());
    assert!(!setup_logging());
    tracing::info!("still logging after repeat setup");
}
