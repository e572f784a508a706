use create_express_ts::commands::doctor;

// doctor only reports; it never fails the process, whatever is installed

#[test]
fn doctor_reports_without_failing() {
    assert!(doctor::run().is_ok());
}

#[test]
fn doctor_is_repeatable() {
    doctor::run().unwrap();
    doctor::run().unwrap();
}
