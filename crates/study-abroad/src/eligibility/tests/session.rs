use super::common::*;
use crate::eligibility::{EligibilitySession, SessionError};

#[test]
fn report_before_submit_is_rejected() {
    let session = EligibilitySession::new(evaluator());

    assert!(session.latest().is_none());
    assert_eq!(
        session.report(report_date()),
        Err(SessionError::NotEvaluated)
    );
}

#[test]
fn submit_replaces_previous_assessment() {
    let mut session = EligibilitySession::default();

    let first = session.submit(strong_usa_profile()).clone();
    assert!(first.verdict.eligible);

    let second = session.submit(weak_canada_profile()).clone();
    assert!(!second.verdict.eligible);

    let latest = session.latest().expect("assessment stored");
    assert_eq!(latest, &second);
    assert_ne!(latest.profile, first.profile);
}

#[test]
fn report_reflects_latest_submission() {
    let mut session = EligibilitySession::default();
    session.submit(strong_usa_profile());
    session.submit(weak_canada_profile());

    let report = session.report(report_date()).expect("report available");

    assert_eq!(report.status_line(), "Status: Not Eligible");
    assert_eq!(report.fields[3].value, "Canada");
}
