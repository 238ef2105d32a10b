use doctorcare_backend::services::triage::{Severity, TriageRule, triage};

#[test]
fn headache_is_low_severity_without_facilities() {
    let reply = triage("I have a terrible headache");
    assert_eq!(reply.severity, Severity::Low);
    assert_eq!(reply.rule, TriageRule::Head);
    assert!(reply.facilities.is_empty());
}

#[test]
fn matching_is_case_insensitive() {
    let reply = triage("HEADACHE won't go away");
    assert_eq!(reply.rule, TriageRule::Head);

    let reply = triage("My HEART is racing");
    assert_eq!(reply.rule, TriageRule::Heart);
}

#[test]
fn chest_pain_is_high_severity_with_three_facilities() {
    for input in ["chest pain since this morning", "my heart hurts"] {
        let reply = triage(input);
        assert_eq!(reply.severity, Severity::High, "input: {input}");
        assert_eq!(reply.rule, TriageRule::Heart);
        assert_eq!(reply.facilities.len(), 3);
    }
}

#[test]
fn facilities_attach_regardless_of_other_content() {
    let reply = triage("I slept badly and also felt chest pain and a bit of fever");
    assert_eq!(reply.severity, Severity::High);
    assert_eq!(reply.facilities.len(), 3);
}

#[test]
fn head_rule_wins_over_heart_rule() {
    // Rule order is part of the contract: head > heart > fever > default.
    let reply = triage("my head hurts and my heart is pounding");
    assert_eq!(reply.rule, TriageRule::Head);
    assert_eq!(reply.severity, Severity::Low);
    assert!(reply.facilities.is_empty());
}

#[test]
fn heart_rule_wins_over_fever_rule() {
    let reply = triage("fever and chest pain");
    assert_eq!(reply.rule, TriageRule::Heart);
    assert_eq!(reply.severity, Severity::High);
}

#[test]
fn fever_is_medium_severity() {
    let reply = triage("running a fever since yesterday");
    assert_eq!(reply.severity, Severity::Medium);
    assert_eq!(reply.rule, TriageRule::Fever);
    assert!(reply.facilities.is_empty());

    let reply = triage("my temperature is 101");
    assert_eq!(reply.rule, TriageRule::Fever);
}

#[test]
fn unmatched_input_gets_default_low_severity() {
    let reply = triage("my elbow itches");
    assert_eq!(reply.severity, Severity::Low);
    assert_eq!(reply.rule, TriageRule::Default);
    assert!(reply.facilities.is_empty());
}

#[test]
fn empty_input_still_gets_a_reply() {
    let reply = triage("");
    assert_eq!(reply.rule, TriageRule::Default);
    assert_eq!(reply.severity, Severity::Low);
    assert!(!reply.advice.is_empty());
}

#[test]
fn triage_is_deterministic() {
    let a = triage("headache and fever");
    let b = triage("headache and fever");
    assert_eq!(a, b);
}
