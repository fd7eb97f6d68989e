//! Unit tests for the log line parser

use super::helpers::{at, load_fixture};

use logstat::parser::{self, LineShape};
use logstat::Record;

fn expect_single(line: &str) -> Record {
    let records = parser::parse([line]).unwrap();
    assert_eq!(records.len(), 1, "expected one record from: {}", line);
    records.into_iter().next().unwrap()
}

fn expect_none(line: &str) {
    let records = parser::parse([line]).unwrap();
    assert!(records.is_empty(), "expected no record from: {}", line);
}

// === Resource lines ===

#[test]
fn resource_lines_are_accepted() {
    expect_single("2015-08-19 00:06:42,375 (http--0.0.0.0-28080-370) [] updateSubscriptionFromBackend 300109921258 in 243");
    expect_single("2015-08-19 00:06:42,375 (http--0.0.0.0-28080-370) [] updateSubscriptionFromBackend 300109921258 true 1.0 in 243");
    expect_single("2015-08-19 00:06:42,375 () [] updateSubscriptionFromBackend 300109921258  true 1.0 in 0");
}

#[test]
fn resource_line_fields_are_extracted() {
    let record = expect_single(
        "2015-08-19 00:06:42,375 (ctx) [] updateSubscriptionFromBackend 300109921258 in 243",
    );
    assert_eq!(
        record,
        Record::new(at(0, 6, 42, 375), "updateSubscriptionFromBackend", 243)
    );
}

#[test]
fn malformed_resource_lines_are_dropped() {
    let lines = [
        "",
        "2015-08-19 00:06:42,375 (http--0.0.0.0-28080-370) [] updateSubscriptionFromBackend 300109921258 in",
        "2015-08-19 00:06:42,375 (http--0.0.0.0-28080-370) [] updateSubscriptionFromBackend 300109921258 243",
        "2015-08-19 00:06:42,375 (http--0.0.0.0-28080-370) [] updateSubscriptionFromBackend 300109921258",
        "2015-08-19 00:06:42,375 (http--0.0.0.0-28080-370) updateSubscriptionFromBackend 300109921258 in 243",
        "2015-08-19 00:06:42,375 [] updateSubscriptionFromBackend 300109921258 in 243",
        "(http--0.0.0.0-28080-370) [] updateSubscriptionFromBackend 300109921258 in 243",
        "2015-08-19 00:06:42, (http--0.0.0.0-28080-370) [] updateSubscriptionFromBackend 300109921258 in 243",
        "2015^08^19 00:06:42,375 (http--0.0.0.0-28080-370) [] updateSubscriptionFromBackend 300109921258 in 243",
        "2015-08-19 00:06:42,375 (http--0.0.0.0-28080-370) [] UpdateSubscriptionFromBackend 300109921258 in 243",
        "2015-08-19 00:06:42,375 (http--0.0.0.0-28080-370) [] updateSubscript&&ionFromBackend 300109921258 in 243",
        "2015-08-19 00:06:42,375 ( [] updateSubscriptionFromBackend 300109921258 in 243",
        "2015-08-19 00:06:42,375 (http--0.0.0.0-28080-370) ] updateSubscripti=onFromBackend 300109921258 in 243",
        "2015-08-19 (http--0.0.0.0-28080-370) [] updateSubscriptionFromBackend 300109921258 in 243",
        "2015-08-19 00:06:42,375 (http--0.0.0.0-28080-370) [] !updateSubscriptionFromBackend 300109921258 true false in 243",
        "2015-08-19 00:06:42,375 (http--0.0.0.0-28080-370) [] /updateSubscriptionFromBackend 300109921258 in 243",
    ];

    for line in lines {
        expect_none(line);
    }
}

// === Action URI lines ===

#[test]
fn action_uri_lines_are_accepted() {
    expect_single("2015-08-19 05:06:39,679 () [USER:300406591035] /mobilityServices.do?action=SERVICES&msisdn=300406591035&contentId=main_subscription in 46");
    expect_single("2015-08-19 05:06:39,679 (http--0.0.0.0-28080-297) [USER:300406591035] /mobilityServices.do?action=SERVICES in 46");
    expect_single("2015-08-19 05:06:39,679 (http--0.0.0.0-28080-297) [USER:300406591035] /mobilityServices.do?msisdn=300406591035&action=SERVICES&contentId=main_subscription in 0");
    expect_single("2015-08-19 05:06:39,679 (http--0.0.0.0-28080-297) [USER:300406591035] /mobilityServices.do?msisdn=300406591035&action=SERVICES in 46");
}

#[test]
fn action_uri_fields_are_extracted() {
    let record = expect_single(
        "2015-08-19 00:06:39,632 (http--0.0.0.0-28080-3) [CUST:CUS88O8888] /mainContent.do?action=NOTIFICATIONS&notificationType=invoice&contentId=notifications in 2",
    );
    assert_eq!(record, Record::new(at(0, 6, 39, 632), "NOTIFICATIONS", 2));
}

#[test]
fn action_value_may_look_like_a_resource_name() {
    let record = expect_single(
        "2015-08-19 00:06:36,599 (http--0.0.0.0-28080-3) [CUST:CUS88O8888] /mainContent.do?action=updateSubscriptionFromBackend&notificationType=invoice in 243",
    );
    assert_eq!(record.resource_name(), "updateSubscriptionFromBackend");
    assert_eq!(record.timestamp(), at(0, 6, 36, 599));
    assert_eq!(record.duration_millis(), 243);
}

#[test]
fn malformed_action_uri_lines_are_dropped() {
    let lines = [
        "2015-08-19 05:06:39,679 [USER:300406591035] /mobilityServices.do?action=SERVICES&msisdn=300406591035 in 46",
        "2015-08-19 05:06:39,0 (http--0.0.0.0-28080-297) [USER:300406591035] /mobilityServices.do?action=SERVICES&msisdn=300406591035 in 46",
        "2015-08-19 05:06:39,679 (http--0.0.0.0-28080-297) [] /mobilityServices.do?action=SERVICES&msisdn=300406591035 in 46",
        "2015-08-19 05:06:39,679 (http--0.0.0.0-28080-297) [USER:300406591035] /mobilityServices.do?=SERVICES&msisdn=300406591035 in 46",
        "2015-08-19 05:06:39,679 (http--0.0.0.0-28080-297) [USER:300406591035] /mobilityServices.do?action=SERVICES&msisdn=300406591035 in ",
        "2015-08-19 05:06:39,679 (http--0.0.0.0-28080-297) [USER:300406591035] /mobilityServices.do?action=SERVICES&msisdn=300406591035 46",
        "2015-08-19 05:06:39,679 (http--0.0.0.0-28080-297) [USER:300406591035] mobilityServices.do?action=SERVICES&msisdn=300406591035 in 46",
        "2015:08:19 05:06:39,679 (http--0.0.0.0-28080-297) [USER:300406591035] /mobilityServices.do?action=SERVICES&msisdn=300406591035&contentId=main_subscription in 46",
        "2015-08-19 (http--0.0.0.0-28080-297) [USER:300406591035] /mobilityServices.do?action=SERVICES&msisdn=300406591035&contentId=main_subscription in 46",
    ];

    for line in lines {
        expect_none(line);
    }
}

// === Shape precedence ===

#[test]
fn resource_shape_is_tried_first() {
    let line = "2015-08-19 00:06:42,375 (t) [] updateSubscriptionFromBackend 300109921258 in 243";
    assert_eq!(
        LineShape::classify(line).map(|e| e.shape),
        Some(LineShape::Resource)
    );
}

#[test]
fn action_shape_never_yields_path_as_resource() {
    let line =
        "2015-08-19 05:06:39,679 (t) [USER:1] /mobilityServices.do?action=SERVICES in 46";
    let extraction = LineShape::classify(line).unwrap();
    assert_eq!(extraction.shape, LineShape::ActionUri);
    assert_eq!(extraction.resource, "SERVICES");
}

// === Timestamps ===

#[test]
fn february_thirtieth_reads_as_last_day_of_february() {
    let record = expect_single("2015-02-30 00:06:42,375 (t) [] a 1 in 5");
    let expected = chrono::NaiveDate::from_ymd_opt(2015, 2, 28)
        .unwrap()
        .and_hms_milli_opt(0, 6, 42, 375)
        .unwrap();
    assert_eq!(record.timestamp(), expected);
}

#[test]
fn thirteenth_month_is_still_an_error() {
    let err = parser::parse(["2015-13-19 00:06:42,375 (t) [] a 1 in 5"]).unwrap_err();
    assert!(err.to_string().contains("invalid timestamp"));
}

// === Batch behavior ===

#[test]
fn fixture_yields_only_valid_lines_in_order() {
    let content = load_fixture("timing.log");
    let lines: Vec<&str> = content.lines().collect();
    let records = parser::parse(&lines).unwrap();

    assert!(records.len() <= lines.len());
    let names: Vec<_> = records.iter().map(|r| r.resource_name()).collect();
    assert_eq!(
        names,
        vec![
            "getSubscriptionCampaigns",
            "updateSubscriptionFromBackend",
            "TOOLS",
            "SERVICES",
            "updateSubscriptionFromBackend",
            "SERVICES",
            "getSubscriptionCampaigns",
            "TOOLS",
        ]
    );
}

#[test]
fn parsing_is_repeatable() {
    let content = load_fixture("timing.log");
    let first = parser::parse(content.lines()).unwrap();
    let second = parser::parse(content.lines()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn every_record_comes_from_a_matching_line() {
    let content = load_fixture("timing.log");
    let matching = content
        .lines()
        .filter(|line| LineShape::classify(line).is_some())
        .count();
    let records = parser::parse(content.lines()).unwrap();
    assert_eq!(records.len(), matching);
}

#[test]
fn absent_lines_are_skipped() {
    let lines = vec![
        None,
        Some("2015-08-19 05:06:39,679 (t) [USER:1] /m.do?action=SERVICES in 46".to_string()),
    ];
    let records = parser::parse_optional(lines).unwrap();
    assert_eq!(records.len(), 1);
}
