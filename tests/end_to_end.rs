// End-to-end: fixture payload → parse → report

use monarch_stats::monarch::current_year;
use monarch_stats::{parse_monarchs, DataQualityEngine, LoadOutcome, MonarchReport, Reign};

const FIXTURE: &str = include_str!("fixtures/monarchs.json");

fn load_fixture() -> Vec<monarch_stats::Monarch> {
    match parse_monarchs(FIXTURE).expect("fixture parses") {
        LoadOutcome::Monarchs(monarchs) => monarchs,
        LoadOutcome::Invalid => panic!("fixture should not be empty"),
    }
}

#[test]
fn test_fixture_report() {
    let monarchs = load_fixture();
    let report = MonarchReport::compute(&monarchs);

    assert_eq!(report.monarch_count, 20);
    assert_eq!(
        report.longest_reigning_monarch,
        Reign::new("Elizabeth II", i64::from(current_year() - 1952))
    );
    assert_eq!(report.longest_reigning_house, Reign::new("House of Wessex", 141));
    assert_eq!(report.most_common_first_name, "Edward");
}

#[test]
fn test_fixture_render() {
    let monarchs = load_fixture();
    let text = MonarchReport::compute(&monarchs).render();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "How many monarchs are there in the list?");
    assert_eq!(lines[1], "20");
    assert_eq!(lines[2], "");
    assert_eq!(lines[7], "House of Wessex (141 years)");
    assert_eq!(lines[10], "Edward");
}

#[test]
fn test_fixture_quality() {
    let monarchs = load_fixture();
    let engine = DataQualityEngine::new();
    let summary = engine.batch_summary(&engine.validate_batch(&monarchs));

    // Edmund Ironside and Harold II only carry a single year
    assert_eq!(summary.total_monarchs, 20);
    assert_eq!(summary.with_issues_count, 2);
    assert_eq!(summary.critical_issues_count, 0);
}
