// 🖨️ Output - everything the binary writes to stdout
// One string per run: "Invalid Data", the text report, JSON, or the quality listing

use crate::config::{usage, Mode};
use crate::data_quality::DataQualityEngine;
use crate::monarch::Monarch;
use crate::source::LoadOutcome;
use crate::stats::MonarchReport;
use crate::INVALID_DATA;
use anyhow::{Context, Result};

/// Render a load outcome in the requested mode
///
/// An invalid outcome always renders as "Invalid Data" and no aggregator runs.
pub fn render_outcome(outcome: &LoadOutcome, mode: Mode) -> Result<String> {
    let monarchs = match outcome.monarchs() {
        Some(monarchs) => monarchs,
        None => return Ok(format!("{}\n", INVALID_DATA)),
    };

    match mode {
        Mode::Report => Ok(MonarchReport::compute(monarchs).render()),
        Mode::Json => render_json(monarchs),
        Mode::Quality => Ok(render_quality(monarchs, &DataQualityEngine::new())),
        Mode::Help => Ok(format!("{}\n", usage())),
    }
}

fn render_json(monarchs: &[Monarch]) -> Result<String> {
    let report = MonarchReport::compute(monarchs);
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    Ok(format!("{}\n", json))
}

/// Batch summary line, then one line per record with issues
pub fn render_quality(monarchs: &[Monarch], engine: &DataQualityEngine) -> String {
    let reports = engine.validate_batch(monarchs);

    let mut out = format!("{}\n", engine.batch_summary(&reports).summary());
    for report in reports.iter().filter(|r| !r.is_clean()) {
        out.push_str(&report.summary());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::parse_monarchs;

    const ANNE: &str = r#"[{"id":1,"nm":"Anne","hse":"House of Stuart","yrs":"1702-1714"}]"#;

    #[test]
    fn test_null_renders_invalid_data() {
        let outcome = parse_monarchs("null").unwrap();
        assert_eq!(render_outcome(&outcome, Mode::Report).unwrap(), "Invalid Data\n");
    }

    #[test]
    fn test_empty_array_renders_invalid_data_in_every_mode() {
        let outcome = parse_monarchs("[]").unwrap();

        for mode in [Mode::Report, Mode::Json, Mode::Quality] {
            assert_eq!(render_outcome(&outcome, mode).unwrap(), "Invalid Data\n");
        }
    }

    #[test]
    fn test_report_mode_renders_six_lines() {
        let outcome = parse_monarchs(ANNE).unwrap();
        let text = render_outcome(&outcome, Mode::Report).unwrap();

        assert_eq!(
            text,
            "How many monarchs are there in the list?\n1\n\n\
             Which monarch ruled the longest (and for how long)?\nAnne (12 years)\n\n\
             Which house ruled the longest (and for how long)?\nHouse of Stuart (12 years)\n\n\
             What was the most common first name?\nAnne\n\n"
        );
        assert!(!text.contains(INVALID_DATA));
    }

    #[test]
    fn test_json_mode() {
        let outcome = parse_monarchs(ANNE).unwrap();
        let text = render_outcome(&outcome, Mode::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["monarch_count"], 1);
        assert_eq!(json["longest_reigning_house"]["holder"], "House of Stuart");
    }

    #[test]
    fn test_quality_lists_only_records_with_issues() {
        let monarchs = vec![
            Monarch::new(1, "Anne")
                .with_house("House of Stuart")
                .with_reign_years("1702-1714"),
            Monarch::new(2, "Harold II")
                .with_house("House of Wessex")
                .with_reign_years("1066"),
        ];

        let text = render_quality(&monarchs, &DataQualityEngine::as_of(2024));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("2 monarchs"));
        assert!(lines[1].starts_with("#2 Harold II"));
    }
}
