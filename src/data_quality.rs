// ✅ Data Quality Engine - field checks for monarch records
//
// Reports anomalies the aggregators silently absorb (missing names and houses,
// malformed or negative reigns). Reporting never changes the numbers: a bad
// reign string still counts as 0 years.

use crate::monarch::{parse_year, Monarch};
use serde::{Deserialize, Serialize};

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub passed: bool,
    pub rule_name: String,
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationResult {
    pub fn pass(rule_name: &str, field: &str, message: &str) -> Self {
        ValidationResult {
            passed: true,
            rule_name: rule_name.to_string(),
            field: field.to_string(),
            message: message.to_string(),
            severity: Severity::Info,
        }
    }

    pub fn fail(rule_name: &str, field: &str, message: &str, severity: Severity) -> Self {
        ValidationResult {
            passed: false,
            rule_name: rule_name.to_string(),
            field: field.to_string(),
            message: message.to_string(),
            severity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical, // Reign length is wrong (counted as 0 or negative)
    Warning,  // Field missing or partly unreadable
    Info,     // Valid but carries no duration
}

// ============================================================================
// QUALITY REPORT
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityIssue {
    pub severity: Severity,
    pub field: String,
    pub issue: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub monarch_id: i64,
    pub monarch_name: String,
    pub overall_quality: f64,
    pub validations: Vec<ValidationResult>,
    pub issues: Vec<QualityIssue>,
    pub passed_count: usize,
    pub failed_count: usize,
}

impl QualityReport {
    pub fn summary(&self) -> String {
        format!(
            "#{} {}: {:.0}% quality, {} issue(s){}",
            self.monarch_id,
            display_name(&self.monarch_name),
            self.overall_quality * 100.0,
            self.issues.len(),
            self.issues
                .iter()
                .map(|i| format!(" [{:?}] {}", i.severity, i.issue))
                .collect::<String>()
        )
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_critical_issues(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.severity == Severity::Critical)
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "<unnamed>"
    } else {
        name
    }
}

// ============================================================================
// DATA QUALITY ENGINE
// ============================================================================

pub struct DataQualityEngine {
    /// Year used for open-ended reigns
    current_year: i32,
}

impl DataQualityEngine {
    pub fn new() -> Self {
        Self::as_of(crate::monarch::current_year())
    }

    pub fn as_of(current_year: i32) -> Self {
        DataQualityEngine { current_year }
    }

    /// Validate one monarch and generate its quality report
    pub fn validate(&self, monarch: &Monarch) -> QualityReport {
        let validations = vec![
            self.validate_name(monarch.name.as_deref()),
            self.validate_house(monarch.house.as_deref()),
            self.validate_reign_format(monarch.reign_years.as_deref()),
            self.validate_reign_length(monarch),
        ];

        let issues: Vec<QualityIssue> = validations
            .iter()
            .filter(|v| !v.passed)
            .map(|v| QualityIssue {
                severity: v.severity,
                field: v.field.clone(),
                issue: v.message.clone(),
            })
            .collect();

        let passed_count = validations.iter().filter(|v| v.passed).count();
        let failed_count = validations.len() - passed_count;
        let overall_quality = passed_count as f64 / validations.len() as f64;

        QualityReport {
            monarch_id: monarch.id,
            monarch_name: monarch.name_or_empty().to_string(),
            overall_quality,
            validations,
            issues,
            passed_count,
            failed_count,
        }
    }

    /// Batch validate the whole list
    pub fn validate_batch(&self, monarchs: &[Monarch]) -> Vec<QualityReport> {
        monarchs.iter().map(|m| self.validate(m)).collect()
    }

    /// Generate summary statistics for batch validation
    pub fn batch_summary(&self, reports: &[QualityReport]) -> BatchSummary {
        let total = reports.len();
        let clean = reports.iter().filter(|r| r.is_clean()).count();
        let has_critical = reports.iter().filter(|r| r.has_critical_issues()).count();

        // An empty batch has nothing wrong with it
        let average_quality = if total == 0 {
            1.0
        } else {
            reports.iter().map(|r| r.overall_quality).sum::<f64>() / total as f64
        };

        BatchSummary {
            total_monarchs: total,
            clean_count: clean,
            with_issues_count: total - clean,
            critical_issues_count: has_critical,
            average_quality,
        }
    }

    // ========================================================================
    // VALIDATION RULES
    // ========================================================================

    fn validate_name(&self, name: Option<&str>) -> ValidationResult {
        match name {
            Some(n) if !n.trim().is_empty() => {
                ValidationResult::pass("name_present", "name", &format!("Name present: {}", n))
            }
            Some(_) => ValidationResult::fail(
                "name_blank",
                "name",
                "Name is blank (grouped as \"\")",
                Severity::Warning,
            ),
            None => ValidationResult::fail(
                "name_missing",
                "name",
                "Name is missing (grouped as \"\")",
                Severity::Warning,
            ),
        }
    }

    fn validate_house(&self, house: Option<&str>) -> ValidationResult {
        match house {
            Some(h) if !h.trim().is_empty() => {
                ValidationResult::pass("house_present", "house", &format!("House present: {}", h))
            }
            _ => ValidationResult::fail(
                "house_missing",
                "house",
                "House is missing (grouped as \"\")",
                Severity::Warning,
            ),
        }
    }

    fn validate_reign_format(&self, years: Option<&str>) -> ValidationResult {
        let years = match years {
            Some(y) if !y.is_empty() => y,
            _ => {
                return ValidationResult::fail(
                    "reign_missing",
                    "reign_years",
                    "Reign years missing (counted as 0)",
                    Severity::Warning,
                )
            }
        };

        let mut parts = years.split('-');
        let start = parts.next().unwrap_or("");
        let end = match parts.next() {
            Some(end) => end,
            None => {
                return ValidationResult::fail(
                    "reign_single_year",
                    "reign_years",
                    &format!("Single year \"{}\" (counted as 0)", years),
                    Severity::Info,
                )
            }
        };

        if parse_year(start).is_none() {
            return ValidationResult::fail(
                "reign_start_invalid",
                "reign_years",
                &format!("Start year not numeric in \"{}\" (counted as 0)", years),
                Severity::Critical,
            );
        }

        if end.trim().is_empty() {
            return ValidationResult::pass(
                "reign_open_ended",
                "reign_years",
                &format!("Open-ended reign \"{}\" (runs to {})", years, self.current_year),
            );
        }

        if parse_year(end).is_none() {
            return ValidationResult::fail(
                "reign_end_invalid",
                "reign_years",
                &format!(
                    "End year not numeric in \"{}\" (treated as {})",
                    years, self.current_year
                ),
                Severity::Warning,
            );
        }

        ValidationResult::pass(
            "reign_valid",
            "reign_years",
            &format!("Reign years valid: {}", years),
        )
    }

    fn validate_reign_length(&self, monarch: &Monarch) -> ValidationResult {
        let length = monarch.reign_length_as_of(self.current_year);
        if length < 0 {
            return ValidationResult::fail(
                "reign_negative",
                "reign_years",
                &format!("Reign length is negative ({} years)", length),
                Severity::Critical,
            );
        }

        ValidationResult::pass(
            "reign_non_negative",
            "reign_years",
            &format!("Reign length: {} years", length),
        )
    }
}

impl Default for DataQualityEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// BATCH SUMMARY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_monarchs: usize,
    pub clean_count: usize,
    pub with_issues_count: usize,
    pub critical_issues_count: usize,
    pub average_quality: f64,
}

impl BatchSummary {
    pub fn summary(&self) -> String {
        format!(
            "{} monarchs: {:.1}% quality | {} clean, {} with issues, {} critical",
            self.total_monarchs,
            self.average_quality * 100.0,
            self.clean_count,
            self.with_issues_count,
            self.critical_issues_count
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
