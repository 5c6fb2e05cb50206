//! Verify presentation: manufacture and analyze reports.

use crate::error::HcompareError;
use crate::manifest::{VerifyPolicy, VerifyReport};
use owo_colors::OwoColorize;

pub fn format_verify_text(report: &VerifyReport, color: bool) -> String {
    let mode = match report.policy {
        VerifyPolicy::Strict => "manufacture",
        VerifyPolicy::Audit => "analyze",
    };
    if report.is_clean() {
        let ok = if color {
            format!("{}", "OK".green())
        } else {
            "OK".to_string()
        };
        return format!(
            "{} ({}): {} files, {} bytes verified",
            ok, mode, report.checked, report.bytes
        );
    }

    let mut s = String::new();
    for m in &report.mismatches {
        let label = if color {
            format!("{}", "MISMATCH".red())
        } else {
            "MISMATCH".to_string()
        };
        s.push_str(&format!(
            "{} line {}: {}\n  expected {}\n  actual   {}\n",
            label,
            m.line,
            m.path.display(),
            m.expected,
            m.actual
        ));
    }
    s.push_str(&format!(
        "\n{} of {} files failed verification ({})",
        report.mismatches.len(),
        report.checked,
        mode
    ));
    s
}

pub fn format_verify_json(report: &VerifyReport) -> Result<String, HcompareError> {
    super::to_json(report)
}
