//! Create presentation: manifest creation summary.

use crate::api::CreateSummary;
use crate::error::HcompareError;
use owo_colors::OwoColorize;

pub fn format_create_text(summary: &CreateSummary, color: bool) -> String {
    let mut s = format!(
        "Manifest written: {}\n  Files: {}\n  Bytes: {}\n  Directories: {}",
        summary.manifest.display(),
        summary.records,
        summary.walk.bytes,
        summary.walk.directories
    );
    if summary.walk.skipped_symlinks > 0 {
        s.push_str(&format!(
            "\n  Skipped symlinks: {}",
            summary.walk.skipped_symlinks
        ));
    }
    if summary.walk.skipped_special > 0 {
        s.push_str(&format!(
            "\n  Skipped special files: {}",
            summary.walk.skipped_special
        ));
    }
    if !summary.walk.warnings.is_empty() {
        let heading = format!("Warnings ({}):", summary.walk.warnings.len());
        if color {
            s.push_str(&format!("\n\n{}", heading.yellow()));
        } else {
            s.push_str(&format!("\n\n{}", heading));
        }
        for w in &summary.walk.warnings {
            s.push_str(&format!("\n  - {}: {}", w.path.display(), w.message));
        }
    }
    s
}

pub fn format_create_json(summary: &CreateSummary) -> Result<String, HcompareError> {
    super::to_json(summary)
}
