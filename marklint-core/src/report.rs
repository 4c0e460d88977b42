// Report assembly and text rendering

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Exit-code bit set when the dead-link check found failures.
pub const EXIT_DEAD_LINKS: i32 = 1;
/// Exit-code bit set when either duplicate detector found something.
pub const EXIT_DUPLICATES: i32 = 2;

/// Everything a finished run reports to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    pub backup_file: String,
    /// Total bookmarks in the backup (one per link node).
    pub total_marks: usize,
    /// Distinct URIs among them.
    pub unique_urls: usize,
    /// url -> failure description in probe order; `None` when the dead-link
    /// check did not run. Successfully reached URLs are absent.
    pub dead_links: Option<IndexMap<String, String>>,
    /// uri -> folder paths of every occurrence, first-appearance order.
    pub duplicate_urls: IndexMap<String, Vec<String>>,
    /// Folder-path pairs with identical descendant URI sets.
    pub duplicate_folders: Vec<(String, String)>,
    /// False when the duplicate detectors were disabled for the run.
    pub duplicates_checked: bool,
}

impl ReportData {
    pub fn has_dead_links(&self) -> bool {
        self.dead_links.as_ref().is_some_and(|bad| !bad.is_empty())
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicate_urls.is_empty() || !self.duplicate_folders.is_empty()
    }

    /// Additive process exit code: bit 0 for dead links, bit 1 for
    /// duplicates. 0 when the backup is clean (or nothing was checked).
    pub fn exit_code(&self) -> i32 {
        let mut code = 0;
        if self.has_dead_links() {
            code |= EXIT_DEAD_LINKS;
        }
        if self.duplicates_checked && self.has_duplicates() {
            code |= EXIT_DUPLICATES;
        }
        code
    }
}

/// Render the full human-readable report. Nothing is truncated: every
/// failure, every duplicate group, every folder pair is listed.
pub fn generate_text_report(data: &ReportData) -> String {
    let mut report = String::new();

    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("                 MARKLINT BOOKMARK REPORT\n");
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    report.push_str(&format!("Backup file:   {}\n", data.backup_file));
    report.push_str(&format!("Generated:     {}\n", format_now()));
    report.push_str(&format!("Bookmarks:     {}\n", data.total_marks));
    report.push_str(&format!("Unique links:  {}\n", data.unique_urls));
    report.push('\n');

    if let Some(ref bad_urls) = data.dead_links {
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        report.push_str("DEAD LINKS\n");
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

        if bad_urls.is_empty() {
            report.push_str("All links were retrieved successfully.\n\n");
        } else {
            report.push_str("The following URLs had errors:\n");
            for (url, description) in bad_urls {
                report.push_str(&format!("    {}: {}\n", url, description));
            }
            report.push('\n');
        }
    }

    if data.duplicates_checked {
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        report.push_str("DUPLICATE URLS\n");
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

        if data.duplicate_urls.is_empty() {
            report.push_str("No bookmark URL appears more than once.\n\n");
        } else {
            for (url, paths) in &data.duplicate_urls {
                report.push_str(&format!("{}\n", url));
                for path in paths {
                    report.push_str(&format!("    {}\n", path));
                }
            }
            report.push('\n');
        }

        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        report.push_str("IDENTICAL FOLDERS\n");
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

        if data.duplicate_folders.is_empty() {
            report.push_str("No two folders hold identical link sets.\n\n");
        } else {
            report.push_str("Identical children:\n");
            for (path, other) in &data.duplicate_folders {
                report.push_str(&format!("  \"{}\" and \"{}\"\n", path, other));
            }
            report.push('\n');
        }
    }

    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("                     End of Report\n");
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    report
}

fn format_now() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
