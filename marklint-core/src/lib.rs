pub mod dupes;
pub mod error;
pub mod model;
pub mod parse;
pub mod report;
pub mod walk;

pub use dupes::{find_duplicate_folders, find_duplicate_urls};
pub use error::ParseError;
pub use model::{Container, Mark, Place, Separator};
pub use parse::parse_mark;
pub use report::{ReportData, generate_text_report};
pub use walk::walk_tree;

use colored::Colorize;

/// Print the startup banner.
pub fn print_banner() {
    println!(
        "{} {}",
        "marklint".bright_cyan().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_black()
    );
    println!(
        "{}",
        "duplicate and dead link reports for Firefox bookmark backups".bright_black()
    );
    println!();
}
