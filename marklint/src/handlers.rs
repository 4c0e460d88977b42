use clap::ArgMatches;
use colored::Colorize;
use indexmap::IndexMap;
use indicatif::{ProgressBar, ProgressStyle};
use marklint_checker::LinkChecker;
use marklint_core::model::Mark;
use marklint_core::report::{ReportData, generate_text_report};
use marklint_core::{find_duplicate_folders, find_duplicate_urls, parse_mark, walk_tree};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{info, warn};

/// Exit code for fatal errors: unreadable, unparseable, or structurally
/// broken backups. Distinct from the additive finding bits (1 and 2).
pub const EXIT_FATAL: i32 = 10;

/// Read and deserialize a backup file, tilde-expanding the path.
pub fn load_backup(path: &str) -> Result<serde_json::Value, String> {
    let expanded = shellexpand::tilde(path);
    let content = fs::read_to_string(expanded.as_ref())
        .map_err(|e| format!("Failed to read backup file {}: {}", expanded, e))?;

    serde_json::from_str(&content)
        .map_err(|e| format!("Backup file {} is not valid JSON: {}", expanded, e))
}

/// Write the flattened `path: title: uri` listing to a file.
pub fn dump_titles(structure: &Mark, path: &Path) -> Result<(), String> {
    let mut out = String::new();
    for (folder_path, place) in walk_tree(structure, "") {
        out.push_str(&format!("{}: {}\n", folder_path, place));
    }

    fs::write(path, out).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

/// Run the whole pipeline for one parsed argument set. Returns the process
/// exit code.
pub async fn run(matches: &ArgMatches) -> i32 {
    let file = matches.get_one::<String>("FILE").unwrap();
    let dead = matches.get_flag("dead");
    let noduplicates = matches.get_flag("noduplicates");
    let limit = matches.get_one::<usize>("limit").copied();
    let dump_path = matches.get_one::<PathBuf>("dump-titles");

    let marks = match load_backup(file) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            return EXIT_FATAL;
        }
    };

    let structure = match parse_mark(&marks) {
        Ok(structure) => structure,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            return EXIT_FATAL;
        }
    };

    let all_urls = structure.collect_urls();
    println!("Found {} bookmarks.", all_urls.len());

    let mut seen = HashSet::new();
    let unique_urls: Vec<&str> = all_urls
        .iter()
        .copied()
        .filter(|url| seen.insert(*url))
        .collect();
    println!("found {} unique links.", unique_urls.len());
    info!("parsed backup {}", file);

    if let Some(path) = dump_path {
        match dump_titles(&structure, path) {
            Ok(()) => println!("Wrote bookmark titles to {}", path.display()),
            Err(e) => warn!("{}", e),
        }
    }

    let dead_links = if dead {
        println!("\nTesting URLs:");
        match check_links(&unique_urls, limit).await {
            Ok(bad_urls) => Some(bad_urls),
            Err(e) => {
                eprintln!("{} {}", "✗".red().bold(), e);
                return EXIT_FATAL;
            }
        }
    } else {
        None
    };

    if !dead && noduplicates {
        println!("Nothing else to do! (Both dead link check and duplicates check disabled).");
        return 0;
    }

    let (duplicate_urls, duplicate_folders) = if noduplicates {
        (IndexMap::new(), Vec::new())
    } else {
        (
            find_duplicate_urls(&structure),
            find_duplicate_folders(&structure),
        )
    };

    let data = ReportData {
        backup_file: file.clone(),
        total_marks: all_urls.len(),
        unique_urls: unique_urls.len(),
        dead_links,
        duplicate_urls,
        duplicate_folders,
        duplicates_checked: !noduplicates,
    };

    print!("{}", generate_text_report(&data));
    data.exit_code()
}

/// Probe the unique URLs with a spinner wired to the checker's progress
/// callback.
async fn check_links(
    unique_urls: &[&str],
    limit: Option<usize>,
) -> Result<IndexMap<String, String>, String> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message("Testing URLs...");

    let checked = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));

    let pb_clone = pb.clone();
    let checked_clone = checked.clone();
    let failed_clone = failed.clone();
    let progress: marklint_checker::ProgressCallback = Arc::new(move |_url: &str, ok: bool| {
        let done = checked_clone.fetch_add(1, Ordering::Relaxed) + 1;
        if !ok {
            failed_clone.fetch_add(1, Ordering::Relaxed);
        }
        pb_clone.set_message(format!(
            "Testing URLs... {} checked, {} dead",
            done,
            failed_clone.load(Ordering::Relaxed)
        ));
        pb_clone.tick();
    });

    let checker = LinkChecker::new()
        .map_err(|e| e.to_string())?
        .with_limit(limit)
        .with_progress_callback(progress);

    let bad_urls = checker
        .check(unique_urls.iter().map(|url| url.to_string()))
        .await;

    pb.finish_with_message(format!(
        "Link check complete! {} checked, {} dead",
        checked.load(Ordering::Relaxed),
        failed.load(Ordering::Relaxed)
    ));

    Ok(bad_urls)
}
