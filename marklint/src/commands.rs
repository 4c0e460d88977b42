use crate::CLAP_STYLING;
use clap::arg;

/// Build the marklint command-line surface.
pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("marklint")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("marklint")
        .styles(CLAP_STYLING)
        .about("Process a Firefox bookmarks backup, report duplicates or dead links.")
        .arg(
            arg!(<FILE>)
                .help("A Firefox bookmarks backup (not export) file, in JSON format")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            arg!(--"dead")
                .required(false)
                .help("Attempt to contact each link, report links with errors")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"noduplicates")
                .required(false)
                .help("Disable (default enabled) checking for duplicate links")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"limit" <N>)
                .required(false)
                .help("Limit number of links for dead link check (mostly for testing)")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--"dump-titles" <PATH>)
                .required(false)
                .help("Write the flattened `path: title: uri` listing to a file")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
}
