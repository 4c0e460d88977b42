use marklint::commands::command_argument_builder;
use marklint::handlers;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cmd = command_argument_builder();
    let matches = cmd.get_matches();

    if !matches.get_flag("quiet") {
        marklint_core::print_banner();
    }

    let code = handlers::run(&matches).await;
    std::process::exit(code);
}
