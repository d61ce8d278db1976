use swulist::cli::Cli;
use swulist::logging;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging().expect("failed to initialize logging");

    // Parse CLI and dispatch.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("swulist error: {:#}", err);
        std::process::exit(1);
    }
}
