fn main() {
    // Logs go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = atm_ledger::app::run(std::env::args()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
