//! Binary entrypoint for srcgen-cli

fn main() {
    if let Err(err) = srcgen_cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
