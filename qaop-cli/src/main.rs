//! Entry point for the `qaop` command-line interface.
#![forbid(unsafe_code)]

use qaop_cli::CliError;

fn main() {
    match qaop_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            report(&err);
            std::process::exit(1);
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn report(err: &CliError) {
    eprintln!("qaop: {err}");
}
