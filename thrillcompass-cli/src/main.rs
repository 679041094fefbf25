//! Entry point for the `thrillcompass` command.
#![forbid(unsafe_code)]

use thrillcompass_cli::{CliError, init_logging, run};

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() {
    match init_logging().and_then(|()| run()) {
        Ok(()) => {}
        // Clap renders help and version on stdout and usage errors on stderr.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("thrillcompass: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
