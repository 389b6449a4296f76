use clap::Parser;
use sigcheck::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
