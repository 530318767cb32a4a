//! CLI entry point for hypergeometric probability evaluation

use clap::Parser;
use hypergeom::io::cli::{Cli, CommandRunner};

fn main() -> hypergeom::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    let stdout = std::io::stdout();
    let mut runner = CommandRunner::new(cli, stdout.lock());
    runner.run()
}
