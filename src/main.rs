//! CLI entry point for the constrained random path generator

use std::io::Write;

use clap::Parser;
use gridwalk::io::cli::{Cli, Runner};

fn main() -> gridwalk::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    Runner::new(cli).run()
}
