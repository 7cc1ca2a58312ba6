use clap::{Parser, Subcommand};

mod doc;

#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Regenerate doc/cli_reference.md from the binary's help text.
    GenCliDoc,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Command::GenCliDoc => crate::doc::gen_cli_doc(),
    }
}
