use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "A bespoke kit of tools, each built to solve one small problem very well"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[clap(long, default_value = "warn")]
    pub log_level: super::logging::Level,

    #[clap(long)]
    pub log_file: Option<PathBuf>,

    #[clap(long)]
    pub log_json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(alias = "c")]
    Case(CaseCommand),
    #[command(alias = "col")]
    Color(ColorCommand),
    #[command(alias = "n")]
    Net(NetCommand),
    Serve(ServeCommand),
    #[command(hide = true)]
    DumpHelp,
}

/// Apply one or more casing transformations to input text.
///
/// The last argument is the input and the others are modes applied from left
/// to right. When text is piped on standard input, every argument is a mode.
#[derive(Parser, Debug)]
#[command(after_help = "Modes:
  upper   lower   kebab   snake   camel   pascal

Examples:
  yui case lower kebab \"Some Text\"
  echo \"Some Text\" | yui case kebab
  yui case --all \"Hello World\"")]
pub struct CaseCommand {
    #[arg(required_unless_present = "all", value_name = "MODES... INPUT")]
    pub args: Vec<String>,

    /// Show the input under every rule of the converter page instead.
    #[clap(long)]
    pub all: bool,

    /// With --all, print the rules as a JSON array.
    #[clap(long, requires = "all")]
    pub json: bool,
}

/// Convert a color between notations.
///
/// If the first argument names a target format, only that notation is
/// printed. Otherwise every notation is listed.
#[derive(Parser, Debug)]
#[command(after_help = "Target formats:
  hex   rgb   hsl   hsv/hsb   cmyk   lab   oklab   oklch

Examples:
  yui color \"#ff5500\"
  yui color rgb \"#ff5500\"
  yui color hex \"oklch(0.7 0.15 60)\"")]
pub struct ColorCommand {
    #[arg(required_unless_present = "names", value_name = "[FORMAT] COLOR")]
    pub args: Vec<String>,

    /// List the recognized color names.
    #[clap(long)]
    pub names: bool,
}

/// Suite of network tools.
#[derive(Parser, Debug)]
pub struct NetCommand {
    #[command(subcommand)]
    pub command: NetSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum NetSubcommand {
    /// Show local IP addresses.
    #[command(
        alias = "i",
        after_help = "Examples:
  yui net ip
  yui net ip all
  yui net ip all --json"
    )]
    Ip(IpCommand),
}

#[derive(Parser, Debug)]
pub struct IpCommand {
    /// Which addresses to show.
    #[arg(value_enum, default_value_t = IpScope::Primary)]
    pub scope: IpScope,

    /// With `all`, print the interfaces as a JSON array.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum IpScope {
    /// The address used for outbound traffic.
    #[value(alias = "p")]
    Primary,
    /// Every non-loopback address, grouped by interface.
    #[value(alias = "a")]
    All,
}

/// Serve the landing page and the live case converter page.
#[derive(Parser, Debug)]
pub struct ServeCommand {
    #[clap(long, default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,
}
