use anyhow::Context;

use crate::net;

use super::{
    arg::{IpCommand, IpScope, NetCommand, NetSubcommand},
    io::print_line,
};

pub fn net(args: &NetCommand) -> anyhow::Result<()> {
    match &args.command {
        NetSubcommand::Ip(args) => ip(args),
    }
}

fn ip(args: &IpCommand) -> anyhow::Result<()> {
    match args.scope {
        IpScope::Primary => {
            let address = net::primary_local_ip().context("finding primary address failed")?;

            print_line(&address.to_string())
        }
        IpScope::All => {
            let interfaces = net::local_interfaces();

            tracing::info!(count = interfaces.len(), "listed interfaces");

            if args.json {
                let text = serde_json::to_string_pretty(&interfaces)
                    .context("serializing interfaces failed")?;
                print_line(&text)
            } else if interfaces.is_empty() {
                Ok(())
            } else {
                print_line(&net::format_interfaces(&interfaces))
            }
        }
    }
}
