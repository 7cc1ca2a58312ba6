use anyhow::Context;

use crate::casing::{self, Mode};

use super::{
    arg::CaseCommand,
    io::{print_line, read_piped_stdin},
};

pub fn case(args: &CaseCommand) -> anyhow::Result<()> {
    let piped = read_piped_stdin()?;

    if args.all {
        let input = piped.unwrap_or_else(|| args.args.join(" "));
        return show_all(&input, args.json);
    }

    let (modes, input) = split_modes_and_input(&args.args, piped)?;

    tracing::info!(?modes, "converting case");

    print_line(&casing::convert_chain(&input, &modes))
}

/// Piped text is the input and every argument a mode. Without a pipe the
/// last argument is the input.
fn split_modes_and_input(
    args: &[String],
    piped: Option<String>,
) -> anyhow::Result<(Vec<Mode>, String)> {
    let (names, input) = match piped {
        Some(input) => (args, input),
        None => match args.split_last() {
            Some((input, names)) => (names, input.clone()),
            None => anyhow::bail!("input text is required"),
        },
    };

    let modes = names
        .iter()
        .map(|name| name.parse::<Mode>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok((modes, input))
}

fn show_all(input: &str, json: bool) -> anyhow::Result<()> {
    let outputs = casing::render(input);

    if json {
        let text =
            serde_json::to_string_pretty(&outputs).context("serializing casings failed")?;
        return print_line(&text);
    }

    for item in outputs {
        print_line(&format!("{}: {}", item.name, item.output))?;
    }

    Ok(())
}
