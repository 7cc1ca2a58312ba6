use crate::color::{self, Format};

use super::{arg::ColorCommand, io::print_line};

pub fn color(args: &ColorCommand) -> anyhow::Result<()> {
    if args.names {
        for name in color::named_color_names() {
            print_line(name)?;
        }

        return Ok(());
    }

    let (target, color_args) = match args.args.split_first() {
        Some((first, rest)) => match first.parse::<Format>() {
            Ok(format) => (Some(format), rest),
            Err(_) => (None, args.args.as_slice()),
        },
        None => (None, args.args.as_slice()),
    };

    let text = color_args.join(" ");

    if text.trim().is_empty() {
        anyhow::bail!("color value required");
    }

    let color = color::parse(&text)?;

    tracing::info!(?target, color = color.hex_alpha(), "parsed color");

    match target {
        Some(format) => print_line(&color.format(format)),
        None => print_line(&color.format_all()),
    }
}
