use std::{fs::File, path::Path, sync::Mutex};

use tracing_subscriber::{Layer, fmt::writer::BoxMakeWriter, layer::SubscriberExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    #[default]
    Off,
}

impl Level {
    fn as_level_filter(&self) -> tracing_subscriber::filter::LevelFilter {
        match self {
            Self::Trace => tracing_subscriber::filter::LevelFilter::TRACE,
            Self::Debug => tracing_subscriber::filter::LevelFilter::DEBUG,
            Self::Info => tracing_subscriber::filter::LevelFilter::INFO,
            Self::Warn => tracing_subscriber::filter::LevelFilter::WARN,
            Self::Error => tracing_subscriber::filter::LevelFilter::ERROR,
            Self::Off => tracing_subscriber::filter::LevelFilter::OFF,
        }
    }
}

pub fn set_up_logging(level: Level, file: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let writer = if let Some(path) = file {
        let file = File::options().create(true).append(true).open(path)?;
        BoxMakeWriter::new(Mutex::new(file))
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };

    let (text_sub, json_sub) = if json {
        (None, Some(tracing_subscriber::fmt::layer().json().with_writer(writer)))
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(file.is_none())
            .with_writer(writer);
        (Some(layer), None)
    };

    let sub = tracing_subscriber::Registry::default();
    let sub = sub.with(text_sub.with_filter(level.as_level_filter()));
    let sub = sub.with(json_sub.with_filter(level.as_level_filter()));
    tracing::subscriber::set_global_default(sub)?;

    tracing::debug!("logging configured");

    Ok(())
}
