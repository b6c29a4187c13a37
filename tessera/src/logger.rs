//! Module provides initialization of global application logger

use chrono::{Local, SecondsFormat};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;

use tessera_core::error::{Context, Error, Result};

/// Initializes the global logger for an application.
///
/// Messages are written both to the console and to the new file in `logs` directory.
///
/// # Errors
/// An error is returned if log file cannot be created
/// or if logger has already been initialized.
///
pub fn init(level: LevelFilter) -> Result<Handle> {
    let pattern = "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} >> {m}{n}";
    let encoder = Box::new(PatternEncoder::new(pattern));

    let stdout = ConsoleAppender::builder().encoder(encoder.clone()).build();
    let file_name = format!(
        "logs/logfile_{}.log",
        Local::now()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .replace(':', "-"),
    );
    let file = FileAppender::builder()
        .encoder(encoder)
        .build(&file_name)
        .with_context(|| format!("cannot create log file {}", file_name))?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(Root::builder().appenders(["stdout", "file"]).build(level))
        .map_err(|errors| Error::msg(format!("wrong logger configuration: {}", errors)))?;
    log4rs::init_config(config).context("cannot initialize logger")
}
