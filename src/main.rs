mod app;
mod calendar;
mod details;
mod festival;
mod help;
mod nav;
mod theme;
use crate::app::App;
use crate::festival::FestivalIndex;
use crate::nav::Selection;
use anyhow::Context;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        date: Option<Date>,
        festivals: Option<PathBuf>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut festivals = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('f') | Arg::Long("festivals") => {
                    festivals = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            date,
            festivals,
            log_file,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                date,
                festivals,
                log_file,
            } => {
                let _logger = init_logging(log_file)?;
                let festivals = match festivals {
                    Some(path) => FestivalIndex::load(&path).with_context(|| {
                        format!("failed to load festivals from {}", path.display())
                    })?,
                    None => FestivalIndex::bundled().context("bundled festival data is invalid")?,
                };
                if festivals.is_empty() {
                    log::warn!("No festivals loaded");
                }
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let mut selection = Selection::new(today);
                if let Some(date) = date {
                    selection = selection.start_month(date);
                }
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(festivals, today, selection).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: festcal [options] [YYYY-MM-DD]");
                println!();
                println!("Terminal month calendar highlighting festivals");
                println!();
                println!("Options:");
                println!("  -f, --festivals <FILE>  Read festivals from the given JSON file");
                println!("      --log-file <FILE>   Write log messages to the given file");
                println!("  -h, --help              Display this help message and exit");
                println!("  -V, --version           Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn init_logging(log_file: Option<PathBuf>) -> anyhow::Result<LoggerHandle> {
    let mut logger =
        Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL).context("invalid log specification")?;
    if let Some(path) = log_file {
        logger = logger.log_to_file(FileSpec::try_from(path).context("invalid log file path")?);
    }
    logger.start().context("failed to start logger")
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
