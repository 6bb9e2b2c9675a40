use clap::Args;
use std::path::PathBuf;

use restyle::defaults::RestyleConfig;
use restyle::restyle::{self as engine, ConsoleReporter, Reporter, RestyleReport, SilentReporter};
use restyle::Error;

use crate::commands::CmdResult;

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Print the run report as a JSON envelope instead of progress lines
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &RunArgs) -> CmdResult<RestyleReport> {
    let root = working_dir()?;
    let config = RestyleConfig::default();

    let mut reporter: Box<dyn Reporter> = if args.json {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter::stdout())
    };

    let report = engine::run(&root, &config, reporter.as_mut())?;
    Ok((report, 0))
}

fn working_dir() -> restyle::Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        Error::internal_io(e.to_string(), Some("resolve working directory".to_string()))
    })
}
