mod codec;
mod driver;
mod error;
mod logger;
mod region;
mod types;

use clap::Parser;
use driver::{Mode, Report, VdiFile};
use std::{path::PathBuf, process::ExitCode};

use crate::error::Result;

/// Change the internal UUID for VirtualBox VDI file
#[derive(Parser)]
#[command(version, about, arg_required_else_help(true))]
struct Args {
    /// display debug info
    #[arg(short = 'D', long)]
    debug: bool,

    /// display verbose info
    #[arg(short, long)]
    verbose: bool,

    /// just read the current UUID
    #[arg(short, long, conflicts_with = "uuid")]
    read: bool,

    /// new UUID to store in file
    #[arg(short, long, value_name = "UUID")]
    uuid: Option<String>,

    /// print the result as a JSON report
    #[arg(long)]
    json: bool,

    #[arg(value_name = "FILE.vdi")]
    file: PathBuf,
}

impl Args {
    fn mode(&self) -> Mode {
        if self.read {
            Mode::Read
        } else {
            Mode::Write {
                requested: self.uuid.clone(),
            }
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(logger::level_filter(args.debug, args.verbose));

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mode = args.mode();

    let uuid = {
        let mut vdi = VdiFile::open(&args.file)?;
        vdi.run(&mode)?
    };

    let report = Report {
        path: &args.file,
        mode: mode.kind(),
        uuid,
    };

    if args.json {
        println!("{}", report.to_json()?);
    } else if mode == Mode::Read {
        println!("{}", report);
    }

    Ok(())
}
