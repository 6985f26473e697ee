// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

mod file_name_template;
mod logging;
mod playbook;
mod reorder;
mod splitter;
mod yaml_utils;

use std::{path::PathBuf, process};

use anyhow::{anyhow, Error};
use clap::{error::ErrorKind, value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::info;

use file_name_template::{FileNameTemplate, DEFAULT_FILE_NAME_TEMPLATE};
use logging::init_logging;
use reorder::DEFAULT_MARKER_KEY;
use splitter::Splitter;

const USAGE: &str = "Usage: playsplit <input_playbook.yaml> <target_folder>";

fn main() -> Result<(), Error> {
    let matches = match build_command().try_get_matches() {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(err) => {
            println!("{}", USAGE);
            eprint!("{}", err);
            process::exit(1);
        }
    };

    init_logging(matches.get_count("verbose"));

    let input = required::<PathBuf>(&matches, "input")?;
    let output = required::<PathBuf>(&matches, "output")?;
    let marker = required::<String>(&matches, "marker")?;
    let name_template = FileNameTemplate::parse(required::<String>(&matches, "name-template")?)?;

    let splitter = Splitter::new(marker, name_template).quiet(matches.get_flag("quiet"));
    let report = splitter.process(input, output)?;
    info!(written = report.written.len(), skipped = report.skipped, "split finished");
    Ok(())
}

fn build_command() -> Command {
    Command::new("playsplit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Splits a list of playbooks into one YAML file per playbookId")
        .arg(
            Arg::new("input")
                .value_name("input_playbook.yaml")
                .help("YAML file holding a list of {playbookId, playbookData} records")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .value_name("target_folder")
                .help("Directory to write the playbooks to, created if missing")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("marker")
                .long("marker")
                .value_name("KEY")
                .help("Entries holding this key are moved to the front of each playbook")
                .default_value(DEFAULT_MARKER_KEY),
        )
        .arg(
            Arg::new("name-template")
                .long("name-template")
                .value_name("TEMPLATE")
                .help("Output file name, ${{ id }} is replaced by the playbookId")
                .default_value(DEFAULT_FILE_NAME_TEMPLATE),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not print progress")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more detail to stderr, repeat for more")
                .action(ArgAction::Count),
        )
}

fn required<'a, T: Clone + Send + Sync + 'static>(matches: &'a ArgMatches, id: &str) -> Result<&'a T, Error> {
    matches.get_one::<T>(id).ok_or_else(|| anyhow!("missing argument {}", id))
}
