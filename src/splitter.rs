// Copyright (c) Chris Gunn.
// Licensed under the MIT license.


use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Error};
use saphyr::Yaml;
use tracing::{debug, info};

use crate::{
    file_name_template::FileNameTemplate,
    playbook::{playbook_records, read_playbook},
    reorder::{marker_first, DEFAULT_MARKER_KEY},
    yaml_utils::{yaml_emit_to_file, yaml_load_from_file},
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplitReport {
    pub written: Vec<PathBuf>,
    pub skipped: usize,
}

/// Splits a list of playbooks into one file per `playbookId`.
pub struct Splitter {
    marker: String,
    name_template: FileNameTemplate,
    quiet: bool,
}

impl Splitter {
    pub fn new(marker: &str, name_template: FileNameTemplate) -> Splitter {
        Splitter {
            marker: marker.to_string(),
            name_template,
            quiet: false,
        }
    }

    /// Suppresses the progress lines printed to stdout.
    pub fn quiet(mut self, quiet: bool) -> Splitter {
        self.quiet = quiet;
        self
    }

    /// Writes `playbookData` of every usable record to its own file in `output_dir`.
    ///
    /// Each record's entries are reordered so the ones holding the marker key
    /// come first. Stops at the first error; files written before it are kept.
    pub fn process(&self, input: &Path, output_dir: &Path) -> Result<SplitReport, Error> {
        let docs = yaml_load_from_file(input)?;
        let records = playbook_records(docs).with_context(|| format!("invalid input {}", input.display()))?;
        self.progress(format_args!("Processing {}", input.display()));

        fs::create_dir_all(output_dir)
            .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

        let mut report = SplitReport::default();
        for (index, record) in records.iter().enumerate() {
            let playbook = read_playbook(index, record).with_context(|| format!("invalid input {}", input.display()))?;
            let Some(playbook) = playbook else {
                report.skipped += 1;
                continue;
            };

            let entries = marker_first(&playbook.entries, &self.marker);
            debug!(id = %playbook.id, entries = entries.len(), "reordered playbook");

            let file_name = self.name_template.render_checked(&playbook.id)?;
            let filename = output_dir.join(file_name);
            yaml_emit_to_file(&Yaml::Array(entries), &filename)?;

            info!(id = %playbook.id, file = %filename.display(), "wrote playbook");
            self.progress(format_args!("Wrote {}", filename.display()));
            report.written.push(filename);
        }

        self.progress(format_args!("Process completed."));
        Ok(report)
    }

    fn progress(&self, message: std::fmt::Arguments) {
        if !self.quiet {
            println!("{}", message);
        }
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Splitter::new(DEFAULT_MARKER_KEY, FileNameTemplate::default())
    }
}
