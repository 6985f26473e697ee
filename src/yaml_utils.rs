// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

use std::{fs, path::Path};

use anyhow::{Context, Error};
use saphyr::{Yaml, YamlEmitter, YamlLoader};

const DOCUMENT_START: &str = "---\n";

pub fn yaml_load_from_file(filename: &Path) -> Result<Vec<Yaml>, Error> {
    let input = fs::read_to_string(filename).with_context(|| format!("failed to read {}", filename.display()))?;
    let docs = YamlLoader::load_from_str(&input).with_context(|| format!("failed to parse {}", filename.display()))?;
    Ok(docs)
}

// Block style, keys in insertion order, no document marker, single trailing newline.
pub fn yaml_emit_to_string(doc: &Yaml) -> Result<String, Error> {
    let mut out_str = String::new();
    let mut emitter = YamlEmitter::new(&mut out_str);
    emitter.dump(doc)?;

    let mut out_str = match out_str.strip_prefix(DOCUMENT_START) {
        Some(body) => body.to_string(),
        None => out_str,
    };
    out_str.push('\n');
    Ok(out_str)
}

pub fn yaml_emit_to_file(doc: &Yaml, filename: &Path) -> Result<(), Error> {
    let out = yaml_emit_to_string(doc)?;
    fs::write(filename, out).with_context(|| format!("failed to write {}", filename.display()))?;
    Ok(())
}
