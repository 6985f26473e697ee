// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// Reads the playbook records of an input document.


use anyhow::{anyhow, Error};
use saphyr::Yaml;
use tracing::{debug, warn};

pub const PLAYBOOK_ID_KEY: &str = "playbookId";
pub const PLAYBOOK_DATA_KEY: &str = "playbookData";

#[derive(Clone, Debug, PartialEq)]
pub struct Playbook {
    pub id: String,
    pub entries: Vec<Yaml>,
}

pub fn playbook_records(docs: Vec<Yaml>) -> Result<Vec<Yaml>, Error> {
    let mut docs = docs.into_iter();
    let (Some(doc), None) = (docs.next(), docs.next()) else {
        return Err(anyhow!("input must contain exactly one yaml document"));
    };

    match doc {
        Yaml::Array(records) => Ok(records),
        _ => Err(anyhow!("input root must be a list of playbooks")),
    }
}

// Ok(None) means the record has no usable id or no entries and produces no file.
pub fn read_playbook(index: usize, record: &Yaml) -> Result<Option<Playbook>, Error> {
    if record.as_hash().is_none() {
        return Err(anyhow!("playbook #{} is not a map", index));
    }

    let Some(id) = playbook_id(index, &record[PLAYBOOK_ID_KEY]) else {
        debug!(index, "playbook has no {}, skipping", PLAYBOOK_ID_KEY);
        return Ok(None);
    };

    let entries = match &record[PLAYBOOK_DATA_KEY] {
        Yaml::Array(entries) if !entries.is_empty() => entries.clone(),
        Yaml::Array(_) | Yaml::Null | Yaml::BadValue => {
            debug!(index, id = %id, "playbook has no {}, skipping", PLAYBOOK_DATA_KEY);
            return Ok(None);
        }
        _ => {
            warn!(index, id = %id, "{} is not a list, skipping", PLAYBOOK_DATA_KEY);
            return Ok(None);
        }
    };

    Ok(Some(Playbook { id, entries }))
}

fn playbook_id(index: usize, value: &Yaml) -> Option<String> {
    match value {
        Yaml::String(id) if !id.is_empty() => Some(id.clone()),
        Yaml::Integer(id) if *id != 0 => Some(id.to_string()),
        Yaml::Real(_) => value.as_f64().filter(|real| *real != 0.0).map(|real| format!("{:?}", real)),
        Yaml::Boolean(true) => Some("True".to_string()),
        Yaml::String(_) | Yaml::Integer(_) | Yaml::Boolean(false) | Yaml::Null | Yaml::BadValue => None,
        _ => {
            warn!(index, "{} is not a string or number", PLAYBOOK_ID_KEY);
            None
        }
    }
}
