// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// Output file names, e.g. `playbook_${{ id }}.yaml`.

#[cfg(test)]
mod tests;

use std::{
    ops::Range,
    path::{Component, Path},
};

use anyhow::{anyhow, Error};
use chumsky::{
    error::Simple,
    primitive::{end, filter, just},
    text::{self, TextParser},
    Parser,
};

pub const DEFAULT_FILE_NAME_TEMPLATE: &str = "playbook_${{ id }}.yaml";

const ID_VARIABLE: &str = "id";

#[derive(Clone, Debug, PartialEq, Eq)]
enum TemplatePart {
    Text(String),
    Id,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum RawPart {
    Text(String),
    Variable(String, Range<usize>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileNameTemplate {
    parts: Vec<TemplatePart>,
}

impl FileNameTemplate {
    pub fn parse(template: &str) -> Result<FileNameTemplate, Error> {
        let parser = gen_file_name_template_parser();
        let raw_parts = parser.parse(template).map_err(|errs| {
            let messages: Vec<String> = errs.iter().map(|err| err.to_string()).collect();
            anyhow!("invalid file name template {:?}: {}", template, messages.join("; "))
        })?;

        let mut parts = Vec::new();
        for raw_part in raw_parts {
            let part = match raw_part {
                RawPart::Text(text) => TemplatePart::Text(text),
                RawPart::Variable(name, _) if name == ID_VARIABLE => TemplatePart::Id,
                RawPart::Variable(name, span) => {
                    return Err(anyhow!(
                        "invalid file name template {:?}: unknown variable `{}` at {}..{}",
                        template,
                        name,
                        span.start,
                        span.end
                    ))
                }
            };
            parts.push(part);
        }

        if !parts.contains(&TemplatePart::Id) {
            return Err(anyhow!("file name template {:?} must use ${{{{ {} }}}}", template, ID_VARIABLE));
        }

        Ok(FileNameTemplate { parts })
    }

    pub fn render(&self, id: &str) -> String {
        let mut name = String::new();
        for part in &self.parts {
            match part {
                TemplatePart::Text(text) => name.push_str(text),
                TemplatePart::Id => name.push_str(id),
            }
        }
        name
    }

    // Rendered names must stay inside the output directory.
    pub fn render_checked(&self, id: &str) -> Result<String, Error> {
        let name = self.render(id);
        let mut components = Path::new(&name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(name),
            _ => Err(anyhow!("playbook {:?} gives file name {:?}, which is not a plain file name", id, name)),
        }
    }
}

impl Default for FileNameTemplate {
    fn default() -> Self {
        FileNameTemplate {
            parts: vec![
                TemplatePart::Text("playbook_".to_string()),
                TemplatePart::Id,
                TemplatePart::Text(".yaml".to_string()),
            ],
        }
    }
}

fn gen_file_name_template_parser() -> impl Parser<char, Vec<RawPart>, Error = Simple<char>> {
    let literal = filter(|c: &char| *c != '$')
        .or(just("$$").to('$'))
        .repeated()
        .at_least(1)
        .collect::<String>()
        .map(RawPart::Text)
        .labelled("text");

    let variable = just("${{")
        .ignore_then(text::ident().padded())
        .then_ignore(just("}}"))
        .map_with_span(RawPart::Variable)
        .labelled("placeholder");

    variable.or(literal).repeated().then_ignore(end())
}
