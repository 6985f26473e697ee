// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

use hashlink::LinkedHashMap;
use saphyr::Yaml;

pub const DEFAULT_MARKER_KEY: &str = "hosts";

/// Moves every entry holding the `marker` key in front of the others.
///
/// This is a stable partition: marked entries keep their relative order, as do
/// the unmarked ones. Entries that are not maps are never marked.
pub fn marker_first(entries: &[Yaml], marker: &str) -> Vec<Yaml> {
    let marker = Yaml::String(marker.to_string());
    let (mut marked, unmarked): (Vec<Yaml>, Vec<Yaml>) =
        entries.iter().cloned().partition(|entry| has_marker(entry, &marker));
    marked.extend(unmarked);
    marked
}

fn has_marker(entry: &Yaml, marker: &Yaml) -> bool {
    entry
        .as_hash()
        .is_some_and(|map: &LinkedHashMap<Yaml, Yaml>| map.contains_key(marker))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use saphyr::YamlLoader;

    use super::*;

    fn entries(input: &str) -> Vec<Yaml> {
        let mut docs = YamlLoader::load_from_str(input).unwrap();
        match docs.remove(0) {
            Yaml::Array(entries) => entries,
            _ => panic!("test input must be a list"),
        }
    }

    #[test]
    fn hosts_moves_to_front() {
        let actual = marker_first(&entries("[{task: x}, {hosts: web}]"), DEFAULT_MARKER_KEY);
        assert_eq!(entries("[{hosts: web}, {task: x}]"), actual);
    }

    #[test]
    fn all_marked_entries_move_up() {
        let input = entries("[{name: A}, {name: B, hosts: b}, {name: C}, {name: D, hosts: d}]");
        let expected = entries("[{name: B, hosts: b}, {name: D, hosts: d}, {name: A}, {name: C}]");
        assert_eq!(expected, marker_first(&input, DEFAULT_MARKER_KEY));
    }

    #[test]
    fn no_marker_keeps_order() {
        let input = entries("[{name: A}, {name: B}, {name: C}]");
        assert_eq!(input, marker_first(&input, DEFAULT_MARKER_KEY));
    }

    #[test]
    fn marker_in_value_or_scalar_does_not_count() {
        let input = entries("[{name: hosts}, hosts, {vars: {hosts: x}}, {hosts: web}]");
        let expected = entries("[{hosts: web}, {name: hosts}, hosts, {vars: {hosts: x}}]");
        assert_eq!(expected, marker_first(&input, DEFAULT_MARKER_KEY));
    }

    #[test]
    fn custom_marker() {
        let input = entries("[{hosts: web}, {import_playbook: base.yaml}]");
        let expected = entries("[{import_playbook: base.yaml}, {hosts: web}]");
        assert_eq!(expected, marker_first(&input, "import_playbook"));
    }

    #[test]
    fn empty_entries() {
        assert_eq!(Vec::<Yaml>::new(), marker_first(&[], DEFAULT_MARKER_KEY));
    }
}
