//! Property-based tests for merge guarantees: idempotence, value
//! preservation, and structure adoption over generated configuration files.

use inimerge::line::Line;
use inimerge::merge::merge;
use inimerge::render::render_lines;
use inimerge::scan::scan;
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Generated configuration file: unique section names, unique keys per
/// section, digit values. Keeps identity unambiguous so properties can be
/// stated exactly.
fn file_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_map(
        "[a-z]{1,6}",
        proptest::collection::btree_map("[a-z]{1,4}", "[0-9]{1,3}", 0..5),
        0..4,
    )
    .prop_map(|sections: BTreeMap<String, BTreeMap<String, String>>| {
        let mut lines = Vec::new();
        for (name, keys) in sections {
            lines.push(format!("[{}]", name));
            for (key, value) in keys {
                lines.push(format!("{}={}", key, value));
            }
        }
        lines
    })
}

fn config_entries(lines: &[Line]) -> Vec<(String, String, String)> {
    lines
        .iter()
        .filter_map(|line| match line {
            Line::Config {
                section,
                key,
                value,
                ..
            } => Some((section.clone(), key.clone(), value.clone())),
            _ => None,
        })
        .collect()
}

/// Merging a template into an already-merged result changes nothing.
#[test]
fn test_merge_idempotence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(file_strategy(), file_strategy()),
            |(template_raw, target_raw)| {
                let template = scan(&template_raw).unwrap();
                let target = scan(&target_raw).unwrap();

                let once = merge(&template, &target).unwrap();
                let twice = merge(&template, &once).unwrap();

                assert_eq!(once, twice);
                Ok(())
            },
        )
        .unwrap();
}

/// Every value the target already has survives the merge unchanged.
#[test]
fn test_value_preservation_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(file_strategy(), file_strategy()),
            |(template_raw, target_raw)| {
                let template = scan(&template_raw).unwrap();
                let target = scan(&target_raw).unwrap();
                let merged = merge(&template, &target).unwrap();

                let merged_entries = config_entries(&merged);
                for (section, key, value) in config_entries(&target) {
                    let found = merged_entries
                        .iter()
                        .find(|(s, k, _)| *s == section && *k == key)
                        .unwrap_or_else(|| panic!("{}/{} missing from merge", section, key));
                    assert_eq!(found.2, value);
                }
                Ok(())
            },
        )
        .unwrap();
}

/// Every template line is locatable in the merged output by identity.
#[test]
fn test_structure_adoption_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(file_strategy(), file_strategy()),
            |(template_raw, target_raw)| {
                let template = scan(&template_raw).unwrap();
                let target = scan(&target_raw).unwrap();
                let merged = merge(&template, &target).unwrap();

                for line in &template {
                    assert!(
                        merged.iter().any(|m| m.id() == line.id()),
                        "template line missing from merge: {:?}",
                        line
                    );
                }
                Ok(())
            },
        )
        .unwrap();
}

/// Classifying rendered output reproduces the same classified lines.
#[test]
fn test_render_scan_roundtrip_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&file_strategy(), |raw| {
            let lines = scan(&raw).unwrap();
            let rendered = render_lines(&lines);
            let rescanned = scan(&rendered).unwrap();
            assert_eq!(lines, rescanned);
            Ok(())
        })
        .unwrap();
}
