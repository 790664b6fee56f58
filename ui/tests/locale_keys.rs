//! Every message the UI asks for must exist in every shipped locale.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const LOCALES: &[(&str, &str)] = &[
    ("en-US", include_str!("../i18n/en-US/qrstudio-ui.ftl")),
    ("es-ES", include_str!("../i18n/es-ES/qrstudio-ui.ftl")),
];

/// Message ids defined in a Fluent file, in file order. Terms and comments are skipped.
fn message_ids(ftl: &str) -> Vec<&str> {
    ftl.lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '-']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| {
            !id.is_empty()
                && id
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        })
        .collect()
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Literal ids passed to `t!(...)` anywhere under `src/`.
fn requested_ids() -> BTreeSet<String> {
    let mut files = Vec::new();
    rust_sources(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);

    let mut ids = BTreeSet::new();
    for file in files {
        let source = fs::read_to_string(&file).unwrap_or_default();
        for (at, needle) in source.match_indices("t!(\"") {
            // `format!("` and friends end in the same characters.
            let standalone = source[..at]
                .chars()
                .next_back()
                .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
            let rest = &source[at + needle.len()..];
            if let (true, Some((id, _))) = (standalone, rest.split_once('"')) {
                ids.insert(id.to_string());
            }
        }
    }
    ids
}

#[test]
fn locales_define_each_message_once() {
    for (locale, ftl) in LOCALES {
        let ids = message_ids(ftl);
        let unique: BTreeSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len(), "{locale} repeats a message id");
    }
}

#[test]
fn locales_share_the_same_messages() {
    let (_, fallback) = LOCALES[0];
    let expected: BTreeSet<_> = message_ids(fallback).into_iter().collect();
    for (locale, ftl) in &LOCALES[1..] {
        let ids: BTreeSet<_> = message_ids(ftl).into_iter().collect();
        let missing: Vec<_> = expected.difference(&ids).copied().collect();
        let extra: Vec<_> = ids.difference(&expected).copied().collect();
        assert!(missing.is_empty(), "{locale} is missing {missing:?}");
        assert!(extra.is_empty(), "{locale} has unknown ids {extra:?}");
    }
}

#[test]
fn every_requested_message_is_translated() {
    let requested = requested_ids();
    assert!(requested.contains("toast-logo-unreadable"));
    assert!(requested.contains("nav-analytics"));

    for (locale, ftl) in LOCALES {
        let ids: BTreeSet<String> = message_ids(ftl).into_iter().map(String::from).collect();
        let missing: Vec<_> = requested.difference(&ids).collect();
        assert!(missing.is_empty(), "{locale} lacks {missing:?}");
    }
}
