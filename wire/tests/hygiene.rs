//! Hygiene: enforces coding standards at test time.
//!
//! Scans `wire/src/` (test files excluded) for patterns that would let a
//! malformed backend response crash a client, or that would pull I/O into a
//! crate that must stay transport-free. Every budget is zero.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

// Panics.
const PANIC_BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "propagate with ? or map to ApiError" },
    Budget { pattern: ".expect(", max: 0, why: "propagate with ? or map to ApiError" },
    Budget { pattern: "panic!(", max: 0, why: "return an error instead" },
    Budget { pattern: "unreachable!(", max: 0, why: "make the match exhaustive" },
    Budget { pattern: "todo!(", max: 0, why: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "finish the stub" },
];

// Silent loss.
const DISCARD_BUDGETS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0, why: "inspect the result" },
    Budget { pattern: ".ok()", max: 0, why: "inspect the error" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete the item" },
];

// Transport belongs to client and cli.
const IO_BUDGETS: &[Budget] = &[
    Budget { pattern: "std::fs", max: 0, why: "wire performs no I/O" },
    Budget { pattern: "std::net", max: 0, why: "wire performs no I/O" },
    Budget { pattern: "reqwest", max: 0, why: "wire performs no I/O" },
    Budget { pattern: "gloo_net", max: 0, why: "wire performs no I/O" },
];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the wire crate root");
    let mut failures = Vec::new();
    for budget in budgets {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let listing = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "`{}` found {count}, max {} ({})\n{listing}",
                budget.pattern, budget.max, budget.why
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn panic_budgets() {
    check(PANIC_BUDGETS);
}

#[test]
fn discard_budgets() {
    check(DISCARD_BUDGETS);
}

#[test]
fn io_budgets() {
    check(IO_BUDGETS);
}
