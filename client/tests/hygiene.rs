//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the client crate source tree for antipatterns that would
//! crash the page at runtime or hide failures. Each has a budget (ideally
//! zero). If you must add one, you have to fix an existing one first — the
//! budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics — these abort the WASM module.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent error discards. The remaining ones are classList / listener removal
// results with no recovery, plus SSR stubs that consume hydrate-only inputs.
const MAX_SILENT_DISCARD: usize = 9;
const MAX_DOT_OK: usize = 3;

// Lint suppression.
const MAX_ALLOW_DEAD_CODE: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `client/src/`, excluding test files.
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

fn count_pattern(files: &[SourceFile], pattern: &str) -> (usize, Vec<String>) {
    let mut total = 0;
    let mut hits = Vec::new();
    for file in files {
        for (lineno, line) in file.content.lines().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.starts_with("//") {
                continue;
            }
            if line.contains(pattern) {
                total += 1;
                hits.push(format!("  {}:{}: {}", file.path, lineno + 1, line.trim()));
            }
        }
    }
    (total, hits)
}

fn check(pattern: &str, budget: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no source files found under src/");
    let (count, hits) = count_pattern(&files, pattern);
    assert!(
        count <= budget,
        "`{pattern}` budget exceeded: found {count}, budget {budget}\n{}",
        hits.join("\n")
    );
}

#[test]
fn unwrap_budget() {
    check(".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    check(".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    check("panic!(", MAX_PANIC);
}

#[test]
fn unreachable_budget() {
    check("unreachable!(", MAX_UNREACHABLE);
}

#[test]
fn todo_budget() {
    check("todo!(", MAX_TODO);
}

#[test]
fn unimplemented_budget() {
    check("unimplemented!(", MAX_UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check("let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(".ok()", MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    check("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}
