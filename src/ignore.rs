use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

use crate::constants::IGNORE_FILE;
use crate::error::Result;
use crate::ioutils::path_to_str;

/// Default patterns to always ignore during template processing
const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".git/**",
    ".git",
    "**/.DS_Store",
    ".forgeignore",
];

/// Reads and processes the .forgeignore file of a user-supplied template
/// pack to create a set of glob patterns.
pub fn parse_forgeignore_file<P: AsRef<Path>>(template_root: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    let template_root = template_root.as_ref();
    let forgeignore_path = template_root.join(IGNORE_FILE);

    let mut patterns: Vec<String> = Vec::new();
    for pattern in DEFAULT_IGNORE_PATTERNS {
        patterns.push(path_to_str(&template_root.join(pattern))?.to_string());
    }

    if let Ok(contents) = read_to_string(forgeignore_path) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            patterns.push(path_to_str(&template_root.join(line))?.to_string());
        }
    } else {
        debug!("No .forgeignore file found, using default patterns.");
    }

    for pattern in &patterns {
        builder.add(Glob::new(pattern)?);
    }

    Ok(builder.build()?)
}
