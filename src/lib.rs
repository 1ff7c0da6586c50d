/// Handles argument parsing and orchestration.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants used throughout the application.
pub mod constants;

/// The per-day rendering context.
pub mod context;

/// Downloads puzzle input and instruction pages.
pub mod aoc;

/// Encrypted mirrors of the downloaded inputs.
pub mod mirror;

/// Converts instruction HTML into Markdown READMEs.
pub mod instructions;

/// Processes .forgeignore files to exclude specific paths.
pub mod ignore;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Overwrite confirmation prompts.
pub mod prompt;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Core template processing orchestration.
pub mod template;

/// Configuration file handling.
pub mod config;
