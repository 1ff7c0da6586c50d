//! Template processing engine for dayforge
//!
//! This module contains the core template processing components:
//! - `builtin`: The template packs shipped inside the binary
//! - `operation`: Defines operations to be performed on templates
//! - `processor`: Contains the logic for processing template files and directories

pub mod builtin;
pub mod operation;
pub mod processor;
