use std::path::PathBuf;

#[derive(Debug)]
pub enum TemplateOperation {
    Copy { source: PathBuf, target: PathBuf, target_exists: bool },
    Write { target: PathBuf, content: String, target_exists: bool },
    CreateDirectory { target: PathBuf, target_exists: bool },
    Ignore { source: PathBuf },
}

impl TemplateOperation {
    /// Returns the target path for this operation, used for error context.
    pub fn target_path(&self) -> Option<&PathBuf> {
        match self {
            TemplateOperation::Copy { target, .. } => Some(target),
            TemplateOperation::Write { target, .. } => Some(target),
            TemplateOperation::CreateDirectory { target, .. } => Some(target),
            TemplateOperation::Ignore { .. } => None,
        }
    }

    /// Gets a message describing the operation and its status.
    ///
    /// # Arguments
    /// * `user_confirmed_overwrite` - Whether the user has confirmed overwriting existing files
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, user_confirmed_overwrite: bool, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            TemplateOperation::Copy { source, target, target_exists } => {
                if *target_exists {
                    if user_confirmed_overwrite {
                        format!(
                            "{}Copying '{}' to '{}' (overwriting existing file)",
                            prefix,
                            source.display(),
                            target.display()
                        )
                    } else {
                        format!(
                            "{}Skipping copy of '{}' to '{}' (target already exists)",
                            prefix,
                            source.display(),
                            target.display()
                        )
                    }
                } else {
                    format!(
                        "{}Copying '{}' to '{}'",
                        prefix,
                        source.display(),
                        target.display()
                    )
                }
            }

            TemplateOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "{}Skipping directory creation '{}' (already exists)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Creating directory '{}'", prefix, target.display())
                }
            }

            TemplateOperation::Write { target, target_exists, .. } => {
                if *target_exists {
                    if user_confirmed_overwrite {
                        format!(
                            "{}Writing to '{}' (overwriting existing file)",
                            prefix,
                            target.display()
                        )
                    } else {
                        format!(
                            "{}Skipping write to '{}' (target already exists)",
                            prefix,
                            target.display()
                        )
                    }
                } else {
                    format!("{}Writing to '{}'", prefix, target.display())
                }
            }

            TemplateOperation::Ignore { source } => {
                format!(
                    "{}Ignoring '{}' (matches ignore pattern)",
                    prefix,
                    source.display()
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_operation_overwrite_message() {
        let target = PathBuf::from("/tmp/rs/day_05/src/lib.rs");
        let expected =
            format!("Writing to '{}' (overwriting existing file)", &target.display());

        let write = TemplateOperation::Write {
            target,
            target_exists: true,
            content: "".to_string(),
        };
        assert_eq!(write.get_message(true, false), expected);
    }

    #[test]
    fn write_operation_skips_without_confirmation() {
        let target = PathBuf::from("/tmp/rs/day_05/src/lib.rs");
        let expected =
            format!("Skipping write to '{}' (target already exists)", &target.display());

        let write = TemplateOperation::Write {
            target,
            target_exists: true,
            content: "".to_string(),
        };
        assert_eq!(write.get_message(false, false), expected);
    }

    #[test]
    fn dry_run_prefixes_messages() {
        let copy = TemplateOperation::Copy {
            source: PathBuf::from("/tmp/pack/README.md"),
            target: PathBuf::from("/tmp/rs/day_05/README.md"),
            target_exists: false,
        };
        let dry_run_message = copy.get_message(false, true);
        let normal_message = copy.get_message(false, false);

        assert!(dry_run_message.starts_with("[DRY RUN] "));
        assert_eq!(dry_run_message, format!("[DRY RUN] {}", normal_message));
    }

    #[test]
    fn target_path_returns_none_for_ignore() {
        let op = TemplateOperation::Ignore { source: PathBuf::from("/tmp/.forgeignore") };
        assert_eq!(op.target_path(), None);
    }

    #[test]
    fn target_path_returns_target_for_write() {
        let target = PathBuf::from("/tmp/ts/day_05/day.ts");
        let op = TemplateOperation::Write {
            target: target.clone(),
            content: "content".to_string(),
            target_exists: false,
        };
        assert_eq!(op.target_path(), Some(&target));
    }
}
