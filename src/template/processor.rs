use globset::GlobSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::TEMPLATE_SUFFIX;
use crate::error::{Error, Result};
use crate::ioutils::path_to_str;
use crate::renderer::TemplateRenderer;

use super::builtin::BuiltinTemplate;
use super::operation::TemplateOperation;

/// Validates whether the rendered path is properly rendered by comparing its
/// components with those of the original template path. The validation
/// ensures no parts of the path are empty after rendering.
///
/// # Examples
///
/// Valid case:
/// - Template path: `pack/{{ package_name }}/lib.rs.j2`
/// - Rendered path: `pack/day_05/lib.rs.j2`
///
/// Invalid case (empty part after rendering):
/// - Template path: `pack/{{ package_name }}/lib.rs.j2`
/// - Rendered path: `pack//lib.rs.j2`
fn has_valid_rendered_path_parts<S: AsRef<str>>(template_path: S, rendered_path: S) -> bool {
    let template_parts: Vec<&str> =
        template_path.as_ref().split(std::path::MAIN_SEPARATOR).collect();
    let rendered_parts: Vec<&str> =
        rendered_path.as_ref().split(std::path::MAIN_SEPARATOR).collect();

    for (template_part, rendered_part) in template_parts.iter().zip(rendered_parts.iter())
    {
        if !template_part.is_empty() && rendered_part.is_empty() {
            return false;
        }
    }

    true
}

/// Checks if the provided path is a template file (with .j2 extension).
fn is_template_file<T: AsRef<Path>>(path: T) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|file_name| file_name.ends_with(TEMPLATE_SUFFIX))
}

/// Removes the `.j2` suffix from a template file path.
fn remove_template_suffix(target_path: &Path) -> Result<PathBuf> {
    let target_path_str = path_to_str(target_path)?;
    let target = target_path_str.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(target_path_str);

    Ok(PathBuf::from(target))
}

/// Plans the write operation for one built-in template entry.
///
/// Built-in entries have no backing file on disk, so every entry becomes a
/// `Write`: templated entries are rendered, anything else is written out
/// verbatim.
pub fn plan_builtin_entry(
    engine: &dyn TemplateRenderer,
    entry: &BuiltinTemplate,
    output_root: &Path,
    answers: &serde_json::Value,
) -> Result<TemplateOperation> {
    let rendered_entry = engine.render(entry.rel_path, answers)?;

    if !has_valid_rendered_path_parts(entry.rel_path, rendered_entry.as_str()) {
        return Err(Error::ProcessError {
            source_path: rendered_entry,
            e: "The rendered path is not valid".to_string(),
        });
    }

    let target_path = output_root.join(&rendered_entry);
    let is_template = is_template_file(&target_path);
    let target = remove_template_suffix(&target_path)?;
    let target_exists = target.exists();

    let content = if is_template {
        engine.render(entry.contents, answers)?
    } else {
        entry.contents.to_string()
    };

    Ok(TemplateOperation::Write { target, content, target_exists })
}

/// Processes a user-supplied template pack directory.
pub struct TemplateProcessor<'a, P: AsRef<Path>> {
    engine: &'a dyn TemplateRenderer,
    forgeignore: &'a GlobSet,

    template_root: P,
    output_root: P,
    answers: &'a serde_json::Value,
}

impl<'a, P: AsRef<Path>> TemplateProcessor<'a, P> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        template_root: P,
        output_root: P,
        answers: &'a serde_json::Value,
        forgeignore: &'a GlobSet,
    ) -> Self {
        Self { engine, template_root, output_root, answers, forgeignore }
    }

    /// Renders a template entry path with template variables.
    fn render_template_entry(&self, template_entry: &PathBuf) -> Result<PathBuf> {
        let rendered_entry = self.engine.render_path(template_entry, self.answers)?;

        if !has_valid_rendered_path_parts(path_to_str(template_entry)?, &rendered_entry) {
            return Err(Error::ProcessError {
                source_path: rendered_entry.to_string(),
                e: "The rendered path is not valid".to_string(),
            });
        }

        Ok(PathBuf::from(rendered_entry))
    }

    /// Constructs the target path for a rendered entry.
    fn get_target_path(
        &self,
        rendered_entry: &Path,
        template_entry: &Path,
    ) -> Result<PathBuf> {
        let target_path = rendered_entry
            .strip_prefix(self.template_root.as_ref())
            .map_err(|e| Error::ProcessError {
                source_path: template_entry.display().to_string(),
                e: e.to_string(),
            })?;
        Ok(self.output_root.as_ref().join(target_path))
    }

    /// Processes a template entry and determines the appropriate operation.
    pub fn process(&self, template_entry: P) -> Result<TemplateOperation> {
        let template_entry = template_entry.as_ref().to_path_buf();
        let rendered_entry = self.render_template_entry(&template_entry)?;
        let target_path = self.get_target_path(&rendered_entry, &template_entry)?;
        let target_exists = target_path.exists();

        // Skip if entry is in .forgeignore
        if self.forgeignore.is_match(&template_entry) {
            return Ok(TemplateOperation::Ignore { source: rendered_entry });
        }

        match (template_entry.is_file(), is_template_file(&rendered_entry)) {
            // Template file
            (true, true) => {
                let template_content = fs::read_to_string(&template_entry)?;
                let content = self.engine.render(&template_content, self.answers)?;

                Ok(TemplateOperation::Write {
                    target: remove_template_suffix(&target_path)?,
                    content,
                    target_exists,
                })
            }
            // Regular file
            (true, false) => Ok(TemplateOperation::Copy {
                source: template_entry,
                target: target_path,
                target_exists,
            }),
            // Directory
            _ => Ok(TemplateOperation::CreateDirectory {
                target: target_path,
                target_exists,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use fs::File;
    use serde_json::json;
    use tempfile::TempDir;

    use crate::{
        ignore::parse_forgeignore_file, renderer::MiniJinjaRenderer,
        template::operation::TemplateOperation,
    };

    use super::*;

    /// The template structure
    /// template_root/
    ///   {{package_name}}.txt.j2
    ///
    /// Expected output
    /// output_root/
    ///   day_05.txt
    #[test]
    fn renders_templated_file_names_and_contents() {
        let answers = json!({"package_name": "day_05", "display_name": "Day 05"});
        let template_root = TempDir::new().unwrap();
        let template_root = template_root.path();

        let output_root = TempDir::new().unwrap();
        let output_root = output_root.path();

        let file_path = template_root.join("{{package_name}}.txt.j2");

        let mut temp_file = File::create(&file_path).unwrap();
        temp_file.write_all(b"{{display_name}}").unwrap();

        let engine = MiniJinjaRenderer::new();
        let ignored_patterns = parse_forgeignore_file(template_root).unwrap();
        let processor = TemplateProcessor::new(
            &engine,
            &template_root,
            &output_root,
            &answers,
            &ignored_patterns,
        );

        let result = processor.process(&file_path.as_path()).unwrap();

        match result {
            TemplateOperation::Write { target, content, target_exists } => {
                assert_eq!(target, output_root.join("day_05.txt"));
                assert_eq!(content, "Day 05");
                assert!(!target_exists);
            }
            _ => panic!("Expected Write operation"),
        }
    }

    /// A file without the .j2 suffix is copied as-is, even when its contents
    /// look like a template.
    #[test]
    fn copies_plain_files_untouched() {
        let answers = json!({});
        let template_root = TempDir::new().unwrap();
        let template_root = template_root.path();

        let output_root = TempDir::new().unwrap();
        let output_root = output_root.path();

        let file_path = template_root.join("data.txt");

        let mut temp_file = File::create(&file_path).unwrap();
        temp_file.write_all(b"{{not_rendered}}").unwrap();

        let engine = MiniJinjaRenderer::new();
        let ignored_patterns = parse_forgeignore_file(template_root).unwrap();
        let processor = TemplateProcessor::new(
            &engine,
            &template_root,
            &output_root,
            &answers,
            &ignored_patterns,
        );

        let result = processor.process(&file_path.as_path()).unwrap();

        match result {
            TemplateOperation::Copy { source, target, target_exists } => {
                assert_eq!(source, template_root.join("data.txt"));
                assert_eq!(target, output_root.join("data.txt"));
                assert!(!target_exists);
            }
            _ => panic!("Expected Copy operation"),
        }
    }

    /// The template structure
    /// template_root/
    ///   {{package_name}}/lib.rs.j2
    ///
    /// Expected output
    /// output_root/
    ///   day_09/lib.rs
    #[test]
    fn renders_templated_directory_names() {
        let answers = json!({"package_name": "day_09", "display_name": "Day 09"});
        let template_root = TempDir::new().unwrap();
        let template_root = template_root.path();

        let nested_directory_path = template_root.join("{{package_name}}");
        std::fs::create_dir_all(&nested_directory_path).unwrap();

        let output_root = TempDir::new().unwrap();
        let output_root = output_root.path();

        let file_path = nested_directory_path.join("lib.rs.j2");

        let mut temp_file = File::create(&file_path).unwrap();
        temp_file.write_all(b"// {{display_name}}").unwrap();

        let engine = MiniJinjaRenderer::new();
        let ignored_patterns = parse_forgeignore_file(template_root).unwrap();
        let processor = TemplateProcessor::new(
            &engine,
            &template_root,
            &output_root,
            &answers,
            &ignored_patterns,
        );

        let result = processor.process(&file_path.as_path()).unwrap();

        match result {
            TemplateOperation::Write { content, target, target_exists } => {
                assert_eq!(content, "// Day 09");
                assert_eq!(target, output_root.join("day_09").join("lib.rs"));
                assert!(!target_exists);
            }
            _ => panic!("Expected Write operation"),
        }
    }

    /// A path component that renders to nothing is rejected.
    #[test]
    fn rejects_paths_with_empty_rendered_parts() {
        let answers = json!({});
        let template_root = TempDir::new().unwrap();
        let template_root = template_root.path();

        let nested_directory_path = template_root.join("{{package_name}}");
        std::fs::create_dir_all(&nested_directory_path).unwrap();

        let output_root = TempDir::new().unwrap();
        let output_root = output_root.path();

        let engine = MiniJinjaRenderer::new();
        let ignored_patterns = parse_forgeignore_file(template_root).unwrap();
        let processor = TemplateProcessor::new(
            &engine,
            &template_root,
            &output_root,
            &answers,
            &ignored_patterns,
        );

        let result = processor.process(&nested_directory_path.as_path());
        match result {
            Err(Error::ProcessError { e, .. }) => {
                assert_eq!(e, "The rendered path is not valid");
            }
            _ => panic!("Expected ProcessError"),
        }
    }

    /// Entries matched by .forgeignore become Ignore operations.
    #[test]
    fn ignores_entries_matching_forgeignore() {
        let answers = json!({});
        let template_root = TempDir::new().unwrap();
        let template_root = template_root.path();

        std::fs::write(template_root.join(".forgeignore"), "*.swp\n").unwrap();
        let file_path = template_root.join("lib.rs.swp");
        File::create(&file_path).unwrap();

        let output_root = TempDir::new().unwrap();
        let output_root = output_root.path();

        let engine = MiniJinjaRenderer::new();
        let ignored_patterns = parse_forgeignore_file(template_root).unwrap();
        let processor = TemplateProcessor::new(
            &engine,
            &template_root,
            &output_root,
            &answers,
            &ignored_patterns,
        );

        let result = processor.process(&file_path.as_path()).unwrap();
        assert!(matches!(result, TemplateOperation::Ignore { .. }));
    }

    #[test]
    fn builtin_entries_render_path_and_contents() {
        let answers = json!({"package_name": "day_05", "display_name": "Day 05"});
        let output_root = TempDir::new().unwrap();
        let output_root = output_root.path();

        let entry = BuiltinTemplate {
            rel_path: "src/bin/{{ package_name }}.rs.j2",
            contents: "use {{ package_name }}::read_data;",
        };

        let engine = MiniJinjaRenderer::new();
        let result = plan_builtin_entry(&engine, &entry, output_root, &answers).unwrap();

        match result {
            TemplateOperation::Write { target, content, target_exists } => {
                assert_eq!(target, output_root.join("src/bin/day_05.rs"));
                assert_eq!(content, "use day_05::read_data;");
                assert!(!target_exists);
            }
            _ => panic!("Expected Write operation"),
        }
    }

    #[test]
    fn builtin_entries_with_empty_rendered_parts_are_rejected() {
        let answers = json!({});
        let output_root = TempDir::new().unwrap();

        let entry = BuiltinTemplate {
            rel_path: "{{ package_name }}/lib.rs.j2",
            contents: "",
        };

        let engine = MiniJinjaRenderer::new();
        let result = plan_builtin_entry(&engine, &entry, output_root.path(), &answers);
        match result {
            Err(Error::ProcessError { e, .. }) => {
                assert_eq!(e, "The rendered path is not valid");
            }
            _ => panic!("Expected ProcessError"),
        }
    }
}
