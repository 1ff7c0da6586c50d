use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    prompt::confirm,
    renderer::TemplateRenderer,
    template::{
        builtin::BuiltinTemplate,
        operation::TemplateOperation,
        processor::{plan_builtin_entry, TemplateProcessor},
    },
};

/// Handles the execution of planned template operations.
pub struct FileProcessor {
    force: bool,
    dry_run: bool,
}

impl FileProcessor {
    pub fn new(force: bool, dry_run: bool) -> Self {
        Self { force, dry_run }
    }

    /// Renders a built-in template pack into the output directory.
    pub fn process_builtin_pack(
        &self,
        engine: &dyn TemplateRenderer,
        pack: &[BuiltinTemplate],
        output_root: &Path,
        answers: &serde_json::Value,
    ) -> Result<()> {
        for entry in pack {
            let file_operation = plan_builtin_entry(engine, entry, output_root, answers)?;
            let user_confirmed_overwrite = self.handle_file_operation(&file_operation)?;
            let message = file_operation.get_message(user_confirmed_overwrite, self.dry_run);
            log::info!("{message}");
        }
        Ok(())
    }

    /// Processes all files of a user-supplied template pack directory.
    pub fn process_pack_dir(
        &self,
        processor: &TemplateProcessor<'_, PathBuf>,
        template_root: &Path,
    ) -> Result<()> {
        for dir_entry in WalkDir::new(template_root) {
            let template_entry = dir_entry?.path().to_path_buf();
            match processor.process(template_entry) {
                Ok(file_operation) => {
                    let user_confirmed_overwrite = match &file_operation {
                        TemplateOperation::Ignore { .. } => continue,
                        _ => self.handle_file_operation(&file_operation)?,
                    };
                    let message =
                        file_operation.get_message(user_confirmed_overwrite, self.dry_run);
                    log::info!("{message}");
                }
                Err(e) => match e {
                    Error::ProcessError { .. } => log::warn!("{e}"),
                    _ => return Err(e),
                },
            }
        }
        Ok(())
    }

    /// Handles a single file operation (write, copy, create directory, or ignore).
    fn handle_file_operation(&self, file_operation: &TemplateOperation) -> Result<bool> {
        log::debug!("Handling file operation: {file_operation:?}");
        match file_operation {
            TemplateOperation::Write { target, target_exists, content, .. } => {
                let skip_prompt = self.should_skip_overwrite_prompt(*target_exists);
                let user_confirmed =
                    confirm(skip_prompt, format!("Overwrite {}?", target.display()))?;

                if user_confirmed {
                    self.write_file(content, target)?;
                }
                Ok(user_confirmed)
            }
            TemplateOperation::Copy { target, target_exists, source, .. } => {
                let skip_prompt = self.should_skip_overwrite_prompt(*target_exists);
                let user_confirmed =
                    confirm(skip_prompt, format!("Overwrite {}?", target.display()))?;

                if user_confirmed {
                    self.copy_file(source, target)?;
                }
                Ok(user_confirmed)
            }
            TemplateOperation::CreateDirectory { target, target_exists } => {
                if !target_exists {
                    self.create_dir_all(target)?;
                }
                Ok(true)
            }
            TemplateOperation::Ignore { .. } => Ok(true),
        }
    }

    fn copy_file<P: AsRef<Path>>(&self, source_path: P, dest_path: P) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }
        crate::ioutils::copy_file(source_path.as_ref(), dest_path.as_ref())
    }

    fn write_file<P: AsRef<Path>>(&self, content: &str, dest_path: P) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }
        crate::ioutils::write_file(content, dest_path)
    }

    fn create_dir_all<P: AsRef<Path>>(&self, dest_path: P) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }
        crate::ioutils::create_dir_all(dest_path)
    }

    /// Determines if overwrite prompts should be skipped
    fn should_skip_overwrite_prompt(&self, target_exists: bool) -> bool {
        self.force || !target_exists
    }
}
