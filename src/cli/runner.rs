use std::fs;
use std::path::PathBuf;

use crate::{
    aoc::AocClient,
    cli::{
        args::{default_day, default_year},
        processor::FileProcessor,
        Args,
    },
    config::Settings,
    constants::{AOC_BASE_URL, DATA_DIR, INSTRUCTIONS_FILE},
    context::{DayContext, Lang},
    error::{Error, Result},
    ignore::parse_forgeignore_file,
    instructions,
    ioutils::write_file,
    mirror::{InputMirror, MIRROR_SUFFIX},
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    template::{builtin, processor::TemplateProcessor},
};

/// Main CLI runner that orchestrates scaffolding one day: input data,
/// instruction READMEs, then one template pack per language.
pub struct Runner {
    args: Args,
    settings: Settings,
}

impl Runner {
    pub fn new(mut args: Args) -> Result<Self> {
        if args.part_2 {
            args.force_download = true;
            args.no_data = true;
            args.skip_templates = true;
        }

        let settings = Settings::load(&args.output)?;
        Ok(Self { args, settings })
    }

    /// Executes the complete scaffolding workflow.
    pub fn run(self) -> Result<()> {
        if self.args.decrypt_data {
            return self.restore_data_files();
        }

        let day = self.args.day.unwrap_or_else(default_day);
        let year = self.args.year.or(self.settings.year).unwrap_or_else(default_year);
        let context = DayContext::new(day, year);
        let langs = self.resolved_langs();

        let engine = MiniJinjaRenderer::new();
        let file_processor = FileProcessor::new(self.args.force, self.args.dry_run);

        if !self.args.offline && !self.args.no_data {
            self.write_data_file(&context)?;
        }

        if !self.args.offline {
            self.write_instruction_files(&context, &langs)?;
        }

        if !self.args.skip_templates {
            for &lang in &langs {
                self.scaffold_lang(&engine, &file_processor, &context, lang)?;
            }
        }

        println!("{}", self.completion_message(&context));
        Ok(())
    }

    fn completion_message(&self, context: &DayContext) -> String {
        let prefix = if self.args.dry_run { "[DRY RUN] " } else { "" };
        format!(
            "{prefix}Scaffolding of {} completed successfully in {}.",
            context.display_name,
            self.args.output.display()
        )
    }

    /// Languages from the CLI, falling back to config, then to all of them.
    fn resolved_langs(&self) -> Vec<Lang> {
        if !self.args.langs.is_empty() {
            return self.args.langs.clone();
        }
        if let Some(langs) = &self.settings.langs {
            return langs.clone();
        }
        vec![Lang::Go, Lang::Ts, Lang::Rs]
    }

    fn data_dir(&self) -> PathBuf {
        let dir = self.settings.data_dir.clone().unwrap_or_else(|| PathBuf::from(DATA_DIR));
        self.args.output.join(dir)
    }

    /// Restores the plaintext inputs from their encrypted mirrors.
    fn restore_data_files(&self) -> Result<()> {
        let data_dir = self.data_dir();
        if !data_dir.exists() {
            log::info!("No data directory at '{}', nothing to restore.", data_dir.display());
            return Ok(());
        }

        let restored = InputMirror::from_env()?.restore_data_dir(&data_dir)?;
        println!("Restored {restored} input file(s) in {}.", data_dir.display());
        Ok(())
    }

    /// Downloads the puzzle input once and writes an encrypted mirror next
    /// to it. An existing input file is never re-fetched: the data is
    /// per-user but immutable.
    fn write_data_file(&self, context: &DayContext) -> Result<()> {
        let data_file = self.data_dir().join(&context.data_file);
        if data_file.exists() {
            log::info!(
                "Input '{}' already exists, skipping download.",
                data_file.display()
            );
            return Ok(());
        }

        if self.args.dry_run {
            log::info!("[DRY RUN] Writing to '{}'", data_file.display());
            return Ok(());
        }

        let client = AocClient::from_env(context.day_url(AOC_BASE_URL))?;
        let data = client.fetch_input()?;
        write_file(&data, &data_file)?;

        let mirror_file = self
            .data_dir()
            .join(format!("{}{}", context.package_name, MIRROR_SUFFIX));
        let encoded = InputMirror::from_env()?.encrypt(&data)?;
        write_file(&encoded, &mirror_file)
    }

    /// Converts the instruction page to Markdown and writes a README into
    /// each language's day directory. A cached `instructions.html` is
    /// reused instead of re-downloading unless the download is forced.
    fn write_instruction_files(&self, context: &DayContext, langs: &[Lang]) -> Result<()> {
        let instruction_file = self.args.output.join(INSTRUCTIONS_FILE);

        // A dry run never downloads; without a cached page there is nothing
        // to convert, so only report the README targets.
        if self.args.dry_run && (self.args.force_download || !instruction_file.exists()) {
            log::info!("[DRY RUN] Skipping instruction download.");
            for lang in langs {
                let readme = self.readme_path(context, *lang);
                log::info!("[DRY RUN] Writing to '{}'", readme.display());
            }
            return Ok(());
        }

        let instructions_html = if !self.args.force_download && instruction_file.exists()
        {
            let instructions = fs::read_to_string(&instruction_file)?;
            if !self.args.keep_instructions && !self.args.dry_run {
                fs::remove_file(&instruction_file)?;
            }
            instructions
        } else {
            let client = AocClient::from_env(context.day_url(AOC_BASE_URL))?;
            let instructions = client.fetch_instructions()?;
            if self.args.keep_instructions && !self.args.dry_run {
                write_file(&instructions, &instruction_file)?;
            }
            instructions
        };

        let markdown =
            instructions::to_markdown(&instructions_html, &context.day_url(AOC_BASE_URL))?;

        for lang in langs {
            let readme = self.readme_path(context, *lang);
            if self.args.dry_run {
                log::info!("[DRY RUN] Writing to '{}'", readme.display());
                continue;
            }
            write_file(&markdown, &readme)?;
        }

        Ok(())
    }

    fn readme_path(&self, context: &DayContext, lang: Lang) -> PathBuf {
        self.args
            .output
            .join(lang.dir_name())
            .join(&context.package_name)
            .join("README.md")
    }

    /// Renders one language's template pack into `<lang>/day_NN/`.
    fn scaffold_lang(
        &self,
        engine: &dyn TemplateRenderer,
        file_processor: &FileProcessor,
        context: &DayContext,
        lang: Lang,
    ) -> Result<()> {
        let answers = context.to_answers();
        let output_root =
            self.args.output.join(lang.dir_name()).join(&context.package_name);

        let custom_root =
            self.args.templates.clone().or_else(|| self.settings.templates.clone());

        match custom_root {
            Some(root) => {
                let pack_root = root.join(lang.dir_name());
                if !pack_root.exists() {
                    return Err(Error::TemplateDoesNotExistsError {
                        template_dir: pack_root.display().to_string(),
                    });
                }
                let forgeignore = parse_forgeignore_file(&pack_root)?;
                let processor = TemplateProcessor::new(
                    engine,
                    pack_root.clone(),
                    output_root,
                    &answers,
                    &forgeignore,
                );
                file_processor.process_pack_dir(&processor, &pack_root)
            }
            None => file_processor.process_builtin_pack(
                engine,
                builtin::pack(lang),
                &output_root,
                &answers,
            ),
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args)?;
    runner.run()
}
