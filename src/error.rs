use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config file '{config_file}'. Original error: {e}")]
    ConfigParseError { config_file: String, e: String },

    #[error("Failed to parse .forgeignore file. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to walk template directory. Original error: {0}")]
    WalkdirError(#[from] walkdir::Error),

    #[error("Request to puzzle site failed. Original error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("No '{0}' set in the environment.")]
    MissingEnvVar(String),

    #[error("Failed to encrypt or decrypt input mirror: {0}.")]
    CryptoError(String),

    #[error("Failed to convert instructions: {0}.")]
    InstructionsError(String),

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },
}

/// Convenience type alias for Results with dayforge's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
