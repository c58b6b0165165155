use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Terminal(#[from] droplist::Error),

    #[error("failed to open log file: {0}")]
    LogFile(#[from] std::io::Error),

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
