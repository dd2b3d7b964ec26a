use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unknown test discipline: '{0}'")]
    UnknownDiscipline(String),
}
