use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("a handler named '{0}' is already registered")]
    DuplicateName(String),

    #[error("no handler named '{0}' in the pipeline")]
    UnknownHandler(String),
}
