use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("start vertex not found: {0}")]
    VertexNotFound(String),
}
