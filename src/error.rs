use std::io;
use thiserror::Error;

/// Malformed edge-list input.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("I/O failure")]
    IoFailure(#[from] io::Error),
    #[error("input is empty, expected the number of vertices")]
    MissingVertexCount,
    #[error("line {line}: expected a single vertex count, found {found} tokens")]
    WrongHeaderTokenCount { line: usize, found: usize },
    #[error("line {line}: expected two endpoints, found {found} tokens")]
    WrongEdgeTokenCount { line: usize, found: usize },
    #[error("line {line}: input is not valid UTF-8")]
    InvalidEncoding { line: usize },
    #[error("line {line}: `{token}` is not a non-negative integer")]
    InvalidToken { line: usize, token: String },
}

/// Edge list that does not describe a graph on the given vertex set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("edge {edge} references vertex {vertex}, but the graph has {vertex_count} vertices")]
    VertexOutOfRange {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },
    #[error("{vertex_count} vertices exceed the supported maximum of {max}")]
    TooManyVertices { vertex_count: usize, max: usize },
    #[error("{edge_count} edges exceed the supported maximum of {max}")]
    TooManyEdges { edge_count: usize, max: usize },
}

/// Traversal requested from a vertex that does not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("root {root} is out of range, the graph has {vertex_count} vertices")]
pub struct InvalidRootError {
    pub root: usize,
    pub vertex_count: usize,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InvalidRoot(#[from] InvalidRootError),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Parse(ParseError::IoFailure(err))
    }
}
