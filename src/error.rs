use thiserror::Error;

// Unified error type for densemat

#[derive(Error, Debug)]
pub enum MatError {
    #[error("index ({col}, {row}) is out of bounds for a {cols}x{rows} matrix")]
    OutOfBounds {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed element token {token:?} at position {index}")]
    MalformedToken { token: String, index: usize },
}
