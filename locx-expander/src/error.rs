use thiserror::Error;

/// Fatal problems that abort an expansion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// A `$(` with no `)` anywhere after it. The message is fixed regardless
    /// of the placeholder name.
    #[error("unterminated $(location) expression")]
    UnterminatedPlaceholder {
        /// Byte offset of the offending `$(`
        offset: usize,
    },
}

pub type Result<T> = std::result::Result<T, ExpandError>;
