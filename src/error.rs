use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum FitError {
    #[error(transparent)]
    /// An I/O error occurred while reading a font file
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    /// The text cannot be laid out within the supported line count
    #[error("text needs {needed} lines, more than the {max} supported")]
    TooManyLines { needed: usize, max: usize },
}
