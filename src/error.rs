use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Input2dError {
    #[error("Cannot read input file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: value is not a number – '{content}'")]
    ParameterFormat { line: usize, content: String },

    #[error("No 'string_name = <file>' line found in '{}'", path.display())]
    StructureReferenceMissing { path: PathBuf },

    #[error("Expected at least {expected} numeric parameters, found {found}")]
    IndexOutOfRange { expected: usize, found: usize },
}
