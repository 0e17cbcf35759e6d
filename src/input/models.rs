use std::path::PathBuf;

use serde::Serialize;

/// One numeric `name = value` line, in file order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Left-hand identifier as written.  Never used for positioning.
    pub name: String,
    pub value: f64,
    /// 1-based line number in the source file.
    pub line: usize,
}

/// Everything the extractor pulls out of an input2d file.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterFile {
    pub parameters: Vec<Parameter>,
    /// Token as written on the `string_name` line.
    pub structure_token: String,
    /// `structure_token` joined onto the input file's directory.
    pub structure: PathBuf,
}

impl ParameterFile {
    /// The ordered parameter vector consumed by the configuration builder.
    pub fn values(&self) -> Vec<f64> {
        self.parameters.iter().map(|p| p.value).collect()
    }
}
