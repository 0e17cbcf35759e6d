pub mod lines;
pub mod models;

use std::path::Path;

use tracing::{debug, warn};

use crate::error::Input2dError;
use lines::Line;
use models::{Parameter, ParameterFile};

/// Read an input2d file and extract its parameters and structure reference.
///
/// The structure reference is resolved against the directory holding `path`.
pub fn parse_file(path: &Path) -> Result<ParameterFile, Input2dError> {
    let content = std::fs::read_to_string(path).map_err(|source| Input2dError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&content, path)
}

/// Parse input2d text that was read from `path`.
pub fn parse_str(content: &str, path: &Path) -> Result<ParameterFile, Input2dError> {
    let mut parameters = Vec::new();
    let mut structure_token: Option<&str> = None;

    for (i, raw) in content.lines().enumerate() {
        let line = i + 1;
        match lines::classify(raw) {
            Line::Blank | Line::Comment => {}
            Line::Numeric { name, value } => {
                let value = value
                    .parse::<f64>()
                    .map_err(|_| Input2dError::ParameterFormat {
                        line,
                        content: raw.trim().to_string(),
                    })?;
                parameters.push(Parameter {
                    name: name.to_string(),
                    value,
                    line,
                });
            }
            Line::Reference { token } => match structure_token {
                None => structure_token = Some(token),
                Some(first) => {
                    warn!(line, token, first, "ignoring repeated structure reference")
                }
            },
            Line::Other => warn!(line, content = raw.trim(), "skipping unrecognised line"),
        }
    }

    let token = structure_token.ok_or_else(|| Input2dError::StructureReferenceMissing {
        path: path.to_path_buf(),
    })?;
    let structure = path.parent().unwrap_or(Path::new("")).join(token);

    debug!(
        count = parameters.len(),
        structure = %structure.display(),
        "parsed input file"
    );

    Ok(ParameterFile {
        parameters,
        structure_token: token.to_string(),
        structure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const RUN1: &str = "/sims/run1/input2d";

    #[test]
    fn resolves_structure_next_to_input_file() {
        let text = "mu = 0.01\n\
                    rho = 1.0\n\
                    % comment string_name = ignored.vertex\n\
                    string_name = beam.vertex\n";
        let parsed = parse_str(text, Path::new(RUN1)).unwrap();

        assert_eq!(parsed.values(), vec![0.01, 1.0]);
        assert_eq!(parsed.structure_token, "beam.vertex");
        assert_eq!(parsed.structure, PathBuf::from("/sims/run1/beam.vertex"));
    }

    #[test]
    fn comments_never_count_as_parameters() {
        let text = "% mu = 5\n\
                    %rho=2\n\
                    \n\
                    dt = 1e-4 % time-step\n\
                    string_name = a\n";
        let parsed = parse_str(text, Path::new(RUN1)).unwrap();

        assert_eq!(parsed.values(), vec![1e-4]);
        assert_eq!(parsed.parameters[0].name, "dt");
        assert_eq!(parsed.parameters[0].line, 4);
    }

    #[test]
    fn order_follows_file_not_names() {
        let text = "rho = 2\nmu = 3\nstring_name = s\n";
        let parsed = parse_str(text, Path::new(RUN1)).unwrap();
        assert_eq!(parsed.values(), vec![2.0, 3.0]);
    }

    #[test]
    fn keyword_only_inside_comments_is_missing() {
        let text = "mu = 1\n\
                    % string_name = a.vertex\n\
                    rho = 1 % string_name = b.vertex\n";
        let err = parse_str(text, Path::new(RUN1)).unwrap_err();
        assert!(matches!(err, Input2dError::StructureReferenceMissing { .. }));
    }

    #[test]
    fn first_reference_wins() {
        let text = "string_name = first\nstring_name = second\n";
        let parsed = parse_str(text, Path::new(RUN1)).unwrap();
        assert_eq!(parsed.structure_token, "first");
    }

    #[test]
    fn bad_number_reports_line_and_content() {
        let text = "mu = 0.01\nrho = heavy\nstring_name = s\n";
        let err = parse_str(text, Path::new(RUN1)).unwrap_err();
        match err {
            Input2dError::ParameterFormat { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "rho = heavy");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bare_file_name_resolves_relative() {
        let parsed = parse_str("string_name = s.vertex\n", Path::new("input2d")).unwrap();
        assert_eq!(parsed.structure, PathBuf::from("s.vertex"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = parse_file(Path::new("/definitely/not/here/input2d")).unwrap_err();
        assert!(matches!(err, Input2dError::Io { .. }));
    }
}
