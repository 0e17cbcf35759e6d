//! Single-pass line classification for input2d files.

/// Marks the rest of a line as a comment.
pub const COMMENT_MARKER: char = '%';

/// Reserved identifier of the structure reference line.
pub const REFERENCE_KEY: &str = "string_name";

/// What a single input2d line holds.
///
/// Slices borrow from the original line; nothing is parsed into numbers here
/// so the caller can attach line numbers to any conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    /// `name = value`, with any trailing comment already stripped.
    Numeric { name: &'a str, value: &'a str },
    /// `string_name = token`, the first whitespace-delimited token after `=`.
    Reference { token: &'a str },
    /// Non-blank content without an assignment.
    Other,
}

pub fn classify(raw: &str) -> Line<'_> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with(COMMENT_MARKER) {
        return Line::Comment;
    }

    let content = match trimmed.find(COMMENT_MARKER) {
        Some(at) => &trimmed[..at],
        None => trimmed,
    };

    // A keyword past the comment marker was cut off above, so any hit here
    // precedes the marker.
    if let Some(at) = content.find(REFERENCE_KEY) {
        let after = &content[at + REFERENCE_KEY.len()..];
        return match after
            .split_once('=')
            .and_then(|(_, rhs)| rhs.split_whitespace().next())
        {
            Some(token) => Line::Reference { token },
            None => Line::Other,
        };
    }

    match content.split_once('=') {
        Some((name, value)) => Line::Numeric {
            name: name.trim(),
            value: value.trim(),
        },
        None => Line::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_lines() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("   \t  "), Line::Blank);
        assert_eq!(classify("\r"), Line::Blank);
    }

    #[test]
    fn comment_lines_win_even_with_assignments() {
        assert_eq!(classify("% mu = 0.01"), Line::Comment);
        assert_eq!(classify("   %% FLUID PARAMETERS %%"), Line::Comment);
        assert_eq!(
            classify("% comment string_name = ignored.vertex"),
            Line::Comment
        );
    }

    #[test]
    fn numeric_assignment_strips_trailing_comment() {
        assert_eq!(
            classify("mu = 0.01     % Dynamic Viscosity"),
            Line::Numeric {
                name: "mu",
                value: "0.01"
            }
        );
        assert_eq!(
            classify("Nx=64"),
            Line::Numeric {
                name: "Nx",
                value: "64"
            }
        );
    }

    #[test]
    fn keyword_inside_trailing_comment_is_not_a_reference() {
        assert_eq!(
            classify("rho = 1.0 % see string_name below"),
            Line::Numeric {
                name: "rho",
                value: "1.0"
            }
        );
    }

    #[test]
    fn reference_line_takes_token_after_equals() {
        assert_eq!(
            classify("string_name = rubberband % structure name"),
            Line::Reference { token: "rubberband" }
        );
        assert_eq!(
            classify("string_name = beam.vertex"),
            Line::Reference {
                token: "beam.vertex"
            }
        );
        assert_eq!(
            classify("string_name=beam.vertex"),
            Line::Reference {
                token: "beam.vertex"
            }
        );
    }

    #[test]
    fn reference_without_token_or_assignment() {
        assert_eq!(classify("string_name = "), Line::Other);
        assert_eq!(classify("string_name"), Line::Other);
    }

    #[test]
    fn bare_words_are_other() {
        assert_eq!(classify("FLUID PARAMETERS"), Line::Other);
    }
}
