use std::path::Path;

use crate::error::{AutoindexError, Result};

/// Opens the generated region of the index file.
pub const START_MARKER: &str = ".. autoindex-start";
/// Closes the generated region of the index file.
pub const END_MARKER: &str = ".. autoindex-end";

/// Replace the region between the marker lines with `rendered`.
///
/// Everything up to and including the start marker line, and everything
/// from the end marker line onward, is preserved byte for byte. `path` is
/// only used for error messages.
pub fn splice(path: &Path, existing: &str, rendered: &str) -> Result<String> {
    let (start_begin, start_end) = find_marker_line(existing, START_MARKER).ok_or_else(|| {
        AutoindexError::MarkerNotFound {
            marker: START_MARKER,
            path: path.to_path_buf(),
        }
    })?;

    let (end_begin, _) = match find_marker_line(&existing[start_end..], END_MARKER) {
        Some((begin, end)) => (start_end + begin, start_end + end),
        None => {
            // An end marker before the start marker is a different mistake
            // than no end marker at all.
            return if find_marker_line(&existing[..start_begin], END_MARKER).is_some() {
                Err(AutoindexError::MarkersOutOfOrder(path.to_path_buf()))
            } else {
                Err(AutoindexError::MarkerNotFound {
                    marker: END_MARKER,
                    path: path.to_path_buf(),
                })
            };
        }
    };

    let mut output = String::with_capacity(existing.len() + rendered.len());
    output.push_str(&existing[..start_end]);
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output.push_str(rendered);
    output.push_str(&existing[end_begin..]);

    Ok(output)
}

/// Byte range `(line_start, after_newline)` of the first line whose content
/// equals `marker`.
fn find_marker_line(content: &str, marker: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == marker {
            return Some((offset, offset + line.len()));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn target() -> PathBuf {
        PathBuf::from("docs/index.rst")
    }

    #[test]
    fn test_markers_only_file() {
        let existing = ".. autoindex-start\n.. autoindex-end\n";
        let rendered = "\n.. automodule:: pkg\n    :members:\n";

        let result = splice(&target(), existing, rendered).unwrap();

        assert_eq!(
            result,
            ".. autoindex-start\n\n.. automodule:: pkg\n    :members:\n.. autoindex-end\n"
        );
    }

    #[test]
    fn test_trailing_content_preserved() {
        let existing = "\
.. autoindex-start
.. autoindex-end

Indices and tables
==================

* :ref:`genindex`
";
        let rendered = "\n.. automodule:: pkg\n    :members:\n";

        let result = splice(&target(), existing, rendered).unwrap();

        assert!(result.ends_with(
            ".. autoindex-end\n\nIndices and tables\n==================\n\n* :ref:`genindex`\n"
        ));
    }

    #[test]
    fn test_leading_content_preserved() {
        let existing = "\
Welcome
=======

Some prose.

.. autoindex-start
stale line one
stale line two
.. autoindex-end
";
        let rendered = "\n.. automodule:: fresh\n    :members:\n";

        let result = splice(&target(), existing, rendered).unwrap();

        assert!(result.starts_with("Welcome\n=======\n\nSome prose.\n\n.. autoindex-start\n"));
        assert!(!result.contains("stale"));
        assert!(result.contains(".. automodule:: fresh"));
    }

    #[test]
    fn test_splice_is_idempotent() {
        let existing = ".. autoindex-start\nold\n.. autoindex-end\ntail\n";
        let rendered = "\n.. automodule:: a\n    :members:\n";

        let once = splice(&target(), existing, rendered).unwrap();
        let twice = splice(&target(), &once, rendered).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_start_marker() {
        let err = splice(&target(), ".. autoindex-end\n", "").unwrap_err();
        assert!(matches!(
            err,
            AutoindexError::MarkerNotFound {
                marker: START_MARKER,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_end_marker() {
        let err = splice(&target(), ".. autoindex-start\n", "").unwrap_err();
        assert!(matches!(
            err,
            AutoindexError::MarkerNotFound {
                marker: END_MARKER,
                ..
            }
        ));
    }

    #[test]
    fn test_markers_out_of_order() {
        let existing = ".. autoindex-end\n.. autoindex-start\n";
        let err = splice(&target(), existing, "").unwrap_err();
        assert!(matches!(err, AutoindexError::MarkersOutOfOrder(_)));
    }

    #[test]
    fn test_start_marker_without_trailing_newline() {
        let result = splice(&target(), ".. autoindex-start", "x").unwrap_err();
        // No end marker at all
        assert!(matches!(result, AutoindexError::MarkerNotFound { .. }));

        let existing = "head\n.. autoindex-start\n.. autoindex-end";
        let spliced = splice(&target(), existing, "\nbody\n").unwrap();
        assert_eq!(spliced, "head\n.. autoindex-start\n\nbody\n.. autoindex-end");
    }
}
