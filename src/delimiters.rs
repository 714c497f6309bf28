use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum DelimiterError {
    #[error("unclosed '{{{{' in {name}")]
    #[diagnostic(code(brutal::delimiters::unclosed))]
    Unclosed {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("opened here")]
        span: SourceSpan,
    },

    #[error("'}}}}' without a matching '{{{{' in {name}")]
    #[diagnostic(code(brutal::delimiters::unopened))]
    Unopened {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("closed here")]
        span: SourceSpan,
    },
}

/// Checks that every `{{` in `contents` is closed by a `}}` before the next `{{` opens.
///
/// This is a structural check only: what sits between the markers is never inspected.
pub fn check(name: &str, contents: &str) -> Result<(), DelimiterError> {
    lazy_static::lazy_static! {
        static ref MARKER_REGEX: regex::Regex =
            regex::Regex::new(r"\{\{|\}\}").expect("a valid regex pattern");
    }

    let mut open: Option<usize> = None;

    for marker in MARKER_REGEX.find_iter(contents) {
        match (marker.as_str(), open) {
            ("{{", None) => open = Some(marker.start()),
            ("}}", Some(_)) => open = None,
            ("{{", Some(start)) => {
                return Err(DelimiterError::Unclosed {
                    name: name.to_string(),
                    src: NamedSource::new(name, contents.to_string()),
                    span: (start, 2).into(),
                });
            }
            _ => {
                return Err(DelimiterError::Unopened {
                    name: name.to_string(),
                    src: NamedSource::new(name, contents.to_string()),
                    span: (marker.start(), 2).into(),
                });
            }
        }
    }

    match open {
        Some(start) => Err(DelimiterError::Unclosed {
            name: name.to_string(),
            src: NamedSource::new(name, contents.to_string()),
            span: (start, 2).into(),
        }),
        None => Ok(()),
    }
}
