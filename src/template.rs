use crate::{
    delimiters::{self, DelimiterError},
    icons::Icons,
    theme,
};
use indexmap::IndexMap;
use miette::Diagnostic;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum TemplateError {
    #[error("Error occurred attempting to build the template context")]
    #[diagnostic(code(brutal::template::context))]
    Context {
        #[source]
        source: tera::Error,
    },

    #[error("Error occurred attempting to render template: {name}")]
    #[diagnostic(
        code(brutal::template::render),
        help("Raw Hugo syntax must stay inside {{% raw %}} blocks")
    )]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Delimiters(#[from] DelimiterError),
}

const TERA_FILE_EXTENSION: &str = "tera";

/// Values visible to `.tera` sources.
#[derive(Debug, Serialize)]
struct ThemeContext {
    theme_name: &'static str,
    icons: Icons,
}

fn make_tera_context() -> Result<Context, TemplateError> {
    let ctx = ThemeContext {
        theme_name: theme::THEME_NAME,
        icons: Icons::default(),
    };

    Context::from_serialize(&ctx).map_err(|error| TemplateError::Context { source: error })
}

fn is_tera(name: &Path) -> bool {
    name.extension()
        .map(|ext| ext == TERA_FILE_EXTENSION)
        .unwrap_or(false)
}

fn is_html(name: &Path) -> bool {
    name.extension().map(|ext| ext == "html").unwrap_or(false)
}

/// Renders `sources` into final file contents keyed by output path (relative to the
/// theme root), preserving source order.
///
/// Sources with a `.tera` extension are rendered and lose the extension; all others are
/// passed through untouched. Every resulting `.html` file is checked for balanced `{{ }}`.
pub fn render_sources(sources: &[(&str, &str)]) -> Result<IndexMap<PathBuf, String>, TemplateError> {
    let mut tera = Tera::default();
    // output is HTML for Hugo to process, not for a browser
    tera.autoescape_on(vec![]);

    let ctx = make_tera_context()?;

    let mut rendered = IndexMap::with_capacity(sources.len());

    for &(name, contents) in sources {
        let mut destination = PathBuf::from(name);

        let contents = if is_tera(&destination) {
            log::debug!("rendering {}", name);

            let file_stem = destination.file_stem().unwrap_or_default().to_owned();
            destination.set_file_name(file_stem);

            tera.render_str(contents, &ctx)
                .map_err(|error| TemplateError::Render {
                    name: name.to_string(),
                    source: error,
                })?
        } else {
            contents.to_string()
        };

        if is_html(&destination) {
            delimiters::check(&destination.to_string_lossy(), &contents)?;
        }

        rendered.insert(destination, contents);
    }

    Ok(rendered)
}
