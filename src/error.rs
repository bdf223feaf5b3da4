use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors raised while turning DSL source text into modules.
///
/// The generators themselves are total; only reading and decoding a
/// document can fail.
#[derive(Error, Debug, Diagnostic)]
pub enum UiDslError {
    #[error("Invalid JSON document: {message}")]
    #[diagnostic(
        code(ui_dsl::invalid_json),
        help("The document must be a JSON object describing a module or a page.")
    )]
    Json {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
    },

    #[error("Invalid YAML document: {message}")]
    #[diagnostic(
        code(ui_dsl::invalid_yaml),
        help("The document must be a YAML mapping describing a module or a page.")
    )]
    Yaml {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
    },

    #[error("Unsupported document format: {file_name}")]
    #[diagnostic(
        code(ui_dsl::unsupported_format),
        help("Use a `.json`, `.yaml` or `.yml` file extension.")
    )]
    UnsupportedFormat { file_name: String },

    #[error("Failed to read {path}")]
    #[diagnostic(code(ui_dsl::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl UiDslError {
    pub(crate) fn from_json(err: &serde_json::Error, file_name: &str, source_text: &str) -> Self {
        let offset = crate::utils::get_offset(source_text, err.line(), err.column());
        UiDslError::Json {
            message: strip_position(&err.to_string()),
            src: NamedSource::new(file_name, source_text.to_string()),
            span: label_span(source_text, offset),
        }
    }

    pub(crate) fn from_yaml(err: &serde_yaml::Error, file_name: &str, source_text: &str) -> Self {
        let offset = err.location().map_or(0, |loc| loc.index());
        UiDslError::Yaml {
            message: strip_position(&err.to_string()),
            src: NamedSource::new(file_name, source_text.to_string()),
            span: label_span(source_text, offset),
        }
    }
}

// serde appends " at line X column Y"; the label already points there.
fn strip_position(message: &str) -> String {
    match message.find(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

fn label_span(source_text: &str, offset: usize) -> SourceSpan {
    let mut offset = offset.min(source_text.len());
    while !source_text.is_char_boundary(offset) {
        offset -= 1;
    }
    let len = source_text[offset..].chars().next().map_or(0, char::len_utf8);
    (offset, len).into()
}
