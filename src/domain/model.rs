use std::borrow::Cow;
use std::path::PathBuf;

/// One saved link as it appears in a Pocket export.
///
/// All fields are carried as opaque strings. `time_added` in particular is
/// copied verbatim and never parsed as a timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkRecord {
    pub title: String,
    pub url: String,
    pub time_added: String,
}

impl LinkRecord {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        time_added: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            time_added: time_added.into(),
        }
    }
}

/// How record values are substituted into the bookmark template.
///
/// `Verbatim` reproduces Pocket-converter output byte for byte, which means a
/// `"` in a URL or a `<` in a title ends up unescaped in the document and can
/// break it. `Html` escapes the five markup-significant characters instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escaping {
    #[default]
    Verbatim,
    Html,
}

impl Escaping {
    pub fn apply<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self {
            Escaping::Verbatim => Cow::Borrowed(value),
            Escaping::Html => escape_html(value),
        }
    }
}

fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 16);
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Final state of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertOutcome {
    Written { count: usize, output: PathBuf },
    /// Records were extracted but the output file could not be written.
    WriteFailed { count: usize, output: PathBuf },
    /// Nothing was extracted, so no output was written.
    Skipped,
}

impl ConvertOutcome {
    pub fn converted(&self) -> usize {
        match self {
            ConvertOutcome::Written { count, .. } => *count,
            ConvertOutcome::WriteFailed { .. } | ConvertOutcome::Skipped => 0,
        }
    }
}
