//! Line model: classification of raw configuration lines and the identity
//! contract the merge engine matches on.

/// One classified line of an INI-style configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A `[name]` header. Its text (brackets included) is also the section
    /// context for every line that follows it.
    Section { text: String },
    /// A full-line comment starting with `#` or `;`, kept verbatim.
    Comment { section: String, text: String },
    /// A blank line. Whitespace-only input is normalized to empty, so all
    /// blank lines within one section share a single identity.
    Empty { section: String },
    /// A `key=value` pair, optionally with a trailing inline comment.
    Config {
        section: String,
        key: String,
        value: String,
        /// Trailing comment including its leading space, e.g. `" # docs"`.
        inline_comment: Option<String>,
    },
}

/// Merge identity of a line. Config values and inline comments are excluded
/// so a template line matches a target line whose value the user edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineId<'a> {
    Section { text: &'a str },
    Comment { section: &'a str, text: &'a str },
    Empty { section: &'a str },
    Config { section: &'a str, key: &'a str },
}

impl Line {
    /// Classify one raw line in the context of the current section.
    ///
    /// Classification order, first match wins: section header, comment,
    /// blank, `key=value`. Returns `None` when the line matches no
    /// recognized form.
    pub fn classify(raw: &str, current_section: &str) -> Option<Line> {
        if raw.starts_with('[') && raw.ends_with(']') {
            return Some(Line::Section {
                text: raw.to_string(),
            });
        }
        if raw.starts_with('#') || raw.starts_with(';') {
            return Some(Line::Comment {
                section: current_section.to_string(),
                text: raw.to_string(),
            });
        }
        if raw.trim().is_empty() {
            return Some(Line::Empty {
                section: current_section.to_string(),
            });
        }
        if let Some((key, raw_value)) = raw.split_once('=') {
            let (value, inline_comment) = split_inline_comment(raw_value);
            return Some(Line::Config {
                section: current_section.to_string(),
                key: key.to_string(),
                value,
                inline_comment,
            });
        }
        None
    }

    /// Section context in effect after this line. For a header that is the
    /// header's own text; for every other kind the surrounding section.
    pub fn section(&self) -> &str {
        match self {
            Line::Section { text } => text,
            Line::Comment { section, .. }
            | Line::Empty { section }
            | Line::Config { section, .. } => section,
        }
    }

    /// Merge identity of this line. Lines of different kinds never compare
    /// equal.
    pub fn id(&self) -> LineId<'_> {
        match self {
            Line::Section { text } => LineId::Section { text },
            Line::Comment { section, text } => LineId::Comment { section, text },
            Line::Empty { section } => LineId::Empty { section },
            Line::Config { section, key, .. } => LineId::Config { section, key },
        }
    }
}

/// Split a raw `key=` value into the stored value and an optional inline
/// comment.
///
/// Any `#` or `;` anywhere in the value triggers extraction: the value is
/// trimmed and everything from its first space onward becomes the comment.
/// A marker can therefore fire inside an intended value. Known limitation,
/// kept as-is so repeated merges of existing files stay stable.
///
/// A value carrying a marker but no space is kept whole with no comment.
fn split_inline_comment(raw_value: &str) -> (String, Option<String>) {
    if raw_value.contains('#') || raw_value.contains(';') {
        let trimmed = raw_value.trim();
        if let Some(space) = trimmed.find(' ') {
            return (
                trimmed[..space].to_string(),
                Some(trimmed[space..].to_string()),
            );
        }
    }
    (raw_value.to_string(), None)
}
