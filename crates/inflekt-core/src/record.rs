// Training and evaluation records.

use thiserror::Error;

/// Error raised when a TSV input line cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// A record line did not have exactly three tab-separated fields.
    #[error("expected 3 tab-separated fields, got {actual}: {line:?}")]
    FieldCount { actual: usize, line: String },

    /// A query line did not have two or three tab-separated fields.
    #[error("expected 2 or 3 tab-separated fields, got {actual}: {line:?}")]
    QueryFieldCount { actual: usize, line: String },
}

/// One training or evaluation example: a lemma, an inflected form, and an
/// opaque grammatical tag.
///
/// Tags are compared by exact string equality; the engine attaches no
/// meaning to their internal structure. During evaluation the `form` field
/// carries the gold form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub lemma: String,
    pub form: String,
    pub tag: String,
}

impl Record {
    pub fn new(
        lemma: impl Into<String>,
        form: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            lemma: lemma.into(),
            form: form.into(),
            tag: tag.into(),
        }
    }

    /// Parse a `lemma<TAB>form<TAB>tag` line.
    pub fn parse_line(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            return Err(RecordError::FieldCount {
                actual: fields.len(),
                line: line.to_string(),
            });
        }
        Ok(Self::new(fields[0], fields[1], fields[2]))
    }
}

/// One inference request: a lemma and a tag, without a gold form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub lemma: String,
    pub tag: String,
}

impl Query {
    pub fn new(lemma: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            tag: tag.into(),
        }
    }

    /// Parse an inference line: either `lemma<TAB>tag` or a full
    /// three-field record whose middle (form) field is ignored.
    pub fn parse_line(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split('\t').collect();
        match fields.len() {
            2 => Ok(Self::new(fields[0], fields[1])),
            3 => Ok(Self::new(fields[0], fields[2])),
            n => Err(RecordError::QueryFieldCount {
                actual: n,
                line: line.to_string(),
            }),
        }
    }
}
