//! Sentence sequence input model

/// One input sentence, optionally carrying its 1-based source line number
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sentence {
    /// Sentence text as segmented by the caller
    pub text: String,
    /// 1-based source line, when the caller knows it
    pub line: Option<usize>,
}

impl Sentence {
    /// Create a sentence with no line annotation
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            line: None,
        }
    }

    /// Create a sentence with a 1-based source line number
    pub fn with_line(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line: Some(line),
        }
    }
}

/// Ordered, immutable list of sentences; built once per alignment run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceSequence {
    sentences: Vec<Sentence>,
}

impl SentenceSequence {
    /// Build a sequence from plain sentence strings
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sentences: texts.into_iter().map(Sentence::new).collect(),
        }
    }

    /// Build a sequence from (text, 1-based line) pairs
    pub fn from_numbered<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        Self {
            sentences: pairs
                .into_iter()
                .map(|(text, line)| Sentence::with_line(text, line))
                .collect(),
        }
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// True when the sequence holds no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Sentence text at `index`
    pub fn text(&self, index: usize) -> &str {
        &self.sentences[index].text
    }

    /// Resolved 1-based line number at `index`
    ///
    /// Falls back to `index + 1` when the caller supplied no annotation.
    pub fn line(&self, index: usize) -> usize {
        self.sentences[index].line.unwrap_or(index + 1)
    }

    /// Iterate over the sentences in order
    pub fn iter(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences.iter()
    }
}

impl From<Vec<String>> for SentenceSequence {
    fn from(texts: Vec<String>) -> Self {
        Self::from_texts(texts)
    }
}

impl From<Vec<&str>> for SentenceSequence {
    fn from(texts: Vec<&str>) -> Self {
        Self::from_texts(texts)
    }
}
