use crate::LookupResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// One word of a phrase query, with its own lookup result attached.
/// Punctuation tokens are dropped before this stage.
#[derive(Debug, Clone)]
pub struct PhraseToken {
    pub span: Span,
    pub text: String,
    pub result: LookupResult,
}
