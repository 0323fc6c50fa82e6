//! Suppressed-region tracking across lines
//!
//! A small explicit state machine per scanner, folded over the line sequence:
//! normal, inside a block comment, inside fenced code. Each line folds into a
//! [`LineMask`] of byte ranges that must not yield tokens, and advances the
//! cross-line state. Keeping the machine a value (not a loop-body boolean)
//! makes the transitions independently testable.

use std::ops::Range;

/// Cross-line suppression state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuppressState {
    #[default]
    Normal,
    BlockComment,
    FencedCode,
}

/// Per-format suppression rules plus the state carried between lines.
#[derive(Debug, Clone)]
pub struct Suppressor {
    state: SuppressState,
    block: Option<(&'static str, &'static str)>,
    fences: bool,
}

impl Suppressor {
    /// No suppressed regions (structured-object and line-oriented formats).
    pub fn none() -> Self {
        Self {
            state: SuppressState::Normal,
            block: None,
            fences: false,
        }
    }

    /// `<!-- -->` comments (markup and tag markup).
    pub fn html_comments() -> Self {
        Self {
            state: SuppressState::Normal,
            block: Some(("<!--", "-->")),
            fences: false,
        }
    }

    /// `/* */` comments (stylesheets and scripts).
    pub fn block_comments() -> Self {
        Self {
            state: SuppressState::Normal,
            block: Some(("/*", "*/")),
            fences: false,
        }
    }

    /// HTML comments plus fenced code blocks (prose markup).
    pub fn markdown() -> Self {
        Self {
            state: SuppressState::Normal,
            block: Some(("<!--", "-->")),
            fences: true,
        }
    }

    pub fn state(&self) -> SuppressState {
        self.state
    }

    /// Fold one line: compute its suppressed ranges and advance the
    /// cross-line state.
    pub fn mask_line(&mut self, line: &str) -> LineMask {
        if self.fences {
            // A fence line toggles the state and yields nothing itself.
            if line.starts_with("```") {
                self.state = if self.state == SuppressState::FencedCode {
                    SuppressState::Normal
                } else {
                    SuppressState::FencedCode
                };
                return LineMask::whole_line();
            }
            if self.state == SuppressState::FencedCode {
                return LineMask::whole_line();
            }
        }

        let (open, close) = match self.block {
            Some(delimiters) => delimiters,
            None => return LineMask::clear(),
        };

        let mut spans = Vec::new();
        let mut cursor = 0usize;

        // Close a comment left open by a previous line.
        if self.state == SuppressState::BlockComment {
            match line.find(close) {
                Some(i) => {
                    let end = i + close.len();
                    spans.push(0..end);
                    self.state = SuppressState::Normal;
                    cursor = end;
                }
                None => return LineMask::whole_line(),
            }
        }

        while let Some(i) = line[cursor..].find(open) {
            let start = cursor + i;
            match line[start + open.len()..].find(close) {
                Some(j) => {
                    let end = start + open.len() + j + close.len();
                    spans.push(start..end);
                    cursor = end;
                }
                None => {
                    spans.push(start..line.len());
                    self.state = SuppressState::BlockComment;
                    break;
                }
            }
        }

        LineMask::from_spans(spans)
    }
}

/// Suppressed byte ranges for a single line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMask {
    spans: Vec<Range<usize>>,
    whole: bool,
}

impl LineMask {
    pub(crate) fn clear() -> Self {
        Self {
            spans: Vec::new(),
            whole: false,
        }
    }

    pub(crate) fn whole_line() -> Self {
        Self {
            spans: Vec::new(),
            whole: true,
        }
    }

    pub(crate) fn from_spans(spans: Vec<Range<usize>>) -> Self {
        Self {
            spans,
            whole: false,
        }
    }

    /// Add a suppressed range (scanner-specific, e.g. `//` line comments).
    pub(crate) fn add(&mut self, span: Range<usize>) {
        self.spans.push(span);
    }

    /// Whether a match starting at `offset` must be discarded.
    pub fn suppressed(&self, offset: usize) -> bool {
        self.whole || self.spans.iter().any(|span| span.contains(&offset))
    }
}

/// Add inline-code spans to a Markdown line's mask: every region after an odd
/// backtick is suppressed, which is exactly "an odd count of backticks before
/// the match start".
pub(crate) fn add_inline_code_spans(line: &str, mask: &mut LineMask) {
    let mut open: Option<usize> = None;
    for (i, b) in line.bytes().enumerate() {
        if b != b'`' {
            continue;
        }
        match open.take() {
            None => open = Some(i),
            Some(start) => mask.add(start..i + 1),
        }
    }
    if let Some(start) = open {
        mask.add(start..line.len());
    }
}
