//! Source positions.
//!
//! Offsets are byte offsets into the UTF-8 source. Lines and columns are
//! 1-based and counted in characters, which is what people see in an editor.

use serde::Serialize;

/// Where a token or diagnostic sits in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// 1-based line of `start`.
    pub line: usize,
    /// 1-based column of `start`, in characters.
    pub column: usize,
}

impl Position {
    /// Length of the covered source in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when the position covers no source text (e.g. end of file).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Maps byte offsets to line/column pairs.
///
/// Built once per source; lookups are a binary search over line starts.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
    /// Byte offset of every non-ASCII character, paired with the running
    /// total of continuation bytes up to and including it.
    wide_chars: Vec<(usize, usize)>,
}

impl<'a> LineIndex<'a> {
    /// Index every line start in `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        let mut continuation = 0;
        let wide_chars = source
            .char_indices()
            .filter(|(_, c)| !c.is_ascii())
            .map(|(i, c)| {
                continuation += c.len_utf8() - 1;
                (i, continuation)
            })
            .collect();
        Self {
            source,
            line_starts,
            wide_chars,
        }
    }

    /// Number of lines in the source. An empty source has one line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Resolve a byte offset to a 1-based `(line, column)` pair.
    ///
    /// The column is the byte distance from the line start minus the
    /// continuation bytes in between, so lookups cost two binary searches no
    /// matter how long the line is. Offsets past the end clamp to the end of
    /// the source; offsets inside a character count that character.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let mut offset = offset.min(self.source.len());
        while !self.source.is_char_boundary(offset) {
            offset += 1;
        }
        // line_starts[0] == 0, so at least one start is <= offset
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let continuation =
            self.continuation_bytes_before(offset) - self.continuation_bytes_before(line_start);
        (line, offset - line_start - continuation + 1)
    }

    /// Continuation bytes belonging to characters that start before `offset`.
    fn continuation_bytes_before(&self, offset: usize) -> usize {
        match self.wide_chars.partition_point(|&(start, _)| start < offset) {
            0 => 0,
            n => self.wide_chars[n - 1].1,
        }
    }

    /// Build a [`Position`] for the byte range `start..end`.
    #[must_use]
    pub fn position(&self, start: usize, end: usize) -> Position {
        let (line, column) = self.line_col(start);
        Position {
            start,
            end,
            line,
            column,
        }
    }
}
