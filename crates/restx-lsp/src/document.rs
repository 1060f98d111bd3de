use tower_lsp::lsp_types::{Position, TextDocumentContentChangeEvent};

/// Represents an open document in the LSP server
pub struct Document {
    /// The current text content of the document
    text: String,
    /// Byte offset of the first character of each line
    line_starts: Vec<usize>,
    /// Version reported by the client with the last change
    version: i32,
}

impl Document {
    pub fn new(text: String, version: i32) -> Self {
        let line_starts = compute_line_starts(&text);
        Self {
            text,
            line_starts,
            version,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Apply a batch of content changes in order.
    ///
    /// Ranged changes splice into the current text; a change without a range
    /// replaces the whole document.
    pub fn apply_changes(&mut self, changes: Vec<TextDocumentContentChangeEvent>, version: i32) {
        for change in changes {
            match change.range {
                Some(range) => {
                    let start = self.offset_at(range.start);
                    let end = self.offset_at(range.end);
                    let (start, end) = if start <= end { (start, end) } else { (end, start) };
                    self.text.replace_range(start..end, &change.text);
                }
                None => self.text = change.text,
            }
            self.line_starts = compute_line_starts(&self.text);
        }
        self.version = version;
    }

    /// Get byte offset from an LSP position.
    ///
    /// `character` counts UTF-16 code units. Positions past the end of a line
    /// clamp to the line end and lines past the end clamp to the document end.
    pub fn offset_at(&self, position: Position) -> usize {
        let line = position.line as usize;
        let Some(&start) = self.line_starts.get(line) else {
            return self.text.len();
        };

        let end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.text.len());
        let line_text = strip_line_ending(&self.text[start..end]);

        let mut units = 0u32;
        for (idx, ch) in line_text.char_indices() {
            if units >= position.character {
                return start + idx;
            }
            units += ch.len_utf16() as u32;
        }
        start + line_text.len()
    }
}

/// Line starts for `\r\n`, `\n` and lone `\r` line endings
fn compute_line_starts(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut starts = vec![0];
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\r' if bytes.get(idx + 1) == Some(&b'\n') => {
                starts.push(idx + 2);
                idx += 2;
                continue;
            }
            b'\r' | b'\n' => starts.push(idx + 1),
            _ => {}
        }
        idx += 1;
    }
    starts
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}
