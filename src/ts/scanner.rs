use crate::ts::tree::Node;

/// Resolves the source text covered by a node.
pub trait NodeText {
    fn text<'s>(&'s self, node: Node<'_>) -> &'s str;
}

/// Read-only view over one source file: node text and 1-based line lookup.
#[derive(Debug, Clone)]
pub struct SourceScanner<'s> {
    source: &'s str,
    /// Byte offset at which each line starts.
    line_starts: Vec<usize>,
}

impl<'s> SourceScanner<'s> {
    pub fn new(source: &'s str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Exact text of the node, or `""` if its range does not fit the source.
    pub fn text(&self, node: Node<'_>) -> &'s str {
        self.source.get(node.byte_range()).unwrap_or("")
    }

    /// 1-based line number containing the node's first byte.
    pub fn line_number(&self, node: Node<'_>) -> usize {
        self.line_of_byte(node.span().start_byte)
    }

    /// 1-based line number containing `byte`.
    pub fn line_of_byte(&self, byte: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= byte)
    }

    /// 0-based column (in bytes) of the node's first byte within its line.
    pub fn column(&self, node: Node<'_>) -> usize {
        let start = node.span().start_byte;
        start - self.line_starts[self.line_of_byte(start) - 1]
    }

    /// Content of a 1-based line, without its line terminator.
    pub fn line_text(&self, line: usize) -> Option<&'s str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .map(|&next| next - 1)
            .unwrap_or(self.source.len());
        let text = &self.source[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

impl NodeText for SourceScanner<'_> {
    fn text<'a>(&'a self, node: Node<'_>) -> &'a str {
        SourceScanner::text(self, node)
    }
}
