//! Append-only output buffer for translated text.
//!
//! Every token goes through one of two methods: [`SourceWriter::emit`]
//! prefixes a single space, [`SourceWriter::emit_no_space`] appends the text
//! as is. There are no positions to seek to; the only read operations are
//! snapshots of what has been written so far.

#[derive(Debug, Default, Clone)]
pub struct SourceWriter {
    output: String,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` preceded by a single space.
    pub fn emit(&mut self, text: &str) {
        self.output.reserve(text.len() + 1);
        self.output.push(' ');
        self.output.push_str(text);
    }

    /// Append `text` directly after the previous fragment.
    pub fn emit_no_space(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Snapshot of the output written so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Consume the writer and return the output.
    pub fn finish(self) -> String {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_prefixes_space() {
        let mut writer = SourceWriter::new();
        writer.emit("List");
        writer.emit("<");
        assert_eq!(writer.as_str(), " List <");
    }

    #[test]
    fn test_emit_no_space_appends_directly() {
        let mut writer = SourceWriter::new();
        writer.emit("x");
        writer.emit_no_space(".");
        writer.emit_no_space("y");
        assert_eq!(writer.finish(), " x.y");
    }

    #[test]
    fn test_empty_writer() {
        let writer = SourceWriter::new();
        assert!(writer.is_empty());
        assert_eq!(writer.len(), 0);
        assert_eq!(writer.finish(), "");
    }
}
