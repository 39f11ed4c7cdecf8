//! Character sources feeding the scanner

/// Supplies characters one at a time with bounded lookahead.
///
/// `None` marks end of input for both methods.
pub trait CharSource {
    /// Consume and return the next character.
    fn next_char(&mut self) -> Option<char>;

    /// Return the `n`-th character after the one last returned by
    /// [`next_char`](CharSource::next_char) (1-indexed) without consuming it.
    fn peek(&self, n: usize) -> Option<char>;
}

/// In-memory source text.
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    input: Vec<char>,
    position: usize,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            input: text.chars().collect(),
            position: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl CharSource for SourceFile {
    fn next_char(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied();
        if ch.is_some() {
            self.position += 1;
        }
        ch
    }

    fn peek(&self, n: usize) -> Option<char> {
        if n == 0 {
            return None;
        }
        self.input.get(self.position + n - 1).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_kept() {
        let src = SourceFile::new(String::from("dir/prog.vc"), "");
        assert_eq!(src.name(), "dir/prog.vc");
    }

    #[test]
    fn test_next_and_peek() {
        let mut src = SourceFile::new("t.vc", "abc");
        assert_eq!(src.next_char(), Some('a'));
        assert_eq!(src.peek(1), Some('b'));
        assert_eq!(src.peek(2), Some('c'));
        assert_eq!(src.peek(3), None);
        assert_eq!(src.next_char(), Some('b'));
        assert_eq!(src.next_char(), Some('c'));
        assert_eq!(src.next_char(), None);
        assert_eq!(src.next_char(), None);
        assert_eq!(src.peek(1), None);
    }
}
