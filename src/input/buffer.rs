/// Single-line editing buffer with a character cursor.
///
/// A numeric buffer only accepts ASCII digits, which is how the station form
/// keeps its retention and replica fields parseable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    content: String,
    cursor: usize,
    numeric: bool,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn numeric() -> Self {
        Self {
            numeric: true,
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.set(value);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric
    }

    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Parsed value of a numeric buffer; empty reads as zero
    pub fn as_u64(&self) -> u64 {
        if self.content.is_empty() {
            return 0;
        }
        self.content.parse().unwrap_or(u64::MAX)
    }

    /// Insert at the cursor. Returns false when the character was rejected.
    pub fn insert(&mut self, c: char) -> bool {
        if self.numeric && !c.is_ascii_digit() {
            return false;
        }
        let byte_pos = self.cursor_byte_position();
        self.content.insert(byte_pos, c);
        self.cursor += 1;
        true
    }

    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        self.remove_at_cursor();
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, value: &str) {
        self.content = if self.numeric {
            value.chars().filter(|c| c.is_ascii_digit()).collect()
        } else {
            value.to_string()
        };
        self.cursor = self.len();
    }

    fn remove_at_cursor(&mut self) {
        let byte_pos = self.cursor_byte_position();
        let next_byte_pos = self.content[byte_pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| byte_pos + i)
            .unwrap_or(self.content.len());
        self.content.drain(byte_pos..next_byte_pos);
    }

    fn cursor_byte_position(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}
