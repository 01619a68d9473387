/// Byte cursor over the source text.
///
/// `position` indexes `ch`, `read_position` is always one past it. Once
/// `position` reaches the end of the input `ch` is `None`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    position: usize,
    read_position: usize,
    ch: Option<u8>,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut cursor = Self {
            input,
            position: 0,
            read_position: 0,
            ch: None,
        };
        cursor.bump();
        cursor
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn first(&self) -> Option<u8> {
        self.ch
    }

    /// Byte after the current one, without consuming anything.
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.read_position).copied()
    }

    pub fn pos(&self) -> usize {
        self.position
    }

    pub fn is_eof(&self) -> bool {
        self.ch.is_none()
    }

    /// Moves to the next byte. Does nothing once past the end.
    pub fn bump(&mut self) {
        if self.read_position > self.input.len() {
            return;
        }
        self.ch = self.input.as_bytes().get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    pub fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) {
        while let Some(c) = self.ch {
            if !predicate(c) {
                break;
            }
            self.bump();
        }
    }

    /// Source text from `start` up to (not including) the current byte.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.position.min(self.input.len())]
    }
}
