//! Generated point names: `A..Z`, then `AA..ZZ`, `AAA..ZZZ`, ...

const START: u8 = b'A';
const END: u8 = b'Z';

/// Lazy name sequence owned by one registry. Advances only when a name is taken.
#[derive(Clone, Debug)]
pub struct NameSequence {
    letter: u8,
    repeat: usize,
}

impl Default for NameSequence {
    fn default() -> Self {
        Self {
            letter: START,
            repeat: 1,
        }
    }
}

impl NameSequence {
    /// Name that the next call to `next_name` returns.
    pub fn peek(&self) -> String {
        (self.letter as char).to_string().repeat(self.repeat)
    }

    pub fn next_name(&mut self) -> String {
        let name = self.peek();
        if self.letter == END {
            self.letter = START;
            self.repeat += 1;
        } else {
            self.letter += 1;
        }
        name
    }
}

impl Iterator for NameSequence {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_name())
    }
}
