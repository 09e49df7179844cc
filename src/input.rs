use crate::error::InvalidIndex;
use crate::state::SlideState;

/// Longest number the jump field accepts.
pub const MAX_JUMP_DIGITS: usize = 6;

/// Text typed into the jump-to field, not yet submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpInput {
    text: String,
}

impl JumpInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the character was ignored.
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.text.len() >= MAX_JUMP_DIGITS {
            return false;
        }
        self.text.push(c);
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Jumps to the typed slide number. The field is cleared only on success.
    pub fn submit(&mut self, state: &mut SlideState) -> Result<(), InvalidIndex> {
        state.jump_to(&self.text)?;
        self.clear();
        Ok(())
    }
}
