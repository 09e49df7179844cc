use crate::deck::Deck;
use crate::error::InvalidIndex;
use crate::slide::Slide;

/// Current position in a deck. Always `index < deck.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    index: usize,
}

impl ViewState {
    pub fn index(self) -> usize {
        self.index
    }

    pub fn next(self, deck: &Deck) -> Self {
        Self {
            index: (self.index + 1) % deck.len(),
        }
    }

    pub fn previous(self, deck: &Deck) -> Self {
        let len = deck.len();
        Self {
            index: (self.index + len - 1) % len,
        }
    }

    /// Parses a 1-based slide number and returns the state pointing at it.
    pub fn jump_to(self, raw: &str, deck: &Deck) -> Result<Self, InvalidIndex> {
        let len = deck.len();
        let trimmed = raw.trim_matches(|c: char| c.is_ascii_whitespace());
        // `i64::from_str` accepts a leading '+', slide numbers don't.
        if trimmed.starts_with('+') {
            return Err(InvalidIndex::NotANumber(raw.to_string()));
        }
        let value: i64 = trimmed
            .parse()
            .map_err(|_| InvalidIndex::NotANumber(raw.to_string()))?;
        if value < 1 || value as u64 > len as u64 {
            return Err(InvalidIndex::OutOfRange { value, len });
        }
        Ok(Self {
            index: value as usize - 1,
        })
    }
}

/// 1-based position for display, e.g. "Image 2 of 5".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub current: usize,
    pub total: usize,
}

/// A deck plus the slide currently shown.
#[derive(Debug, Clone)]
pub struct SlideState {
    deck: Deck,
    view: ViewState,
}

impl SlideState {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            view: ViewState::default(),
        }
    }

    /// Opens the deck at `start` (1-based) when given, else at the first slide.
    pub fn starting_at(deck: Deck, start: Option<&str>) -> Result<Self, InvalidIndex> {
        let mut state = Self::new(deck);
        if let Some(raw) = start {
            state.jump_to(raw)?;
        }
        Ok(state)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn index(&self) -> usize {
        self.view.index()
    }

    pub fn next(&mut self) {
        self.view = self.view.next(&self.deck);
        log::debug!("next -> slide {}", self.view.index() + 1);
    }

    pub fn previous(&mut self) {
        self.view = self.view.previous(&self.deck);
        log::debug!("previous -> slide {}", self.view.index() + 1);
    }

    /// Leaves the current slide unchanged when `raw` is rejected.
    pub fn jump_to(&mut self, raw: &str) -> Result<(), InvalidIndex> {
        match self.view.jump_to(raw, &self.deck) {
            Ok(view) => {
                self.view = view;
                log::debug!("jump -> slide {}", view.index() + 1);
                Ok(())
            }
            Err(e) => {
                log::debug!("jump rejected: {}", e);
                Err(e)
            }
        }
    }

    pub fn current(&self) -> &Slide {
        &self.deck[self.view.index()]
    }

    pub fn position(&self) -> Position {
        Position {
            current: self.view.index() + 1,
            total: self.deck.len(),
        }
    }
}
