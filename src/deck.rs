use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::DeckError;
use crate::slide::Slide;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Fixed, non-empty, ordered list of slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { slides })
    }

    /// One slide per image found in `dir`, in file name order.
    pub fn from_dir(dir: &Path) -> Result<Self, DeckError> {
        let paths = scan_image_dir(dir)?;
        log::info!("Found {} images in {}", paths.len(), dir.display());
        Self::new(paths.into_iter().map(Slide::from_path).collect())
    }

    /// Reorders the slides once; the deck is fixed again afterwards.
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.slides.shuffle(rng);
        self
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }
}

impl Index<usize> for Deck {
    type Output = Slide;

    fn index(&self, index: usize) -> &Slide {
        &self.slides[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

/// Image files directly inside `dir`, sorted by file name.
pub fn scan_image_dir(dir: &Path) -> Result<Vec<PathBuf>, DeckError> {
    let io_err = |source| DeckError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(DeckError::NoImages(dir.to_path_buf()))
    } else {
        Ok(paths)
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn deck_of(n: usize) -> Deck {
        Deck::new((0..n).map(|i| Slide::from_path(format!("{i}.png"))).collect()).unwrap()
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert!(matches!(Deck::new(Vec::new()), Err(DeckError::Empty)));
    }

    #[test]
    fn shuffle_keeps_every_slide() {
        let deck = deck_of(8);
        let shuffled = deck.clone().shuffled(&mut StdRng::seed_from_u64(7));
        assert_eq!(shuffled.len(), 8);
        assert!(!shuffled.is_empty());
        for slide in &deck {
            assert!(shuffled.iter().any(|s| s == slide));
        }
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(is_image(Path::new("a/B.JPEG")));
        assert!(is_image(Path::new("c.gif")));
        assert!(!is_image(Path::new("notes.txt")));
        assert!(!is_image(Path::new("README")));
    }
}
