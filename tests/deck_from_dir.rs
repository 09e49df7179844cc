use std::fs;

use slideshow_viewer::{Deck, DeckError, SlideState, Strings};
use tempfile::TempDir;

fn touch(dir: &TempDir, name: &str) {
    fs::write(dir.path().join(name), b"").unwrap();
}

#[test]
fn images_are_sorted_and_filtered() {
    let dir = TempDir::new().unwrap();
    for name in ["trees.png", "city.JPG", "notes.txt", "crow.jpeg", "strings.json"] {
        touch(&dir, name);
    }
    fs::create_dir(dir.path().join("nested.png")).unwrap();

    let deck = Deck::from_dir(dir.path()).unwrap();
    let captions: Vec<_> = deck.iter().map(|s| s.caption.key().to_string()).collect();
    assert_eq!(captions, ["caption_city", "caption_crow", "caption_trees"]);
}

#[test]
fn directory_without_images_is_an_error() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "readme.md");
    assert!(matches!(Deck::from_dir(dir.path()), Err(DeckError::NoImages(_))));
}

#[test]
fn missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    assert!(matches!(Deck::from_dir(&missing), Err(DeckError::Io { .. })));
}

#[test]
fn captions_resolve_through_string_table() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "city.png");
    touch(&dir, "train.png");
    let table = dir.path().join("strings.json");
    fs::write(&table, r#"{"caption_city": "City at night", "image_counter": "{current} / {total}"}"#).unwrap();

    let strings = Strings::load(&table).unwrap();
    let mut state = SlideState::new(Deck::from_dir(dir.path()).unwrap());

    assert_eq!(strings.resolve(&state.current().caption), "City at night");
    state.next();
    assert_eq!(strings.resolve(&state.current().caption), "train");
    assert_eq!(strings.counter(state.position()), "2 / 2");
}
