use std::path::{Path, PathBuf};

use clap::Parser;

pub const DEFAULT_STRINGS_FILE: &str = "strings.json";

/// Browse a directory of images with captions.
#[derive(Debug, Clone, Parser)]
#[command(name = "slideshow-viewer", version, about)]
pub struct Config {
    /// Directory containing the images
    pub image_dir: PathBuf,

    /// JSON string table with captions and labels [default: <IMAGE_DIR>/strings.json if present]
    #[arg(short, long, value_name = "FILE")]
    pub strings: Option<PathBuf>,

    /// Slide number to open first (1-based)
    #[arg(long, value_name = "N")]
    pub start: Option<String>,

    /// Shuffle the slides once at startup
    #[arg(long)]
    pub shuffle: bool,

    /// Window width in pixels
    #[arg(long, default_value_t = 480)]
    pub width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: i32,
}

impl Config {
    /// The string table to load, if any.
    pub fn strings_path(&self) -> Option<PathBuf> {
        self.strings.clone().or_else(|| {
            let candidate = self.image_dir.join(DEFAULT_STRINGS_FILE);
            candidate.is_file().then_some(candidate)
        })
    }

    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["slideshow-viewer", "photos"]).unwrap();
        assert_eq!(config.image_dir(), Path::new("photos"));
        assert_eq!(config.strings, None);
        assert_eq!(config.start, None);
        assert!(!config.shuffle);
        assert_eq!((config.width, config.height), (480, 800));
    }

    #[test]
    fn all_options() {
        let config = Config::try_parse_from([
            "slideshow-viewer",
            "photos",
            "--strings",
            "fr.json",
            "--start",
            "3",
            "--shuffle",
            "--width",
            "1024",
        ])
        .unwrap();
        assert_eq!(config.strings_path(), Some(PathBuf::from("fr.json")));
        assert_eq!(config.start.as_deref(), Some("3"));
        assert!(config.shuffle);
        assert_eq!(config.width, 1024);
    }

    #[test]
    fn image_dir_is_required() {
        assert!(Config::try_parse_from(["slideshow-viewer"]).is_err());
    }
}
