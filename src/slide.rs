use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque handle to an image asset. The viewer resolves it into a texture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(PathBuf);

impl ImageRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// Opaque key into the string table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextRef(String);

impl TextRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TextRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub image: ImageRef,
    pub caption: TextRef,
}

impl Slide {
    pub fn new(image: ImageRef, caption: TextRef) -> Self {
        Self { image, caption }
    }

    /// Slide for an image file, captioned by `caption_<file stem>`.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            image: ImageRef::new(path),
            caption: TextRef::new(format!("{}{}", crate::strings::CAPTION_PREFIX, stem)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_key_comes_from_file_stem() {
        let slide = Slide::from_path("/photos/Kitchen.JPG");
        assert_eq!(slide.caption.key(), "caption_Kitchen");
        assert_eq!(slide.image.path(), Path::new("/photos/Kitchen.JPG"));
    }
}
