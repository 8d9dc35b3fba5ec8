use ab_glyph::FontVec;
use std::fs;
use std::path::{Path, PathBuf};

/// Well-known emoji font install locations, in platform preference order.
pub const DEFAULT_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Apple Color Emoji.ttc",
    "/usr/share/fonts/truetype/noto/NotoColorEmoji.ttf",
    "C:\\Windows\\Fonts\\seguiemj.ttf",
];

/// Resolves a font from an ordered list of candidate file paths.
///
/// Only presence is probed; whether the resolved font can actually
/// render a given glyph is decided at draw time.
#[derive(Debug, Clone)]
pub struct FontResolver {
    candidates: Vec<PathBuf>,
}

impl FontResolver {
    pub fn new(candidates: impl IntoIterator<Item = impl Into<PathBuf>>) -> FontResolver {
        FontResolver {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads the first candidate that exists on disk.
    ///
    /// A candidate that exists but cannot be read or parsed yields `None`
    /// without trying the remaining candidates; the caller substitutes the
    /// drawn fallback shape in that case.
    pub fn resolve(&self) -> Option<FontVec> {
        let path = self.candidates.iter().find(|path| path.exists())?;
        load_font(path)
    }
}

impl Default for FontResolver {
    fn default() -> FontResolver {
        FontResolver::new(DEFAULT_FONT_PATHS.iter().map(PathBuf::from))
    }
}

fn load_font(path: &Path) -> Option<FontVec> {
    let data = fs::read(path).ok()?;
    // Index 0 covers both plain font files and collections (.ttc).
    FontVec::try_from_vec_and_index(data, 0).ok()
}
