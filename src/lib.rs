//! A crate for generating square app icon PNGs in multiple sizes.
//! Each icon gets a solid background and a single centered visual:
//! an emoji glyph rendered from the first available system emoji font,
//! or a drawn shopping-cart shape when no usable font is found.
//!
//! ## Examples
//! ### Basic
//! In this example, one `icon-{size}x{size}.png` file is written per
//! size in [`IconSizes::PWA`].
//!
//! ```no_run
//! # use pwa_icon_gen::IconBuilder;
//! IconBuilder::default().write_all("assets/icons");
//! ```
//!
//! ### Custom Icon Sizes
//! If you only need a subset of sizes, you can specify a custom list.
//!
//! ```no_run
//! # use pwa_icon_gen::IconBuilder;
//! IconBuilder::default()
//!     .sizes(&[192, 512])
//!     .write_all("assets/icons");
//! ```

use image::{Rgb, RgbImage};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

mod draw;
mod error;
mod font;

pub use error::{Error, Result};
pub use font::{FontResolver, DEFAULT_FONT_PATHS};

/// Background color of every icon (#4CAF50).
pub const BACKGROUND: Rgb<u8> = Rgb([76, 175, 80]);
/// Foreground color used for the glyph and the fallback shape.
pub const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);
/// The glyph drawn when an emoji font is available.
pub const GLYPH: char = '\u{1F6D2}'; // 🛒
/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/icons";

/// A list of icon sizes.
#[derive(Debug)]
pub struct IconSizes(Cow<'static, [u32]>);

impl IconSizes {
    /// The icon sizes a PWA manifest conventionally lists: 72, 96, 128,
    /// 144, 152, 192, 384, and 512 pixels.
    pub const PWA: Self = Self::new(&[72, 96, 128, 144, 152, 192, 384, 512]);

    pub const fn new(sizes: &'static [u32]) -> IconSizes {
        Self(Cow::Borrowed(sizes))
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl Default for IconSizes {
    fn default() -> Self {
        IconSizes::PWA
    }
}

impl<'a, I> From<I> for IconSizes
where
    I: IntoIterator<Item = &'a u32>,
{
    fn from(value: I) -> Self {
        IconSizes(value.into_iter().copied().collect::<Vec<_>>().into())
    }
}

/// The visual drawn on a finished icon. Exactly one of the two is ever
/// drawn per icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual {
    /// The emoji glyph was rasterized from a resolved font.
    Glyph,
    /// No usable font or glyph outline; the cart shape was drawn instead.
    Cart,
}

/// A finished icon image together with the visual that was drawn on it.
#[derive(Debug)]
pub struct Icon {
    pub image: RgbImage,
    pub visual: Visual,
}

impl Icon {
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// The output file name derived from the icon size.
    pub fn file_name(&self) -> String {
        let size = self.size();
        format!("icon-{size}x{size}.png")
    }
}

/// Renders icons at a list of sizes and writes them out as PNG files.
#[derive(Debug)]
pub struct IconBuilder {
    sizes: IconSizes,
    background: Rgb<u8>,
    foreground: Rgb<u8>,
    glyph: char,
    resolver: FontResolver,
}

impl Default for IconBuilder {
    fn default() -> Self {
        IconBuilder {
            sizes: IconSizes::default(),
            background: BACKGROUND,
            foreground: FOREGROUND,
            glyph: GLYPH,
            resolver: FontResolver::default(),
        }
    }
}

impl IconBuilder {
    /// Customizes the rendered sizes. Defaults to [`IconSizes::PWA`].
    pub fn sizes(&mut self, sizes: impl Into<IconSizes>) -> &mut IconBuilder {
        self.sizes = sizes.into();
        self
    }

    pub fn background(&mut self, color: Rgb<u8>) -> &mut IconBuilder {
        self.background = color;
        self
    }

    pub fn foreground(&mut self, color: Rgb<u8>) -> &mut IconBuilder {
        self.foreground = color;
        self
    }

    /// Customizes the glyph drawn when a font resolves. Defaults to [`GLYPH`].
    pub fn glyph(&mut self, glyph: char) -> &mut IconBuilder {
        self.glyph = glyph;
        self
    }

    /// Customizes the font candidate paths. Defaults to [`DEFAULT_FONT_PATHS`].
    pub fn font_paths(
        &mut self,
        paths: impl IntoIterator<Item = impl Into<PathBuf>>,
    ) -> &mut IconBuilder {
        self.resolver = FontResolver::new(paths);
        self
    }

    /// Renders a single icon of `size × size` pixels.
    ///
    /// The glyph branch is attempted first: the resolver picks a font and
    /// the glyph is rasterized at 0.6× the icon size, centered. If the
    /// resolver comes up empty or the font has no drawable outline for
    /// the glyph, the cart shape is drawn instead. The image is never
    /// left blank and never carries both visuals.
    pub fn render(&self, size: u32) -> Icon {
        let mut image = RgbImage::from_pixel(size, size, self.background);

        let glyph_drawn = match self.resolver.resolve() {
            Some(font) => draw::draw_centered_glyph(&mut image, &font, self.glyph, self.foreground),
            None => false,
        };

        if glyph_drawn {
            Icon {
                image,
                visual: Visual::Glyph,
            }
        } else {
            draw::draw_cart(&mut image, self.foreground);
            Icon {
                image,
                visual: Visual::Cart,
            }
        }
    }

    /// Renders every size in list order and writes the PNGs into `dir`,
    /// creating the directory and any missing parents first. Existing
    /// files with matching names are overwritten; unrelated files are
    /// left alone. Returns the written paths.
    ///
    /// The first render or write error aborts the batch.
    pub fn write_all(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(self.sizes.as_slice().len());
        for &size in self.sizes.as_slice() {
            let icon = self.render(size);
            let path = dir.join(icon.file_name());
            icon.image.save(&path)?;
            written.push(path);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_only_builder() -> IconBuilder {
        // No resolvable font, so every render takes the cart branch.
        let mut builder = IconBuilder::default();
        builder.font_paths(["/nonexistent/emoji.ttf"]);
        builder
    }

    #[test]
    fn render_matches_requested_dimensions() {
        let builder = shape_only_builder();
        for &size in IconSizes::PWA.as_slice() {
            let icon = builder.render(size);
            assert_eq!(icon.image.width(), size);
            assert_eq!(icon.image.height(), size);
        }
    }

    #[test]
    fn render_without_font_draws_cart() {
        let icon = shape_only_builder().render(100);
        assert_eq!(icon.visual, Visual::Cart);
        // Cart signature: background at the body interior, foreground on
        // the body stroke.
        assert_eq!(*icon.image.get_pixel(50, 50), BACKGROUND);
        assert_eq!(*icon.image.get_pixel(20, 30), FOREGROUND);
    }

    #[test]
    fn file_name_derives_from_size() {
        let icon = shape_only_builder().render(192);
        assert_eq!(icon.file_name(), "icon-192x192.png");
    }

    #[test]
    fn write_all_emits_one_file_per_size() {
        let dir = tempfile::tempdir().unwrap();
        let written = shape_only_builder().write_all(dir.path()).unwrap();

        let expected: Vec<String> = IconSizes::PWA
            .as_slice()
            .iter()
            .map(|size| format!("icon-{size}x{size}.png"))
            .collect();
        assert_eq!(written.len(), expected.len());

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        let mut expected_sorted = expected.clone();
        expected_sorted.sort();
        assert_eq!(names, expected_sorted);
    }

    #[test]
    fn written_files_decode_to_requested_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let mut builder = shape_only_builder();
        builder.sizes(&[72, 512]);
        builder.write_all(dir.path()).unwrap();

        for size in [72u32, 512] {
            let path = dir.path().join(format!("icon-{size}x{size}.png"));
            let decoded = image::open(&path).unwrap();
            assert_eq!(decoded.width(), size);
            assert_eq!(decoded.height(), size);
        }
    }

    #[test]
    fn write_all_is_idempotent_on_shape_path() {
        let dir = tempfile::tempdir().unwrap();
        let builder = shape_only_builder();

        builder.write_all(dir.path()).unwrap();
        let first: Vec<Vec<u8>> = IconSizes::PWA
            .as_slice()
            .iter()
            .map(|size| fs::read(dir.path().join(format!("icon-{size}x{size}.png"))).unwrap())
            .collect();

        builder.write_all(dir.path()).unwrap();
        let second: Vec<Vec<u8>> = IconSizes::PWA
            .as_slice()
            .iter()
            .map(|size| fs::read(dir.path().join(format!("icon-{size}x{size}.png"))).unwrap())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn write_all_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        shape_only_builder().write_all(&nested).unwrap();
        assert!(nested.join("icon-72x72.png").exists());
    }

    #[test]
    fn write_all_leaves_unrelated_files_alone() {
        let dir = tempfile::tempdir().unwrap();
        let unrelated = dir.path().join("notes.txt");
        fs::write(&unrelated, b"keep me").unwrap();

        shape_only_builder().write_all(dir.path()).unwrap();
        assert_eq!(fs::read(&unrelated).unwrap(), b"keep me");
    }

    #[test]
    fn custom_sizes_override_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut builder = shape_only_builder();
        builder.sizes(&[128]);
        let written = builder.write_all(dir.path()).unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].ends_with("icon-128x128.png"));
    }
}
