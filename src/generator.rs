//! Name-to-icon generation.
//!
//! [`render_icon`] is the pure core: the same name, font and size always
//! produce the same pixels. [`IconGenerator`] adds the configured output
//! directory and drives whole batches, sequentially or on a rayon pool.

use std::path::PathBuf;

use rayon::prelude::*;

use crate::color::{ColorPair, to_hex};
use crate::config::GeneratorConfig;
use crate::digest::NameDigest;
use crate::error::{IconError, Result};
use crate::export::{export_png, validate_file_name};
use crate::font::{FontProvider, SvgFont};
use crate::glyph::Glyph;
use crate::icon::IconCanvas;
use crate::layer::LayerPipeline;

// ============================================================================
// Rendering
// ============================================================================

/// An icon rendered in memory, along with what it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedIcon {
    pub colors: ColorPair,
    pub glyph: Glyph,
    pub canvas: IconCanvas,
}

/// Renders the icon for `name` at `size` x `size` pixels.
///
/// Fails with [`IconError::EmptyName`] for an empty name and
/// [`IconError::InvalidSize`] unless `size` is in `1..=MAX_SIZE`.
///
/// [`MAX_SIZE`]: crate::MAX_SIZE
pub fn render_icon<F: FontProvider>(name: &str, size: u32, font: &F) -> Result<RenderedIcon> {
    let glyph = Glyph::from_name(name)?;
    let digest = NameDigest::of(name);
    let colors = ColorPair::from_digest(&digest);

    tracing::debug!(
        name = %name,
        digest = %digest.to_hex(),
        glyph = %glyph,
        foreground = %to_hex(colors.foreground),
        background = %to_hex(colors.background),
        "derived icon parameters"
    );

    let canvas = LayerPipeline::new(&colors, glyph.clone(), font).render(size)?;
    Ok(RenderedIcon {
        colors,
        glyph,
        canvas,
    })
}

// ============================================================================
// Batch Report
// ============================================================================

/// The result of generating one name.
#[derive(Debug)]
pub struct IconOutcome {
    pub name: String,
    pub result: Result<PathBuf>,
}

/// Per-name results of a batch, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<IconOutcome>,
}

impl BatchReport {
    /// Returns true if every name produced a file.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// Paths of the icons that were written.
    pub fn written(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Names that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &IconError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.name.as_str(), e)))
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

// ============================================================================
// IconGenerator
// ============================================================================

/// Generates icon files according to a [`GeneratorConfig`].
///
/// The font is loaded once when the generator is built and shared read-only
/// by every name afterwards.
///
/// # Example
///
/// ```no_run
/// use buddy_icon::{GeneratorConfig, IconGenerator};
///
/// let config = GeneratorConfig::new().with_output("icons");
/// let generator = IconGenerator::from_config(config)?;
///
/// let report = generator.generate_all(&["Alice", "Bob"]);
/// assert!(report.is_success());
/// # Ok::<(), buddy_icon::IconError>(())
/// ```
pub struct IconGenerator<F: FontProvider = SvgFont> {
    config: GeneratorConfig,
    font: F,
}

impl IconGenerator<SvgFont> {
    /// Validates `config` and loads its font with resvg.
    pub fn from_config(config: GeneratorConfig) -> Result<Self> {
        Self::load(config)
    }
}

impl<F: FontProvider> IconGenerator<F> {
    /// Validates `config` and loads its font with `F`.
    pub fn load(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let font = F::load(&config.font)?;
        Ok(Self { config, font })
    }

    /// Builds a generator around an already loaded font.
    pub fn with_font(config: GeneratorConfig, font: F) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, font })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn font(&self) -> &F {
        &self.font
    }

    /// Renders the icon for `name` without writing it.
    pub fn render(&self, name: &str) -> Result<RenderedIcon> {
        render_icon(name, self.config.size, &self.font)
    }

    /// Renders the icon for `name` and writes it to the output directory.
    ///
    /// Returns the path of the written file.
    pub fn generate(&self, name: &str) -> Result<PathBuf> {
        // Unsafe names are refused before rendering; "" passes here and
        // fails in render with EmptyName.
        validate_file_name(name)?;
        let icon = self.render(name)?;
        export_png(&icon.canvas, &self.config.output, name)
    }

    /// Generates every name, continuing past per-name failures.
    ///
    /// Names run in parallel when the config asks for it; the report is in
    /// input order either way.
    pub fn generate_all<S>(&self, names: &[S]) -> BatchReport
    where
        S: AsRef<str> + Sync,
    {
        let run = |name: &S| self.outcome(name.as_ref());
        let outcomes = if self.config.parallel {
            names.par_iter().map(run).collect()
        } else {
            names.iter().map(run).collect()
        };
        BatchReport { outcomes }
    }

    fn outcome(&self, name: &str) -> IconOutcome {
        let result = self.generate(name);
        if let Err(ref e) = result {
            tracing::warn!(name = %name, error = %e, "failed to generate icon");
        }
        IconOutcome {
            name: name.to_string(),
            result,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::layer::tests::BlockFont;

    fn generator(dir: &Path, parallel: bool) -> IconGenerator<BlockFont> {
        let config = GeneratorConfig::new()
            .with_output(dir)
            .with_parallel(parallel);
        IconGenerator::with_font(config, BlockFont::default()).unwrap()
    }

    #[test]
    fn render_for_a() {
        let icon = render_icon("A", 96, &BlockFont::default()).unwrap();

        assert_eq!(icon.glyph.as_str(), "A");
        let fg = icon.colors.foreground;
        let bg = icon.colors.background;
        assert_eq!((fg.red, fg.green, fg.blue), (40, 248, 167));
        assert_eq!((bg.red, bg.green, bg.blue), (51, 32, 0));
        assert_eq!(icon.canvas.dimensions().width, 96);
        assert_eq!(icon.canvas.dimensions().height, 96);
    }

    #[test]
    fn render_is_pure() {
        let font = BlockFont::default();
        for name in ["A", "alice", "Zoë"] {
            assert_eq!(
                render_icon(name, 33, &font).unwrap(),
                render_icon(name, 33, &font).unwrap()
            );
        }
    }

    #[test]
    fn canvas_matches_requested_size() {
        let font = BlockFont::default();
        for size in [1, 2, 16, 95, 96, 97, 256] {
            let icon = render_icon("size", size, &font).unwrap();
            assert_eq!(icon.canvas.data.dimensions(), (size, size));
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = render_icon("", 96, &BlockFont::default()).unwrap_err();
        assert!(matches!(err, IconError::EmptyName));
    }

    #[test]
    fn oversized_render_is_rejected() {
        for size in [crate::MAX_SIZE + 1, u32::MAX] {
            let err = render_icon("A", size, &BlockFont::default()).unwrap_err();
            assert!(matches!(err, IconError::InvalidSize(s) if s == size));
        }
    }

    #[test]
    fn zero_size_config_is_rejected() {
        let config = GeneratorConfig::new().with_size(0);
        let err = IconGenerator::with_font(config, BlockFont::default())
            .err()
            .unwrap();
        assert!(matches!(err, IconError::InvalidSize(0)));
    }

    #[test]
    fn missing_font_fails_before_any_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::new()
            .with_font(dir.path().join("missing.otf"))
            .with_output(dir.path());

        let err = IconGenerator::from_config(config).err().unwrap();
        assert!(matches!(err, IconError::FontLoad { .. }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn generate_writes_icon_file() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator(dir.path(), false);

        let path = generator.generate("A").unwrap();

        assert_eq!(path, dir.path().join("A.png"));
        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (96, 96));
        assert_eq!(decoded.get_pixel(0, 0).0, [51, 32, 0, 255]);
        assert_eq!(decoded.get_pixel(48, 95).0, [40, 248, 167, 255]);
    }

    #[test]
    fn repeated_generation_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator(dir.path(), false);

        let path = generator.generate("Bob").unwrap();
        let first = std::fs::read(&path).unwrap();
        generator.generate("Bob").unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn batch_continues_past_failures() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator(dir.path(), false);

        let report = generator.generate_all(&["Alice", "", "../escape", "Bob"]);

        assert!(!report.is_success());
        assert_eq!(report.len(), 4);
        assert_eq!(report.written().count(), 2);
        assert!(dir.path().join("Alice.png").exists());
        assert!(dir.path().join("Bob.png").exists());
        assert!(!dir.path().join("../escape.png").exists());

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 2);
        assert!(matches!(failures[0], ("", IconError::EmptyName)));
        assert!(matches!(
            failures[1],
            ("../escape", IconError::UnsafeName { .. })
        ));
    }

    #[test]
    fn unsafe_name_is_refused_before_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator(dir.path(), false);

        assert!(matches!(
            generator.generate("a/b"),
            Err(IconError::UnsafeName { .. })
        ));
        assert!(matches!(generator.generate(""), Err(IconError::EmptyName)));
        assert!(generator.font().calls.lock().unwrap().is_empty());
    }

    #[test]
    fn parallel_batch_matches_sequential() {
        let names = ["Alice", "alice", "Bob", "bob", "x", "Émile", "Zoë"];

        let seq_dir = tempfile::tempdir().unwrap();
        let par_dir = tempfile::tempdir().unwrap();
        let sequential = generator(seq_dir.path(), false).generate_all(&names);
        let parallel = generator(par_dir.path(), true).generate_all(&names);

        assert!(sequential.is_success());
        assert!(parallel.is_success());
        let order: Vec<_> = parallel.outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(order, names);

        for name in names {
            let file = format!("{name}.png");
            assert_eq!(
                std::fs::read(seq_dir.path().join(&file)).unwrap(),
                std::fs::read(par_dir.path().join(&file)).unwrap()
            );
        }
    }

    #[test]
    fn empty_batch_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let report = generator(dir.path(), false).generate_all::<&str>(&[]);
        assert!(report.is_empty());
        assert!(report.is_success());
    }
}
