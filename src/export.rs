//! Writing icons to disk.
//!
//! Each icon is stored as `<output>/<name>.png`. The name is used verbatim
//! except that names which could resolve outside the output directory are
//! refused with [`IconError::UnsafeName`].

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::{IconError, Result};
use crate::icon::IconCanvas;

/// Extension appended to every icon file.
pub const ICON_EXTENSION: &str = "png";

/// Checks that `name` stays a single path component once `.png` is added.
///
/// Rejects path separators (`/` and `\`), NUL, and the special components
/// `.` and `..`.
pub fn validate_file_name(name: &str) -> Result<()> {
    let unsafe_char = name.chars().any(|c| matches!(c, '/' | '\\' | '\0'));
    if unsafe_char || name == "." || name == ".." {
        return Err(IconError::UnsafeName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Returns the path the icon for `name` is written to.
pub fn icon_path(output_dir: &Path, name: &str) -> Result<PathBuf> {
    validate_file_name(name)?;
    Ok(output_dir.join(format!("{name}.{ICON_EXTENSION}")))
}

/// Saves `canvas` as a PNG at `<output_dir>/<name>.png`, replacing any
/// existing file.
pub fn export_png(canvas: &IconCanvas, output_dir: &Path, name: &str) -> Result<PathBuf> {
    let path = icon_path(output_dir, name)?;
    canvas
        .data
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| IconError::Write {
            path: path.clone(),
            source,
        })?;
    tracing::info!(path = %path.display(), "wrote icon");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    #[test]
    fn path_is_name_plus_png() {
        let path = icon_path(Path::new("/icons"), "Alice").unwrap();
        assert_eq!(path, PathBuf::from("/icons/Alice.png"));

        let path = icon_path(Path::new("out"), "bob.smith").unwrap();
        assert_eq!(path, PathBuf::from("out/bob.smith.png"));
    }

    #[test]
    fn rejects_names_that_escape_the_directory() {
        for name in ["../x", "a/b", "a\\b", "..", ".", "nul\0byte", "/etc/passwd"] {
            let err = icon_path(Path::new("out"), name).unwrap_err();
            assert!(
                matches!(err, IconError::UnsafeName { .. }),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn keeps_other_names_verbatim() {
        for name in ["..hidden", "Zoë", "a b", "x..y", "🦆"] {
            assert!(validate_file_name(name).is_ok(), "{name:?} should be accepted");
        }
    }

    #[test]
    fn writes_readable_png() {
        let dir = tempfile::tempdir().unwrap();
        let canvas = IconCanvas::filled(12, Rgba([51, 32, 0, 255])).unwrap();

        let path = export_png(&canvas, dir.path(), "A").unwrap();

        assert_eq!(path, dir.path().join("A.png"));
        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (12, 12));
        assert_eq!(decoded.get_pixel(3, 3).0, [51, 32, 0, 255]);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("A.png"), b"stale").unwrap();

        let canvas = IconCanvas::filled(4, Rgba([1, 2, 3, 255])).unwrap();
        export_png(&canvas, dir.path(), "A").unwrap();

        let decoded = image::open(dir.path().join("A.png")).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0, [1, 2, 3, 255]);
    }

    #[test]
    fn missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let canvas = IconCanvas::new(4).unwrap();

        let err = export_png(&canvas, &missing, "A").unwrap_err();
        assert!(matches!(err, IconError::Write { .. }));
        assert!(err.is_per_name());
    }
}
