//! Error types for icon generation.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IconError>;

/// Everything that can go wrong while turning a name into an icon file.
///
/// [`IconError::FontLoad`] and [`IconError::InvalidSize`] are fatal for a
/// whole batch. The remaining variants only fail the name being generated;
/// see [`is_per_name`](IconError::is_per_name).
#[derive(Error, Debug)]
pub enum IconError {
    #[error("failed to load font {}: {reason}", path.display())]
    FontLoad { path: PathBuf, reason: String },

    #[error("name is empty")]
    EmptyName,

    #[error("icon size must be between 1 and {max} pixels, got {0}", max = crate::icon::MAX_SIZE)]
    InvalidSize(u32),

    #[error("name {name:?} cannot be used as a file name")]
    UnsafeName { name: String },

    #[error("failed to render glyph: {0}")]
    Render(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IconError {
    /// Returns true if this error only affects the name being generated,
    /// leaving the rest of a batch free to continue.
    pub fn is_per_name(&self) -> bool {
        matches!(
            self,
            Self::EmptyName | Self::UnsafeName { .. } | Self::Render(_) | Self::Write { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_name_classification() {
        assert!(IconError::EmptyName.is_per_name());
        assert!(IconError::UnsafeName { name: "../x".into() }.is_per_name());
        assert!(!IconError::InvalidSize(0).is_per_name());
        assert!(
            !IconError::FontLoad {
                path: "/nope.otf".into(),
                reason: "missing".into()
            }
            .is_per_name()
        );
    }

    #[test]
    fn messages_name_the_offender() {
        let err = IconError::UnsafeName { name: "../x".into() };
        assert!(err.to_string().contains("\"../x\""));

        let err = IconError::FontLoad {
            path: "/fonts/missing.otf".into(),
            reason: "No such file".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/fonts/missing.otf"));
        assert!(msg.contains("No such file"));
    }
}
