//! Logo upload checks.

use thiserror::Error;

/// Image types the renderer can composite.
pub const ACCEPTED_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif"];

pub const LOGO_INPUT_ID: &str = "logo";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogoError {
    #[error("`{name}` is not a JPEG, PNG, or GIF image")]
    UnsupportedType { name: String },
    #[error("`{name}` is empty")]
    Empty { name: String },
    #[error("`{name}` could not be read")]
    Unreadable { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoFile {
    pub name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl LogoFile {
    /// Accept a non-empty file whose extension maps to one of [`ACCEPTED_TYPES`].
    pub fn accept(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, LogoError> {
        let name = name.into();
        let Some(mime) = detect_mime(&name) else {
            return Err(LogoError::UnsupportedType { name });
        };
        if bytes.is_empty() {
            return Err(LogoError::Empty { name });
        }
        Ok(Self { name, mime, bytes })
    }
}

fn detect_mime(name: &str) -> Option<&'static str> {
    mime_guess::from_path(name).iter_raw().find_map(|guess| {
        ACCEPTED_TYPES
            .iter()
            .copied()
            .find(|accepted| accepted.eq_ignore_ascii_case(guess))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_raster_formats() {
        assert_eq!(LogoFile::accept("brand.PNG", vec![1]).unwrap().mime, "image/png");
        assert_eq!(LogoFile::accept("photo.jpeg", vec![0xff]).unwrap().mime, "image/jpeg");
        assert_eq!(LogoFile::accept("anim.gif", vec![b'G']).unwrap().mime, "image/gif");
    }

    #[test]
    fn rejects_zero_byte_images() {
        assert_eq!(
            LogoFile::accept("brand.png", Vec::new()),
            Err(LogoError::Empty { name: "brand.png".into() })
        );
    }

    #[test]
    fn rejects_everything_else() {
        for name in ["vector.svg", "notes.txt", "no_extension", "image.webp"] {
            assert_eq!(
                LogoFile::accept(name, vec![1, 2, 3]),
                Err(LogoError::UnsupportedType { name: name.into() })
            );
        }
    }
}
