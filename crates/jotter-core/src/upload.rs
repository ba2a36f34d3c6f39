//! Upload validation: filename sanitization and the ordered predicate
//! checks that gate image persistence.
//!
//! Each check maps to its own [`UploadRejection`] variant so the HTTP
//! layer can shape a distinct response per failure mode, and every
//! check runs before any byte touches disk.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::defaults::{ALLOWED_IMAGE_EXTENSIONS, MAX_UPLOAD_BYTES};

/// Why an upload was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    /// No file part was present in the request.
    #[error("no file supplied")]
    NoFile,

    /// The file part carried an empty filename.
    #[error("empty filename")]
    EmptyFilename,

    /// Extension not in the allowed image set. Carries the offending
    /// extension, or the whole sanitized name when it has none.
    #[error("invalid extension: {0}")]
    InvalidExtension(String),

    /// Declared or actual size above [`MAX_UPLOAD_BYTES`].
    #[error("file too large: {0} bytes")]
    TooLarge(u64),
}

/// A validated upload: the sanitized filename to persist under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedUpload {
    pub filename: String,
    pub extension: String,
}

/// Sanitize a client-supplied filename for filesystem use.
///
/// Strips path components, maps anything outside `[A-Za-z0-9._-]` to
/// `_`, and trims leading dots and underscores so the result cannot
/// escape the upload directory or hide itself.
pub fn sanitize_filename(filename: &str) -> String {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    sanitized.trim_start_matches(['.', '_']).to_string()
}

/// Run the upload gate in order: presence, filename, extension,
/// declared size.
///
/// `declared_len` is the request's Content-Length when present and is
/// checked before any body bytes are read; the handler re-checks the
/// actual length with [`check_size`] once the body has arrived.
pub fn validate_upload(
    filename: Option<&str>,
    declared_len: Option<u64>,
) -> std::result::Result<AcceptedUpload, UploadRejection> {
    let raw = filename.ok_or(UploadRejection::NoFile)?;
    if raw.trim().is_empty() {
        return Err(UploadRejection::EmptyFilename);
    }

    let name = sanitize_filename(raw);
    if name.is_empty() {
        return Err(UploadRejection::EmptyFilename);
    }

    let extension = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
        _ => return Err(UploadRejection::InvalidExtension(name)),
    };
    if !ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(UploadRejection::InvalidExtension(extension));
    }

    if let Some(len) = declared_len {
        if len > MAX_UPLOAD_BYTES {
            return Err(UploadRejection::TooLarge(len));
        }
    }

    Ok(AcceptedUpload {
        filename: name,
        extension,
    })
}

/// Size check applied to the fully-read body. Chunked uploads carry no
/// usable Content-Length, so the declared-size check alone is not
/// sufficient.
pub fn check_size(actual_len: u64) -> std::result::Result<(), UploadRejection> {
    if actual_len > MAX_UPLOAD_BYTES {
        Err(UploadRejection::TooLarge(actual_len))
    } else {
        Ok(())
    }
}

/// Build the unique on-disk name for an accepted upload:
/// `{UTC timestamp to the microsecond}_{sanitized name}`.
///
/// The timestamp component makes collisions possible only at
/// sub-microsecond resolution.
pub fn timestamped_name(now: DateTime<Utc>, sanitized: &str) -> String {
    format!("{}_{}", now.format("%Y%m%d%H%M%S%6f"), sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("/etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("..\\..\\evil.png"), "evil.png");
        assert_eq!(sanitize_filename("dir/photo.jpg"), "photo.jpg");
    }

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_filename("my photo (1).png"), "my_photo__1_.png");
        assert_eq!(sanitize_filename("a<b>:c.gif"), "a_b__c.gif");
    }

    #[test]
    fn test_sanitize_trims_leading_dots() {
        assert_eq!(sanitize_filename(".hidden.png"), "hidden.png");
        assert_eq!(sanitize_filename("___x.png"), "x.png");
    }

    #[test]
    fn test_validate_no_file() {
        assert_eq!(validate_upload(None, None), Err(UploadRejection::NoFile));
    }

    #[test]
    fn test_validate_empty_filename() {
        assert_eq!(
            validate_upload(Some(""), None),
            Err(UploadRejection::EmptyFilename)
        );
        assert_eq!(
            validate_upload(Some("   "), None),
            Err(UploadRejection::EmptyFilename)
        );
        // Nothing survives sanitization.
        assert_eq!(
            validate_upload(Some("..."), None),
            Err(UploadRejection::EmptyFilename)
        );
    }

    #[test]
    fn test_validate_rejects_executable_extension() {
        assert_eq!(
            validate_upload(Some("a.exe"), None),
            Err(UploadRejection::InvalidExtension("exe".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_missing_extension() {
        assert!(matches!(
            validate_upload(Some("noext"), None),
            Err(UploadRejection::InvalidExtension(_))
        ));
    }

    #[test]
    fn test_validate_extension_is_case_insensitive() {
        let accepted = validate_upload(Some("photo.PNG"), None).unwrap();
        assert_eq!(accepted.extension, "png");
        assert_eq!(accepted.filename, "photo.PNG");
    }

    #[test]
    fn test_validate_accepts_all_allowed_extensions() {
        for ext in ALLOWED_IMAGE_EXTENSIONS {
            let name = format!("pic.{ext}");
            assert!(validate_upload(Some(&name), Some(1024)).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_validate_rejects_oversized_declared_length() {
        let six_mib = 6 * 1024 * 1024;
        assert_eq!(
            validate_upload(Some("a.png"), Some(six_mib)),
            Err(UploadRejection::TooLarge(six_mib))
        );
    }

    #[test]
    fn test_validate_accepts_small_png() {
        let accepted = validate_upload(Some("a.png"), Some(1024)).unwrap();
        assert_eq!(accepted.filename, "a.png");
    }

    #[test]
    fn test_check_size_boundary() {
        assert!(check_size(MAX_UPLOAD_BYTES).is_ok());
        assert_eq!(
            check_size(MAX_UPLOAD_BYTES + 1),
            Err(UploadRejection::TooLarge(MAX_UPLOAD_BYTES + 1))
        );
    }

    #[test]
    fn test_timestamped_name_format() {
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap()
            + chrono::Duration::microseconds(535_897);
        assert_eq!(
            timestamped_name(at, "a.png"),
            "20260314150926535897_a.png"
        );
    }

    #[test]
    fn test_timestamped_name_ends_with_original() {
        let name = timestamped_name(Utc::now(), "photo.webp");
        assert!(name.ends_with("_photo.webp"));
    }
}
