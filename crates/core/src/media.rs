//! Naming rules for uploaded images.
//!
//! Uploads are stored under a per-resource folder with a random file name
//! that keeps only the (lowercased) original extension. The relative path
//! (`gallery/3f2a...c1.jpg`) is what gets persisted in the database.

use crate::error::CoreError;

/// Folder for images attached to rooms.
pub const ROOM_IMAGES_FOLDER: &str = "room_images";

/// Folder for gallery images.
pub const GALLERY_FOLDER: &str = "gallery";

/// Folder for food item images.
pub const FOOD_FOLDER: &str = "food";

/// Accepted image file extensions (lowercase).
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Extract and validate the extension of an uploaded file name.
///
/// `field` is the form field the file arrived in, used for error reporting.
pub fn image_extension(field: &'static str, file_name: &str) -> Result<String, CoreError> {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    if SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::validation(
            field,
            format!(
                "Upload a valid image. Supported formats: {}",
                SUPPORTED_IMAGE_EXTENSIONS.join(", ")
            ),
        ))
    }
}

/// Build the relative storage path for a new upload in `folder`.
pub fn stored_image_path(
    folder: &str,
    field: &'static str,
    file_name: &str,
) -> Result<String, CoreError> {
    let ext = image_extension(field, file_name)?;
    Ok(format!("{folder}/{}.{ext}", uuid::Uuid::new_v4().simple()))
}

/// Join a public media base URL and a stored relative path.
pub fn public_url(media_url: &str, stored_path: &str) -> String {
    format!(
        "{}/{}",
        media_url.trim_end_matches('/'),
        stored_path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(image_extension("image", "Sunset.JPG").unwrap(), "jpg");
    }

    #[test]
    fn only_last_extension_counts() {
        assert_eq!(image_extension("image", "archive.tar.png").unwrap(), "png");
        assert!(image_extension("image", "photo.png.exe").is_err());
    }

    #[test]
    fn missing_extension_rejected() {
        let err = image_extension("images[]", "README").unwrap_err();
        assert!(matches!(err, CoreError::Validation { field: "images[]", .. }));
    }

    #[test]
    fn stored_path_lives_in_folder_with_random_name() {
        let a = stored_image_path(GALLERY_FOLDER, "image", "beach.webp").unwrap();
        let b = stored_image_path(GALLERY_FOLDER, "image", "beach.webp").unwrap();

        assert!(a.starts_with("gallery/"));
        assert!(a.ends_with(".webp"));
        assert!(!a.contains("beach"));
        assert_ne!(a, b);
    }

    #[test]
    fn public_url_joins_without_double_slashes() {
        assert_eq!(
            public_url("http://localhost:3000/media/", "food/x.png"),
            "http://localhost:3000/media/food/x.png"
        );
        assert_eq!(public_url("/media", "/food/x.png"), "/media/food/x.png");
    }
}
