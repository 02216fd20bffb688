//! Buffered multipart form extraction.
//!
//! Image endpoints accept `multipart/form-data`. [`FormData`] reads every
//! part up front so handlers can validate all fields before writing any file.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};

use crate::error::{AppError, AppResult};

/// A file part of a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Form field name (e.g. `images[]`).
    pub field: String,
    /// Client-supplied file name; only its extension is kept.
    pub file_name: String,
    pub data: Bytes,
}

/// All text fields and files of a multipart request.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    files: Vec<UploadedFile>,
}

impl FormData {
    /// Text value of `name`, if present.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Trimmed text value of `name`, treating blank values as absent.
    pub fn non_blank(&self, name: &str) -> Option<&str> {
        self.text(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Every file uploaded under any of `names`, in upload order.
    pub fn files<'a>(
        &'a self,
        names: &'a [&'a str],
    ) -> impl Iterator<Item = &'a UploadedFile> + 'a {
        self.files
            .iter()
            .filter(move |f| names.contains(&f.field.as_str()))
    }

    /// The first file uploaded under `name`.
    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.iter().find(|f| f.field == name)
    }

    /// Read every part of `multipart`. Parts with a file name are files;
    /// everything else is a text field (last value wins).
    pub async fn read(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = FormData::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?
        {
            let name = field.name().unwrap_or("").to_string();
            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.body_text()))?;
                    // Browsers send an empty part for an untouched file input.
                    if !file_name.is_empty() || !data.is_empty() {
                        form.files.push(UploadedFile {
                            field: name,
                            file_name,
                            data,
                        });
                    }
                }
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.body_text()))?;
                    form.fields.insert(name, text);
                }
            }
        }

        Ok(form)
    }
}

impl<S> FromRequest<S> for FormData
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        FormData::read(multipart).await
    }
}
