//! Form State
//!
//! Modal form data shared by the category and subcategory views.

use crate::api::{FilePart, Multipart};
use crate::error::FormError;
use crate::models::Category;

/// Multipart field names expected by the backend
pub const NAME_FIELD: &str = "categoryName";
pub const IMAGE_FIELD: &str = "image";

/// Image of an entry: either already hosted, or picked locally and not sent yet
#[derive(Debug, Clone, PartialEq)]
pub enum ImageRef {
    Remote(String),
    Pending { file: FilePart, preview_url: String },
}

impl ImageRef {
    /// URL usable as `<img src>`
    pub fn preview_url(&self) -> &str {
        match self {
            ImageRef::Remote(url) => url,
            ImageRef::Pending { preview_url, .. } => preview_url,
        }
    }

    pub fn pending_file(&self) -> Option<&FilePart> {
        match self {
            ImageRef::Remote(_) => None,
            ImageRef::Pending { file, .. } => Some(file),
        }
    }
}

/// Name + image form used by both modals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryForm {
    pub name: String,
    pub image: Option<ImageRef>,
}

impl EntryForm {
    /// Prefill from an existing category for editing
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            image: Some(category.image.clone())
                .filter(|url| !url.is_empty())
                .map(ImageRef::Remote),
        }
    }

    /// Body for category create/update: the image is only sent when a new
    /// file was picked.
    pub fn to_multipart(&self) -> Multipart {
        let body = Multipart::new().text(NAME_FIELD, self.name.clone());
        match self.image.as_ref().and_then(ImageRef::pending_file) {
            Some(file) => body.file(IMAGE_FIELD, file.clone()),
            None => body,
        }
    }

    /// Body for subcategory creation, which needs both a name and a new image
    pub fn to_complete_multipart(&self) -> Result<Multipart, FormError> {
        let file = self
            .image
            .as_ref()
            .and_then(ImageRef::pending_file)
            .ok_or(FormError::NameAndImageRequired)?;
        if self.name.trim().is_empty() {
            return Err(FormError::NameAndImageRequired);
        }
        Ok(Multipart::new()
            .text(NAME_FIELD, self.name.clone())
            .file(IMAGE_FIELD, file.clone()))
    }
}

/// Which modal is open
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormMode {
    #[default]
    Closed,
    Creating,
    Editing(Category),
}

impl FormMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormMode::Closed)
    }

    /// Id of the category being edited
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            FormMode::Editing(category) => Some(category.id.as_str()),
            _ => None,
        }
    }
}
