//! Accumulated authoring data and image upload validation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{
    draft::{fields, DraftFields, DraftRecord},
    TravelLog, Visibility,
};
use crate::error::{LogbookError, Result};

/// An image selected in the settings step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageUpload {
    /// File name
    pub name: String,
    /// Size of the file in bytes
    pub size_bytes: u64,
    /// MIME type reported for the file
    pub mime_type: String,
}

impl ImageUpload {
    /// Uploads must be strictly smaller than this.
    pub const MAX_BYTES: u64 = 5 * 1024 * 1024;

    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Checks size and type.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::InvalidInput` for files of 5 MiB or more and for
    /// non-image MIME types.
    pub fn validate(&self) -> Result<()> {
        if self.size_bytes >= Self::MAX_BYTES {
            return Err(LogbookError::invalid_input("images")
                .with_reason(format!("{} must be smaller than 5MB", self.name)));
        }
        if !self.mime_type.starts_with("image/") {
            return Err(LogbookError::invalid_input("images")
                .with_reason(format!("{} is not an image", self.name)));
        }
        Ok(())
    }
}

impl FromStr for ImageUpload {
    type Err = String;

    /// Parses `name:size:mime`, e.g. `beach.jpg:120000:image/jpeg`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (Some(name), Some(size), Some(mime)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(format!("Expected name:size:mime, got '{s}'"));
        };
        if name.is_empty() {
            return Err(format!("Missing image name in '{s}'"));
        }
        let size_bytes = size
            .parse::<u64>()
            .map_err(|e| format!("Invalid image size '{size}': {e}"))?;
        Ok(Self::new(name, size_bytes, mime))
    }
}

/// The record a wizard session accumulates across its steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LogForm {
    /// Selected travel plan
    pub plan_id: Option<u64>,
    pub title: String,
    /// Body markup, opaque to this crate
    pub content: String,
    pub visibility: Visibility,
    /// Accepted image names
    pub images: Vec<String>,
}

impl LogForm {
    pub const MAX_TITLE_CHARS: usize = 100;
    pub const MAX_IMAGES: usize = 8;

    /// Seeds a form from a published log for editing.
    pub fn from_log(log: &TravelLog) -> Self {
        Self {
            plan_id: Some(log.plan_id),
            title: log.title.clone(),
            content: log.content.clone(),
            visibility: log.visibility,
            images: log.images.clone(),
        }
    }

    /// Validates and appends an image.
    pub fn add_image(&mut self, image: &ImageUpload) -> Result<()> {
        if self.images.len() >= Self::MAX_IMAGES {
            return Err(LogbookError::invalid_input("images")
                .with_reason(format!("At most {} images per log", Self::MAX_IMAGES)));
        }
        image.validate()?;
        self.images.push(image.name.clone());
        Ok(())
    }

    /// Replaces the title, rejecting titles over the length limit.
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        if title.chars().count() > Self::MAX_TITLE_CHARS {
            return Err(LogbookError::invalid_input("title").with_reason(format!(
                "Title must be at most {} characters",
                Self::MAX_TITLE_CHARS
            )));
        }
        self.title = title.to_string();
        Ok(())
    }

    /// Checks the fields required to publish: plan, title and content.
    ///
    /// Intermediate steps never call this; only the final submit does.
    pub fn validate_for_submit(&self) -> Result<()> {
        if self.plan_id.is_none() {
            return Err(LogbookError::invalid_input("plan_id")
                .with_reason("Select a travel plan before publishing"));
        }
        if self.title.trim().is_empty() {
            return Err(LogbookError::invalid_input("title").with_reason("Title is required"));
        }
        if self.content.trim().is_empty() {
            return Err(LogbookError::invalid_input("content").with_reason("Content is required"));
        }
        Ok(())
    }

    /// Snapshot of the autosaved fields.
    pub fn draft_fields(&self) -> DraftFields {
        DraftFields::from([
            (fields::TITLE.to_string(), self.title.clone()),
            (fields::CONTENT.to_string(), self.content.clone()),
        ])
    }

    /// Restores autosaved fields from a draft. Absent fields are left alone.
    pub fn apply_draft(&mut self, draft: &DraftRecord) {
        if let Some(title) = draft.field(fields::TITLE) {
            self.title = title.to_string();
        }
        if let Some(content) = draft.field(fields::CONTENT) {
            self.content = content.to_string();
        }
    }
}
