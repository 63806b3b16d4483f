//! Preview wiring for the image field.
//!
//! Binds to the fixed image input, reacts to selection changes, and writes
//! completed reads into an image element kept immediately after the input.
//! Overlapping reads are not sequenced against one another: completions are
//! applied as they arrive, so the read that finishes last determines the
//! final preview regardless of selection order.

use std::path::PathBuf;

use crate::config::PreviewStyle;
use crate::data_uri::DataUri;

use super::form::{Form, FormElement, ImageElement, IMAGE_INPUT_ID};

/// Fixed id of the element the binder creates and reuses.
pub const PREVIEW_ID: &str = "image-preview-js";

/// Connects the image input to its preview element.
///
/// Built once at startup; holds the input's id so later updates do not
/// repeat form-wide lookups at every step.
#[derive(Debug, Clone)]
pub struct PreviewBinder {
    input_id: String,
}

impl PreviewBinder {
    /// Locate the image input. Returns `None` when the form carries no such
    /// field, in which case the caller installs no preview wiring at all.
    pub fn bind(form: &Form) -> Option<Self> {
        match form.by_id(IMAGE_INPUT_ID) {
            Some(FormElement::File(field)) => Some(Self {
                input_id: field.id.clone(),
            }),
            _ => None,
        }
    }

    /// Record a selection change on the input.
    ///
    /// A cleared selection (`None`) is ignored and leaves any existing
    /// preview untouched. A chosen file is written back to the field and
    /// returned so the caller can start the asynchronous read.
    pub fn selection(&self, form: &mut Form, file: Option<PathBuf>) -> Option<PathBuf> {
        let path = file?;
        if let Some(FormElement::File(field)) = form.by_id_mut(&self.input_id) {
            field.selected = Some(path.clone());
        }
        Some(path)
    }

    /// Apply one completed read.
    ///
    /// Creates the preview element on first use, styled and inserted as the
    /// input's immediate sibling; afterwards only its `src` is overwritten.
    pub fn apply_read(&self, form: &mut Form, src: DataUri, style: PreviewStyle) {
        if let Some(FormElement::Image(preview)) = form.by_id_mut(PREVIEW_ID) {
            preview.src = src;
            return;
        }
        form.insert_after(
            &self.input_id,
            FormElement::Image(ImageElement {
                id: PREVIEW_ID.to_string(),
                src,
                style,
            }),
        );
    }
}
