//! The product form shown by the window.
//!
//! Elements live in display order and are addressed by fixed string ids,
//! mirroring the admin form this tool previews for.

use std::path::PathBuf;

use crate::config::PreviewStyle;
use crate::data_uri::DataUri;

/// Fixed id of the image upload field.
pub const IMAGE_INPUT_ID: &str = "id_image";

/// An editable single-line field.
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    pub id: String,
    pub label: String,
    pub value: String,
}

/// A file selection field.
///
/// `selected` mirrors the filename a browser shows next to a file input
/// after a pick; it is display state only, the file itself is never held.
#[derive(Debug, Clone, PartialEq)]
pub struct FileField {
    pub id: String,
    pub label: String,
    pub selected: Option<PathBuf>,
}

/// An image display element, created lazily by the preview wiring.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub id: String,
    pub src: DataUri,
    pub style: PreviewStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormElement {
    Text(TextField),
    File(FileField),
    Image(ImageElement),
}

impl FormElement {
    pub fn id(&self) -> &str {
        match self {
            FormElement::Text(field) => &field.id,
            FormElement::File(field) => &field.id,
            FormElement::Image(element) => &element.id,
        }
    }
}

/// Ordered collection of form elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Form {
    elements: Vec<FormElement>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// The product entry form: title, price, description and image upload,
    /// with the `id_`-prefixed element ids the admin site generates.
    pub fn product_form() -> Self {
        let mut form = Form::new();
        form.push(FormElement::Text(TextField {
            id: "id_title".into(),
            label: "Title".into(),
            value: String::new(),
        }));
        form.push(FormElement::Text(TextField {
            id: "id_price".into(),
            label: "Price".into(),
            value: String::new(),
        }));
        form.push(FormElement::Text(TextField {
            id: "id_description".into(),
            label: "Description".into(),
            value: String::new(),
        }));
        form.push(FormElement::File(FileField {
            id: IMAGE_INPUT_ID.into(),
            label: "Image".into(),
            selected: None,
        }));
        form
    }

    pub fn push(&mut self, element: FormElement) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[FormElement] {
        &self.elements
    }

    pub fn by_id(&self, id: &str) -> Option<&FormElement> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn by_id_mut(&mut self, id: &str) -> Option<&mut FormElement> {
        self.elements.iter_mut().find(|element| element.id() == id)
    }

    /// Display position of an element, if present.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|element| element.id() == id)
    }

    /// Insert `element` as the immediate sibling after `anchor_id`.
    /// Does nothing when the anchor is missing.
    pub fn insert_after(&mut self, anchor_id: &str, element: FormElement) {
        if let Some(index) = self.position(anchor_id) {
            self.elements.insert(index + 1, element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_product_form_carries_the_image_input() {
        let form = Form::product_form();
        match form.by_id(IMAGE_INPUT_ID) {
            Some(FormElement::File(field)) => assert!(field.selected.is_none()),
            other => panic!("expected a file field, got {:?}", other),
        }
    }

    #[test]
    fn test_insert_after_places_the_element_as_next_sibling() {
        let mut form = Form::product_form();
        let anchor_at = form.position("id_price").unwrap();

        form.insert_after(
            "id_price",
            FormElement::Image(ImageElement {
                id: "thumb".into(),
                src: DataUri::from_bytes(Path::new("x.png"), b"x"),
                style: PreviewStyle::default(),
            }),
        );

        assert_eq!(form.position("thumb"), Some(anchor_at + 1));
    }

    #[test]
    fn test_insert_after_missing_anchor_is_ignored() {
        let mut form = Form::product_form();
        let count = form.elements().len();

        form.insert_after(
            "id_absent",
            FormElement::Image(ImageElement {
                id: "thumb".into(),
                src: DataUri::from_bytes(Path::new("x.png"), b"x"),
                style: PreviewStyle::default(),
            }),
        );

        assert_eq!(form.elements().len(), count);
    }
}
