//! Form rendering.
//!
//! Widgets are built from the form model in element order, so the preview
//! shows up directly under the image input it belongs to.

use std::path::Path;

use iced::widget::{button, column, container, image, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::state::form::{FileField, Form, FormElement, ImageElement, TextField};
use crate::Message;

/// Render the whole form plus the status line.
pub fn form_view<'a>(
    form: &'a Form,
    preview: Option<&image::Handle>,
    status: &'a str,
) -> Element<'a, Message> {
    let mut fields = Column::new().spacing(16);
    for element in form.elements() {
        fields = fields.push(match element {
            FormElement::Text(field) => text_field(field),
            FormElement::File(field) => file_field(field),
            FormElement::Image(element) => preview_image(element, preview),
        });
    }

    let content = column![text("New product").size(28), fields, text(status).size(14),]
        .spacing(24)
        .padding(32)
        .width(Length::Fill);

    container(content).width(Length::Fill).into()
}

fn text_field(field: &TextField) -> Element<'_, Message> {
    let id = field.id.clone();
    column![
        text(&field.label).size(14),
        text_input("", &field.value)
            .on_input(move |value| Message::FieldEdited(id.clone(), value))
            .padding(8),
    ]
    .spacing(4)
    .into()
}

fn file_field(field: &FileField) -> Element<'_, Message> {
    let chosen = field
        .selected
        .as_deref()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("No file chosen"));

    column![
        text(&field.label).size(14),
        row![
            button("Choose image...")
                .on_press(Message::BrowseImage)
                .padding(8),
            text(chosen).size(14),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    ]
    .spacing(4)
    .into()
}

/// The preview element, constrained to its recorded styling: capped width,
/// top margin, its own row.
fn preview_image<'a>(
    element: &'a ImageElement,
    handle: Option<&image::Handle>,
) -> Element<'a, Message> {
    let Some(handle) = handle else {
        return Space::with_height(Length::Shrink).into();
    };

    container(image(handle.clone()))
        .max_width(element.style.max_width)
        .padding(Padding {
            top: element.style.margin_top,
            ..Padding::ZERO
        })
        .into()
}
