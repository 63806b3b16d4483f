use iced::widget::image;
use iced::{Element, Task, Theme};
use rfd::FileDialog;

// Declare the application modules
mod config;
mod data_uri;
mod error;
mod state;
mod ui;

use config::AppConfig;
use data_uri::DataUri;
use error::PreviewError;
use state::form::{Form, FormElement};
use state::preview::PreviewBinder;

/// Main application state
struct FormPreview {
    /// The product form shown in the window
    form: Form,
    /// Preview wiring; absent when the form has no image field
    binder: Option<PreviewBinder>,
    /// Configuration applied to the preview element on creation
    config: AppConfig,
    /// Decoded mirror of the preview source, kept so the view does not
    /// re-decode base64 on every frame
    preview_handle: Option<image::Handle>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User edited one of the text fields
    FieldEdited(String, String),
    /// User clicked the image chooser
    BrowseImage,
    /// Background read completed
    PreviewRead(Result<DataUri, PreviewError>),
}

impl FormPreview {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load();
        let form = Form::product_form();

        let binder = PreviewBinder::bind(&form);
        if binder.is_none() {
            log::debug!("form has no image field; preview stays disabled");
        }

        (
            FormPreview {
                form,
                binder,
                config,
                preview_handle: None,
                status: String::from("Ready."),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FieldEdited(id, value) => {
                if let Some(FormElement::Text(field)) = self.form.by_id_mut(&id) {
                    field.value = value;
                }
                Task::none()
            }
            Message::BrowseImage => {
                let Some(binder) = &self.binder else {
                    return Task::none();
                };

                // Native picker; returns None when the user cancels
                let picked = FileDialog::new()
                    .set_title("Select Image")
                    .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                    .pick_file();

                match binder.selection(&mut self.form, picked) {
                    Some(path) => {
                        log::debug!("selected {}", path.display());
                        self.status = format!("Loading {}...", path.display());

                        // Read off the UI thread; the completion message
                        // carries the encoded result back into this loop
                        Task::perform(data_uri::read(path), Message::PreviewRead)
                    }
                    None => Task::none(),
                }
            }
            Message::PreviewRead(Ok(src)) => {
                let Some(binder) = &self.binder else {
                    return Task::none();
                };

                match src.data() {
                    Ok(bytes) => self.preview_handle = Some(image::Handle::from_bytes(bytes)),
                    Err(err) => log::warn!("undecodable preview payload: {err}"),
                }

                log::debug!("preview source set ({} encoded bytes)", src.as_str().len());
                self.status = format!("Preview updated ({}).", src.mime());
                binder.apply_read(&mut self.form, src, self.config.preview);
                Task::none()
            }
            Message::PreviewRead(Err(err)) => {
                // Failed reads are dropped without touching the form; the
                // preview keeps whatever it showed before
                log::debug!("discarding failed preview read: {err}");
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        ui::form_view(&self.form, self.preview_handle.as_ref(), &self.status)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    iced::application("Product Form", FormPreview::update, FormPreview::view)
        .theme(FormPreview::theme)
        .window_size((520.0, 680.0))
        .centered()
        .run_with(FormPreview::new)
}
