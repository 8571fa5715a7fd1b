// SPDX-License-Identifier: MPL-2.0

use crate::{
    app::overlay::NoteOverlay,
    config::Config,
    fl,
    icons::IconSet,
    note::{NoteColor, Notice},
};
use cosmic::prelude::*;
use cosmic::{
    cosmic_config::{self, CosmicConfigEntry},
    iced::{Alignment, Length, Subscription},
    widget::{
        self,
        text_editor::Action as EditAction,
        toaster::{Toast, ToastId, Toasts},
    },
};

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    UpdateConfig(Config),
    // page level
    OpenNote,
    CloseOverlay,
    CloseToast(ToastId),
    // note appearance
    ToggleColorPicker,
    SetColor(NoteColor),
    IncreaseFontSize,
    DecreaseFontSize,
    IncreaseNoteWidth,
    DecreaseNoteWidth,
    SetFont(usize), // by index in the font selector
    // note content
    TitleInput(String),
    EditBody(EditAction),
    AttachImage,
    ImageSelected(Option<String>), // file name, None on a dismissed dialog
    SaveNote,
}

/// The application model: one page owning the overlay visibility and the
/// transient notifications.
pub struct PageModel {
    // Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Configuration data that persists between application runs.
    config: Config,
    // The note overlay and its draft, while mounted
    overlay: Option<NoteOverlay>,
    toasts: Toasts<Message>,
    #[cfg(not(feature = "xdg_icons"))]
    icons: IconSet,
    #[cfg(feature = "xdg_icons")]
    icons: IconSet,
}

/// Create a COSMIC application from the app model
impl cosmic::Application for PageModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "dev.papernote.paper-note";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Load config
        let config = cosmic_config::Config::new(Self::APP_ID, Config::VERSION)
            .map(|context| match Config::get_entry(&context) {
                Ok(config) => config,
                Err((errors, config)) => {
                    for why in errors {
                        tracing::error!("error loading app config: {why}");
                    }
                    config
                }
            })
            .unwrap_or_default();

        // Construct the app model with the runtime's core.
        let mut app = PageModel {
            core,
            config,
            // the note overlay is visible right away on startup
            overlay: Some(NoteOverlay::new()),
            toasts: Toasts::new(Message::CloseToast),
            icons: IconSet::new(),
        };

        let startup = if let Some(id) = app.core.main_window_id() {
            app.set_window_title(fl!("app-title"), id)
        } else {
            Task::none()
        };

        (app, startup)
    }

    /// Describes the interface based on the current state of the application model.
    ///
    /// Application events will be processed through the view. Any messages emitted by
    /// events received by widgets will be passed to the update method.
    fn view(&self) -> Element<'_, Self::Message> {
        let page = widget::column::with_capacity(3)
            .spacing(cosmic::theme::spacing().space_l)
            .align_x(Alignment::Center)
            .push(widget::text::title1(fl!("app-title")))
            .push(widget::text::title4(fl!("app-subtitle")))
            .push(widget::button::suggested(fl!("open-note")).on_press(Message::OpenNote));

        let page = widget::container(page)
            .center_x(Length::Fill)
            .center_y(Length::Fill);

        widget::toaster(&self.toasts, page)
    }

    /// The note overlay is a modal surface above the page while mounted.
    fn dialog(&self) -> Option<Element<'_, Self::Message>> {
        self.overlay
            .as_ref()
            .map(|overlay| overlay.build_view(&self.icons, self.config.toolbar_icon_size))
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        // Watch for application configuration changes.
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config))
    }

    /// Handles messages emitted by the application and its widgets.
    #[allow(clippy::too_many_lines)]
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::UpdateConfig(config) => {
                self.config = config;
            }

            Message::OpenNote => {
                // keep the mounted overlay and its draft if it is already open
                if self.overlay.is_none() {
                    self.overlay = Some(NoteOverlay::new());
                }
            }

            Message::CloseOverlay => {
                self.dismiss_overlay();
            }

            Message::CloseToast(id) => {
                self.toasts.remove(id);
            }

            Message::ToggleColorPicker => {
                self.on_overlay(NoteOverlay::toggle_color_picker);
            }

            Message::SetColor(color) => {
                if let Some(notice) = self.on_overlay(|overlay| overlay.set_color(color)) {
                    return self.push_notice(notice);
                }
            }

            Message::IncreaseFontSize => {
                if let Some(notice) = self.on_overlay(NoteOverlay::increase_font_size) {
                    return self.push_notice(notice);
                }
            }

            Message::DecreaseFontSize => {
                if let Some(notice) = self.on_overlay(NoteOverlay::decrease_font_size) {
                    return self.push_notice(notice);
                }
            }

            Message::IncreaseNoteWidth => {
                self.on_overlay(NoteOverlay::increase_width);
            }

            Message::DecreaseNoteWidth => {
                self.on_overlay(NoteOverlay::decrease_width);
            }

            Message::SetFont(index) => {
                if let Some(Err(e)) = self.on_overlay(|overlay| overlay.try_set_font_by_index(index))
                {
                    tracing::error!("failed selecting font: {e}");
                }
            }

            Message::TitleInput(title) => {
                self.on_overlay(|overlay| overlay.set_title(title));
            }

            Message::EditBody(action) => {
                self.on_overlay(|overlay| overlay.edit_body(action));
            }

            Message::AttachImage => {
                return cosmic::task::future(Self::pick_attachment());
            }

            Message::ImageSelected(Some(file_name)) => {
                if let Some(notice) = self.attachment_selected(file_name) {
                    return self.push_notice(notice);
                }
            }

            Message::ImageSelected(None) => {
                // dialog dismissed without a selection, nothing to report
            }

            Message::SaveNote => {
                if let Some(notice) = self.save_overlay() {
                    return self.push_notice(notice);
                }
            }
        }
        Task::none()
    }

    /// Called when the escape key is pressed.
    fn on_escape(&mut self) -> Task<cosmic::Action<Self::Message>> {
        self.dismiss_overlay();
        Task::none()
    }
}

impl PageModel {
    /// Unmounts the overlay, discarding the draft. Dismissal shows no
    /// notification and repeated requests are harmless.
    fn dismiss_overlay(&mut self) -> Option<Notice> {
        self.overlay = None;
        None
    }

    /// Accepts the draft as-is and unmounts the overlay. No validation:
    /// empty title and body are accepted.
    fn save_overlay(&mut self) -> Option<Notice> {
        self.overlay = None;
        Some(Notice::Saved)
    }

    /// A file picked after the overlay closed has nothing to attach to.
    /// The file itself is never read, only its name is reported.
    fn attachment_selected(&self, file_name: String) -> Option<Notice> {
        if self.overlay.is_some() {
            Some(Notice::Attached(file_name))
        } else {
            tracing::warn!("attachment selected after the note overlay closed");
            None
        }
    }

    /// Runs an operation against the mounted overlay, if any.
    fn on_overlay<T>(&mut self, operation: impl FnOnce(&mut NoteOverlay) -> T) -> Option<T> {
        if let Some(overlay) = &mut self.overlay {
            Some(operation(overlay))
        } else {
            tracing::warn!("note overlay is not mounted");
            None
        }
    }

    fn push_notice(&mut self, notice: Notice) -> Task<cosmic::Action<Message>> {
        let text = match notice {
            Notice::Saved => fl!("note-saved"),
            Notice::FontSize(size) => fl!("font-size-toast", size = size),
            Notice::ColorChanged(color) => fl!("color-changed-toast", color = color.name()),
            Notice::Attached(name) => fl!("attached-toast", name = name.as_str()),
        };
        self.toasts.push(Toast::new(text)).map(cosmic::Action::App)
    }

    async fn pick_attachment() -> Message {
        let picked = rfd::AsyncFileDialog::new()
            .set_title(fl!("attach-image"))
            .add_filter(
                fl!("image-files"),
                &["png", "jpg", "jpeg", "gif", "bmp", "webp", "svg"],
            )
            .pick_file()
            .await;
        Message::ImageSelected(picked.map(|file| file.file_name()))
    }
}

#[test]
fn save_reports_success_and_unmounts_the_overlay() {
    use cosmic::Application;

    let (mut page, _startup) = PageModel::init(cosmic::Core::default(), ());
    assert!(page.overlay.is_some());
    assert_eq!(page.save_overlay(), Some(Notice::Saved));
    assert!(page.overlay.is_none());
}

#[test]
fn dismissal_is_silent_and_repeatable() {
    use cosmic::Application;

    let (mut page, _startup) = PageModel::init(cosmic::Core::default(), ());
    assert!(page.overlay.is_some());
    assert_eq!(page.dismiss_overlay(), None);
    assert!(page.overlay.is_none());
    assert_eq!(page.dismiss_overlay(), None);
}

#[test]
fn close_open_and_save_messages_drive_the_overlay() {
    use cosmic::Application;

    let (mut page, _startup) = PageModel::init(cosmic::Core::default(), ());
    let _ = page.update(Message::CloseOverlay);
    assert!(page.overlay.is_none());
    let _ = page.update(Message::OpenNote);
    assert!(page.overlay.is_some());
    let _ = page.update(Message::SaveNote);
    assert!(page.overlay.is_none());
}

#[test]
fn attachment_picked_after_close_is_dropped() {
    use cosmic::Application;

    let (mut page, _startup) = PageModel::init(cosmic::Core::default(), ());
    assert_eq!(
        page.attachment_selected("cat.png".to_string()),
        Some(Notice::Attached("cat.png".to_string()))
    );
    page.dismiss_overlay();
    assert_eq!(page.attachment_selected("cat.png".to_string()), None);
}
