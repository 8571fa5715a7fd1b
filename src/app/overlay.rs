use super::{Message, utils};
use crate::{
    fl,
    icons::IconSet,
    note::{DEF_BODY, DEF_TITLE, NoteColor, NoteDraft, NoteFont, Notice},
};
use cosmic::prelude::*;
use cosmic::{
    iced::{Alignment, Length},
    widget::{self, text_editor::Action},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("font index {0} not found")]
    FontIndexNotFound(usize),
}

/// The modal note-editing panel. Owns the draft for its whole mounted
/// lifetime; the draft is dropped together with the overlay on close.
pub struct NoteOverlay {
    draft: NoteDraft,
    body: widget::text_editor::Content,
    show_color_picker: bool,
    font_labels: Vec<String>,
}

impl Default for NoteOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteOverlay {
    pub fn new() -> Self {
        Self {
            draft: NoteDraft::default(),
            body: widget::text_editor::Content::with_text(DEF_BODY),
            show_color_picker: false,
            font_labels: NoteFont::ALL
                .iter()
                .map(|font| font.label().to_string())
                .collect(),
        }
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn set_color(&mut self, color: NoteColor) -> Notice {
        self.show_color_picker = false;
        self.draft.set_color(color);
        Notice::ColorChanged(color)
    }

    pub fn increase_font_size(&mut self) -> Notice {
        Notice::FontSize(self.draft.increase_font_size())
    }

    pub fn decrease_font_size(&mut self) -> Notice {
        Notice::FontSize(self.draft.decrease_font_size())
    }

    // width changes carry no notification
    pub fn increase_width(&mut self) {
        self.draft.increase_width();
    }

    pub fn decrease_width(&mut self) {
        self.draft.decrease_width();
    }

    pub fn try_set_font_by_index(&mut self, index: usize) -> Result<(), OverlayError> {
        NoteFont::from_index(index)
            .map(|font| self.draft.set_font(font))
            .ok_or(OverlayError::FontIndexNotFound(index))
    }

    pub fn set_title(&mut self, title: String) {
        self.draft.set_title(title);
    }

    pub fn edit_body(&mut self, action: Action) {
        self.body.perform(action);
        // the editor reports its text with a trailing newline
        let text = self.body.text();
        self.draft
            .set_body(text.strip_suffix('\n').unwrap_or(&text).to_string());
    }

    pub fn toggle_color_picker(&mut self) {
        self.show_color_picker = !self.show_color_picker;
    }

    pub fn build_view<'a>(&'a self, icons: &IconSet, icon_size: u16) -> Element<'a, Message> {
        let triple = self.draft.color().triple();
        let family = self.draft.font().family();

        let mut toolbar = widget::column::with_capacity(10)
            .spacing(cosmic::theme::spacing().space_s)
            .align_x(Alignment::Center)
            .push(
                icons
                    .attach()
                    .apply(widget::button::icon)
                    .icon_size(icon_size)
                    .on_press(Message::AttachImage)
                    .width(Length::Shrink),
            )
            .push(widget::dropdown(
                &self.font_labels,
                Some(self.draft.font().index()),
                Message::SetFont,
            ))
            .push(
                icons
                    .grow()
                    .apply(widget::button::icon)
                    .icon_size(icon_size)
                    .on_press(Message::IncreaseFontSize)
                    .width(Length::Shrink),
            )
            .push(
                icons
                    .shrink()
                    .apply(widget::button::icon)
                    .icon_size(icon_size)
                    .on_press(Message::DecreaseFontSize)
                    .width(Length::Shrink),
            )
            .push(widget::divider::horizontal::light())
            .push(
                icons
                    .widen()
                    .apply(widget::button::icon)
                    .icon_size(icon_size)
                    .on_press(Message::IncreaseNoteWidth)
                    .width(Length::Shrink),
            )
            .push(
                icons
                    .narrow()
                    .apply(widget::button::icon)
                    .icon_size(icon_size)
                    .on_press(Message::DecreaseNoteWidth)
                    .width(Length::Shrink),
            )
            .push(widget::divider::horizontal::light())
            .push(
                icons
                    .palette()
                    .apply(widget::button::icon)
                    .icon_size(icon_size)
                    .on_press(Message::ToggleColorPicker)
                    .width(Length::Shrink),
            );
        if self.show_color_picker {
            let mut swatches = widget::column::with_capacity(NoteColor::ALL.len())
                .spacing(cosmic::theme::spacing().space_xxs)
                .align_x(Alignment::Center);
            for color in NoteColor::ALL {
                swatches = swatches.push(utils::color_swatch(
                    color.triple(),
                    color == self.draft.color(),
                    Message::SetColor(color),
                ));
            }
            toolbar = toolbar.push(swatches);
        }

        let header = widget::row::with_capacity(2)
            .push(widget::horizontal_space().width(Length::Fill))
            .push(
                icons
                    .close()
                    .apply(widget::button::icon)
                    .icon_size(icon_size)
                    .on_press(Message::CloseOverlay)
                    .width(Length::Shrink),
            );

        // the default title doubles as the placeholder once the field is cleared
        let title = widget::text_input(DEF_TITLE, self.draft.title())
            .font(family)
            .on_input(Message::TitleInput);

        let body = widget::text_editor(&self.body)
            .font(family)
            .size(utils::to_f32(self.draft.font_size()))
            .height(Length::Fixed(240.0))
            .on_action(Message::EditBody);

        let save = widget::row::with_capacity(2)
            .push(widget::horizontal_space().width(Length::Fill))
            .push(utils::save_surface(
                widget::button::text(fl!("save-note"))
                    .leading_icon(icons.save())
                    .on_press(Message::SaveNote)
                    .into(),
                triple,
            ));

        let content = widget::column::with_capacity(4)
            .spacing(cosmic::theme::spacing().space_s)
            .padding(cosmic::theme::spacing().space_m)
            .width(Length::Fill)
            .push(header)
            .push(title)
            .push(body)
            .push(save);

        let interior = widget::row::with_capacity(2)
            .spacing(cosmic::theme::spacing().space_xs)
            .width(Length::Fixed(utils::to_f32(self.draft.width())))
            .push(utils::toolbar_surface(toolbar.into(), triple.border))
            .push(content);

        utils::note_surface(interior.into(), triple)
    }
}

#[test]
fn fresh_overlay_matches_draft_defaults() {
    let overlay = NoteOverlay::new();
    assert_eq!(*overlay.draft(), NoteDraft::default());
    assert!(!overlay.show_color_picker);
}

#[test]
fn selecting_color_reports_notice_and_hides_picker() {
    let mut overlay = NoteOverlay::new();
    overlay.toggle_color_picker();
    assert!(overlay.show_color_picker);
    let notice = overlay.set_color(NoteColor::Blue);
    assert_eq!(notice, Notice::ColorChanged(NoteColor::Blue));
    assert_eq!(overlay.draft().color(), NoteColor::Blue);
    assert!(!overlay.show_color_picker);
}

#[test]
fn font_size_notices_report_clamped_values() {
    use crate::note::{MAX_FONT_SIZE, MIN_FONT_SIZE};

    let mut overlay = NoteOverlay::new();
    assert_eq!(overlay.increase_font_size(), Notice::FontSize(18));
    for _ in 0..20 {
        overlay.increase_font_size();
    }
    // at the boundary the notice still names the clamped value
    assert_eq!(overlay.increase_font_size(), Notice::FontSize(MAX_FONT_SIZE));
    for _ in 0..20 {
        overlay.decrease_font_size();
    }
    assert_eq!(overlay.decrease_font_size(), Notice::FontSize(MIN_FONT_SIZE));
}

#[test]
fn unknown_font_index_is_rejected() {
    let mut overlay = NoteOverlay::new();
    assert!(overlay.try_set_font_by_index(2).is_ok());
    assert_eq!(overlay.draft().font(), NoteFont::Times);
    assert!(overlay.try_set_font_by_index(99).is_err());
    assert_eq!(overlay.draft().font(), NoteFont::Times);
}

#[test]
fn cleared_title_stays_empty_in_the_draft() {
    let mut overlay = NoteOverlay::new();
    assert_eq!(overlay.draft().title(), DEF_TITLE);
    overlay.set_title(String::new());
    // the default text is only the placeholder from here on, not the value
    assert_eq!(overlay.draft().title(), "");
}

#[test]
fn body_edits_are_mirrored_into_the_draft() {
    use cosmic::widget::text_editor::Edit;

    let mut overlay = NoteOverlay::new();
    overlay.edit_body(Action::Edit(Edit::Insert('A')));
    assert!(overlay.draft().body().starts_with('A'));
    assert!(!overlay.draft().body().ends_with('\n'));
}
