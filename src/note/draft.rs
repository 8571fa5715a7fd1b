use super::{
    DEF_BODY, DEF_FONT_SIZE, DEF_NOTE_WIDTH, DEF_TITLE, FONT_SIZE_STEP, MAX_FONT_SIZE,
    MAX_NOTE_WIDTH, MIN_FONT_SIZE, MIN_NOTE_WIDTH, NOTE_WIDTH_STEP, NoteColor, NoteFont,
};

/// A transient user-facing notification caused by editing the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved,
    FontSize(u16),
    ColorChanged(NoteColor),
    Attached(String),
}

/// The in-memory, unsaved state of one note. Owned by a single overlay
/// instance and dropped when the overlay closes.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteDraft {
    color: NoteColor,
    font: NoteFont,
    font_size: u16,
    width: u16,
    title: String,
    body: String,
}

impl Default for NoteDraft {
    fn default() -> Self {
        Self {
            color: NoteColor::default(),
            font: NoteFont::default(),
            font_size: DEF_FONT_SIZE,
            width: DEF_NOTE_WIDTH,
            title: DEF_TITLE.to_string(),
            body: DEF_BODY.to_string(),
        }
    }
}

impl NoteDraft {
    #[must_use]
    pub fn color(&self) -> NoteColor {
        self.color
    }

    #[must_use]
    pub fn font(&self) -> NoteFont {
        self.font
    }

    #[must_use]
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_color(&mut self, color: NoteColor) {
        self.color = color;
    }

    pub fn set_font(&mut self, font: NoteFont) {
        self.font = font;
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn set_body(&mut self, body: String) {
        self.body = body;
    }

    /// Bumps the font size one step up and returns the resulting, clamped
    /// value. At the upper bound the value is left unchanged.
    pub fn increase_font_size(&mut self) -> u16 {
        self.font_size = (self.font_size + FONT_SIZE_STEP).min(MAX_FONT_SIZE);
        self.font_size
    }

    pub fn decrease_font_size(&mut self) -> u16 {
        self.font_size = self.font_size.saturating_sub(FONT_SIZE_STEP).max(MIN_FONT_SIZE);
        self.font_size
    }

    pub fn increase_width(&mut self) -> u16 {
        self.width = (self.width + NOTE_WIDTH_STEP).min(MAX_NOTE_WIDTH);
        self.width
    }

    pub fn decrease_width(&mut self) -> u16 {
        self.width = self.width.saturating_sub(NOTE_WIDTH_STEP).max(MIN_NOTE_WIDTH);
        self.width
    }
}

#[test]
fn fresh_draft_has_fixed_defaults() {
    let draft = NoteDraft::default();
    assert_eq!(draft.color(), NoteColor::Yellow);
    assert_eq!(draft.font(), NoteFont::ComicSans);
    assert_eq!(draft.font_size(), 16);
    assert_eq!(draft.width(), 520);
    assert_eq!(draft.title(), "Note title here");
    assert_eq!(draft.body(), "Start typing your note here...");
}

#[test]
fn font_size_steps_by_two_from_default() {
    let mut draft = NoteDraft::default();
    for _ in 0..4 {
        draft.increase_font_size();
    }
    assert_eq!(draft.font_size(), 24);
}

#[test]
fn font_size_clamps_at_lower_bound() {
    let mut draft = NoteDraft::default();
    for _ in 0..8 {
        draft.decrease_font_size();
    }
    assert_eq!(draft.font_size(), MIN_FONT_SIZE);
}

#[test]
fn font_size_reports_clamped_value_at_bounds() {
    let mut draft = NoteDraft::default();
    let mut last = draft.font_size();
    for _ in 0..20 {
        last = draft.increase_font_size();
    }
    // the reported value is the post-clamp one, not default + 20 steps
    assert_eq!(last, MAX_FONT_SIZE);
    assert_eq!(draft.font_size(), MAX_FONT_SIZE);
    for _ in 0..20 {
        last = draft.decrease_font_size();
    }
    assert_eq!(last, MIN_FONT_SIZE);
}

#[test]
fn font_size_stays_in_range_for_any_sequence() {
    let mut draft = NoteDraft::default();
    for step in 0..100 {
        if step % 3 == 0 {
            draft.decrease_font_size();
        } else {
            draft.increase_font_size();
        }
        assert!(draft.font_size() >= MIN_FONT_SIZE);
        assert!(draft.font_size() <= MAX_FONT_SIZE);
        assert_eq!(draft.font_size() % FONT_SIZE_STEP, 0);
    }
}

#[test]
fn width_steps_and_clamps() {
    let mut draft = NoteDraft::default();
    assert_eq!(draft.increase_width(), 570);
    for _ in 0..10 {
        draft.increase_width();
    }
    assert_eq!(draft.width(), MAX_NOTE_WIDTH);
    for _ in 0..20 {
        draft.decrease_width();
    }
    assert_eq!(draft.width(), MIN_NOTE_WIDTH);
}

#[test]
fn color_and_font_replace_without_side_effects() {
    let mut draft = NoteDraft::default();
    draft.set_color(NoteColor::Purple);
    draft.set_font(NoteFont::Georgia);
    assert_eq!(draft.color(), NoteColor::Purple);
    assert_eq!(draft.font(), NoteFont::Georgia);
    // orthogonal fields keep their defaults
    assert_eq!(draft.font_size(), DEF_FONT_SIZE);
    assert_eq!(draft.width(), DEF_NOTE_WIDTH);
}

#[test]
fn title_and_body_accept_any_text() {
    let mut draft = NoteDraft::default();
    draft.set_title(String::new());
    draft.set_body("line one\nline two".to_string());
    assert_eq!(draft.title(), "");
    assert_eq!(draft.body(), "line one\nline two");
}
