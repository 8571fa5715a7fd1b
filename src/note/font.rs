use cosmic::iced::Font;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteFont {
    #[default]
    ComicSans,
    Arial,
    Times,
    Courier,
    Georgia,
}

impl NoteFont {
    pub const ALL: [NoteFont; 5] = [
        NoteFont::ComicSans,
        NoteFont::Arial,
        NoteFont::Times,
        NoteFont::Courier,
        NoteFont::Georgia,
    ];

    /// Label shown in the font selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            NoteFont::ComicSans => "Comic Sans",
            NoteFont::Arial => "Arial",
            NoteFont::Times => "Times New Roman",
            NoteFont::Courier => "Courier",
            NoteFont::Georgia => "Georgia",
        }
    }

    /// Family used to render the note title and body.
    #[must_use]
    pub fn family(self) -> Font {
        match self {
            NoteFont::ComicSans => Font::with_name("Comic Sans MS"),
            NoteFont::Arial => Font::with_name("Arial"),
            NoteFont::Times => Font::with_name("Times New Roman"),
            NoteFont::Courier => Font::with_name("Courier New"),
            NoteFont::Georgia => Font::with_name("Georgia"),
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|font| *font == self)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[test]
fn index_round_trips() {
    for font in NoteFont::ALL {
        assert_eq!(NoteFont::from_index(font.index()), Some(font));
    }
    assert_eq!(NoteFont::from_index(NoteFont::ALL.len()), None);
}

#[test]
fn every_font_has_its_own_family() {
    for font in NoteFont::ALL {
        for other in NoteFont::ALL {
            if font != other {
                assert_ne!(font.family(), other.family());
                assert_ne!(font.label(), other.label());
            }
        }
    }
}
