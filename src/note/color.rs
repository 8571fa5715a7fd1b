use cosmic::iced::Color;

/// Background, border and shadow of one paper tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTriple {
    pub background: Color,
    pub border: Color,
    pub shadow: Color,
}

impl ColorTriple {
    fn new(background: [u8; 3], border: [u8; 3], shadow: [u8; 3]) -> Self {
        Self {
            background: Color::from_rgb8(background[0], background[1], background[2]),
            border: Color::from_rgb8(border[0], border[1], border[2]),
            shadow: Color::from_rgb8(shadow[0], shadow[1], shadow[2]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteColor {
    #[default]
    Yellow,
    Pink,
    Blue,
    Green,
    Purple,
}

impl NoteColor {
    pub const ALL: [NoteColor; 5] = [
        NoteColor::Yellow,
        NoteColor::Pink,
        NoteColor::Blue,
        NoteColor::Green,
        NoteColor::Purple,
    ];

    /// Lowercase name used in the "color changed" notification.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            NoteColor::Yellow => "yellow",
            NoteColor::Pink => "pink",
            NoteColor::Blue => "blue",
            NoteColor::Green => "green",
            NoteColor::Purple => "purple",
        }
    }

    #[must_use]
    pub fn triple(self) -> ColorTriple {
        match self {
            NoteColor::Yellow => {
                ColorTriple::new([255, 244, 158], [240, 213, 90], [196, 168, 61])
            }
            NoteColor::Pink => ColorTriple::new([255, 209, 223], [242, 146, 178], [199, 102, 138]),
            NoteColor::Blue => ColorTriple::new([195, 226, 252], [126, 182, 232], [84, 134, 184]),
            NoteColor::Green => ColorTriple::new([206, 242, 199], [139, 202, 131], [94, 158, 89]),
            NoteColor::Purple => {
                ColorTriple::new([229, 213, 250], [184, 153, 228], [139, 109, 184])
            }
        }
    }
}

#[test]
fn every_color_has_its_own_triple() {
    for color in NoteColor::ALL {
        for other in NoteColor::ALL {
            if color != other {
                assert_ne!(color.triple(), other.triple());
            }
        }
    }
}

#[test]
fn names_are_unique_and_lowercase() {
    let names: Vec<&str> = NoteColor::ALL.iter().map(|c| c.name()).collect();
    for name in &names {
        assert_eq!(*name, name.to_lowercase());
        assert_eq!(names.iter().filter(|n| *n == name).count(), 1);
    }
}

#[test]
fn yellow_is_the_default() {
    assert_eq!(NoteColor::default(), NoteColor::Yellow);
}
