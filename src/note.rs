pub use color::{ColorTriple, NoteColor};
pub use draft::{NoteDraft, Notice};
pub use font::NoteFont;

mod color;
mod draft;
mod font;

pub const DEF_TITLE: &str = "Note title here";
pub const DEF_BODY: &str = "Start typing your note here...";

pub const MIN_FONT_SIZE: u16 = 12;
pub const MAX_FONT_SIZE: u16 = 32;
pub const FONT_SIZE_STEP: u16 = 2;
pub const DEF_FONT_SIZE: u16 = 16;

pub const MIN_NOTE_WIDTH: u16 = 400;
pub const MAX_NOTE_WIDTH: u16 = 800;
pub const NOTE_WIDTH_STEP: u16 = 50;
pub const DEF_NOTE_WIDTH: u16 = 520;
