use crate::{app::Message, note::ColorTriple};
use cosmic::prelude::*;
use cosmic::{
    iced::{self, Color, Length},
    widget,
};

#[inline]
pub const fn to_f32(v: u16) -> f32 {
    v as f32
}

/// Wraps the note panel into a paper-like surface tinted with the
/// currently selected color triple.
pub fn note_surface(child: Element<'_, Message>, triple: ColorTriple) -> Element<'_, Message> {
    widget::container(child)
        .class(cosmic::style::Container::custom(move |theme: &Theme| {
            let cosmic = theme.cosmic();
            iced::widget::container::Style {
                icon_color: Some(Color::from(cosmic.background.on)),
                text_color: Some(Color::from(cosmic.background.on)),
                background: Some(iced::Background::Color(triple.background)),
                border: iced::Border {
                    color: triple.border,
                    width: 2.0,
                    radius: cosmic.corner_radii.radius_m.into(),
                },
                shadow: iced::Shadow {
                    color: triple.shadow,
                    offset: iced::Vector::new(6.0, 8.0),
                    blur_radius: 16.0,
                },
            }
        }))
        .padding(cosmic::theme::spacing().space_xs)
        .into()
}

/// Toolbar column surface: neutral background, right-hand border in the
/// note's border color.
pub fn toolbar_surface(child: Element<'_, Message>, border: Color) -> Element<'_, Message> {
    widget::container(child)
        .class(cosmic::style::Container::custom(move |theme: &Theme| {
            let cosmic = theme.cosmic();
            iced::widget::container::Style {
                icon_color: Some(Color::from(cosmic.background.on)),
                text_color: Some(Color::from(cosmic.background.on)),
                background: Some(iced::Background::Color(Color::from(cosmic.primary.base))),
                border: iced::Border {
                    color: border,
                    width: 1.0,
                    radius: cosmic.corner_radii.radius_s.into(),
                },
                shadow: iced::Shadow::default(),
            }
        }))
        .padding(cosmic::theme::spacing().space_xs)
        .into()
}

/// Background for the save button, filled with the note's border color.
pub fn save_surface(child: Element<'_, Message>, triple: ColorTriple) -> Element<'_, Message> {
    widget::container(child)
        .class(cosmic::style::Container::custom(move |theme: &Theme| {
            let cosmic = theme.cosmic();
            iced::widget::container::Style {
                icon_color: Some(Color::from(cosmic.background.on)),
                text_color: Some(Color::from(cosmic.background.on)),
                background: Some(iced::Background::Color(triple.border)),
                border: iced::Border {
                    color: triple.border,
                    width: 1.0,
                    radius: cosmic.corner_radii.radius_xl.into(),
                },
                shadow: iced::Shadow {
                    color: triple.shadow,
                    offset: iced::Vector::new(0.0, 2.0),
                    blur_radius: 6.0,
                },
            }
        }))
        .into()
}

/// A clickable round-ish swatch for one note color. The selected swatch
/// gets the darker shadow tone as its border.
pub fn color_swatch(
    triple: ColorTriple,
    is_selected: bool,
    on_press: Message,
) -> Element<'static, Message> {
    let face = widget::container(iced::widget::Space::new(
        Length::Fixed(14.0),
        Length::Fixed(14.0),
    ))
    .class(cosmic::style::Container::custom(move |theme: &Theme| {
        let cosmic = theme.cosmic();
        iced::widget::container::Style {
            icon_color: None,
            text_color: None,
            background: Some(iced::Background::Color(triple.background)),
            border: iced::Border {
                color: if is_selected {
                    triple.shadow
                } else {
                    triple.border
                },
                width: if is_selected { 3.0 } else { 2.0 },
                radius: cosmic.corner_radii.radius_xl.into(),
            },
            shadow: iced::Shadow::default(),
        }
    }));
    iced::widget::mouse_area(face).on_press(on_press).into()
}
