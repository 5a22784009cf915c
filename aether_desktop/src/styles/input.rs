use crate::theme::PaletteColors;
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Transparent input that inherits the shell container's border.
pub fn intent_input_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style + Clone {
    move |_, _status| text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 0.0.into(),
        },
        icon: palette.muted,
        placeholder: palette.muted,
        value: palette.accent,
        selection: Color { a: 0.4, ..palette.accent },
    }
}
