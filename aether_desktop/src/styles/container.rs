use crate::constants::{CARD_BORDER_RADIUS, INPUT_BORDER_RADIUS};
use crate::theme::PaletteColors;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Terminal panel, translucent so the particle field shows through.
pub fn terminal_panel_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: 0.75,
            ..Color::BLACK
        })),
        text_color: Some(palette.text),
        border: Border {
            color: Color { a: 0.6, ..palette.accent },
            width: 1.0,
            radius: CARD_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Side-panel card for status rows and agent thoughts.
pub fn module_card_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: 0.85,
            ..palette.surface
        })),
        text_color: Some(palette.text),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: CARD_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Shell around the intent input and the synthesize button.
pub fn input_shell_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.9,
            ..palette.surface_raised
        })),
        border: Border {
            color: Color { a: 0.6, ..palette.accent },
            width: 1.0,
            radius: INPUT_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

