use crate::theme::PaletteColors;
use iced::widget::progress_bar;
use iced::{Background, Border, Color, Theme};

/// Validation progress bar, accent fill over a sunken track.
pub fn validation_bar_style(
    palette: PaletteColors,
) -> impl Fn(&Theme) -> progress_bar::Style + Clone {
    move |_theme: &Theme| progress_bar::Style {
        background: Background::Color(Color {
            a: 0.6,
            ..palette.background
        }),
        bar: Background::Color(palette.accent),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: 2.0.into(),
        },
    }
}
