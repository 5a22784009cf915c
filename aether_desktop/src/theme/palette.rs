use aether_core::{Severity, Shade, StagePhase};
use iced::Color;

/// Core color palette for the Aether Neon theme.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColors {
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub glow: Color,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self::neon()
    }
}

impl PaletteColors {
    /// Neon terminal palette, cyan on near-black with a magenta counterpoint.
    pub fn neon() -> Self {
        Self {
            background: Color::from_rgb8(5, 8, 17),
            surface: Color::from_rgb8(10, 14, 26),
            surface_raised: Color::from_rgb8(16, 22, 38),
            border: Color::from_rgb8(28, 42, 70),
            text: Color::from_rgb8(214, 226, 240),
            muted: Color::from_rgb8(96, 112, 136),
            accent: Color::from_rgb8(0, 243, 255),
            accent_alt: Color::from_rgb8(188, 19, 254),
            success: Color::from_rgb8(10, 255, 157),
            warning: Color::from_rgb8(255, 196, 0),
            danger: Color::from_rgb8(255, 64, 96),
            glow: Color::from_rgb8(0, 180, 216),
        }
    }

    /// Console text color for a log severity.
    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Info => self.text,
            Severity::Success => self.success,
            Severity::Warn => self.warning,
            Severity::Error => self.danger,
        }
    }

    /// Status-card label color for a pipeline phase.
    pub fn phase_color(&self, phase: StagePhase) -> Color {
        match phase {
            StagePhase::Standby => self.muted,
            StagePhase::Processing => self.warning,
            StagePhase::Running => self.accent,
            StagePhase::Complete | StagePhase::Passed | StagePhase::Deployed => self.success,
        }
    }

    /// Particle disc color for a field shade.
    pub fn shade_color(&self, shade: Shade) -> Color {
        match shade {
            Shade::Primary => self.accent,
            Shade::Accent => self.accent_alt,
        }
    }
}

/// Returns the default palette for the application.
pub fn palette() -> PaletteColors {
    PaletteColors::default()
}
