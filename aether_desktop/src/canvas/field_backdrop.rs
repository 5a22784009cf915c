use crate::constants::{CONNECTION_LINE_WIDTH, GHOST_MAX_ALPHA};
use crate::theme::PaletteColors;
use aether_core::field::TRAIL_LENGTH;
use aether_core::ParticleField;
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path};
use iced::{Color, Point, Rectangle, Theme};
use std::marker::PhantomData;

/// Canvas program for the particle field backdrop: trail ghosts, connection
/// lines, then the particle discs, over a solid background.
pub struct FieldBackdrop<'a, Message> {
    pub field: &'a ParticleField,
    pub cache: &'a canvas::Cache,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> FieldBackdrop<'a, Message> {
    pub fn new(field: &'a ParticleField, cache: &'a canvas::Cache, palette: PaletteColors) -> Self {
        Self {
            field,
            cache,
            palette,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for FieldBackdrop<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let backdrop = self.cache.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(
                Point::ORIGIN,
                bounds.size(),
                canvas::Fill::from(self.palette.background),
            );

            // Ghosts first so live geometry draws over them.
            for particle in self.field.particles() {
                let color = self.palette.shade_color(particle.shade);
                for (idx, (x, y)) in particle.trail.iter().enumerate() {
                    let alpha = GHOST_MAX_ALPHA * (idx + 1) as f32 / TRAIL_LENGTH as f32;
                    frame.fill(
                        &Path::circle(Point::new(*x, *y), particle.radius),
                        Color { a: alpha, ..color },
                    );
                }
            }

            for connection in self.field.connections() {
                let stroke = canvas::Stroke {
                    style: canvas::Style::Solid(Color {
                        a: connection.strength,
                        ..self.palette.accent_alt
                    }),
                    width: CONNECTION_LINE_WIDTH,
                    line_cap: canvas::LineCap::Round,
                    ..Default::default()
                };
                frame.stroke(
                    &Path::line(
                        Point::new(connection.from.0, connection.from.1),
                        Point::new(connection.to.0, connection.to.1),
                    ),
                    stroke,
                );
            }

            for particle in self.field.particles() {
                frame.fill(
                    &Path::circle(Point::new(particle.x, particle.y), particle.radius),
                    self.palette.shade_color(particle.shade),
                );
            }
        });
        vec![backdrop]
    }
}
