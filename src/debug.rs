use bitflags::bitflags;

use crate::core::Space;
use crate::math::{Circle, Rect, Shape, Vector2};

bitflags! {
    /// Which layers [`Space::debug_draw`] renders
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DebugDrawFlags: u32 {
        /// Static geometry
        const STATICS   = 0x01;

        /// Movement colliders of active bodies
        const COLLIDERS = 0x02;

        /// Trigger hitboxes of active bodies
        const HITBOXES  = 0x04;
    }
}

impl Default for DebugDrawFlags {
    fn default() -> Self {
        DebugDrawFlags::STATICS | DebugDrawFlags::COLLIDERS
    }
}

/// Colors used by the debug pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugColor {
    /// Static geometry
    Orange,

    /// Movement colliders
    Red,

    /// Hitboxes
    Yellow,
}

impl DebugColor {
    /// RGBA components in `0..=255`
    pub fn rgba(&self) -> [u8; 4] {
        match self {
            DebugColor::Orange => [255, 165, 0, 255],
            DebugColor::Red => [255, 0, 0, 255],
            DebugColor::Yellow => [255, 255, 0, 255],
        }
    }
}

/// Drawing backend for the debug pass, in screen coordinates
pub trait DebugRenderer {
    /// Draws a rectangle outline
    fn draw_rect(&mut self, rect: Rect, color: DebugColor);

    /// Draws a circle outline
    fn draw_circle(&mut self, circle: Circle, color: DebugColor);
}

impl Space {
    /// Draws the selected layers through `renderer`
    ///
    /// World coordinates are converted to screen coordinates by subtracting
    /// `camera_offset`. Simulation state is never modified.
    pub fn debug_draw<R: DebugRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        camera_offset: Vector2,
        flags: DebugDrawFlags,
    ) {
        let to_screen = -camera_offset;

        if flags.contains(DebugDrawFlags::STATICS) {
            for static_body in self.static_bodies() {
                renderer.draw_rect(static_body.rect.translated(to_screen), DebugColor::Orange);
            }
        }

        for &handle in self.active_bodies() {
            let Ok(body) = self.get_body(handle) else {
                continue;
            };

            if flags.contains(DebugDrawFlags::COLLIDERS) {
                renderer.draw_rect(body.world_collider().translated(to_screen), DebugColor::Red);
            }

            if flags.contains(DebugDrawFlags::HITBOXES) {
                match body.world_hitbox().translated(to_screen) {
                    Shape::Rect(rect) => renderer.draw_rect(rect, DebugColor::Yellow),
                    Shape::Circle(circle) => renderer.draw_circle(circle, DebugColor::Yellow),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{CollisionType, PhysicsBody};

    #[derive(Default)]
    struct Recorder {
        rects: Vec<(Rect, DebugColor)>,
        circles: Vec<(Circle, DebugColor)>,
    }

    impl DebugRenderer for Recorder {
        fn draw_rect(&mut self, rect: Rect, color: DebugColor) {
            self.rects.push((rect, color));
        }

        fn draw_circle(&mut self, circle: Circle, color: DebugColor) {
            self.circles.push((circle, color));
        }
    }

    #[test]
    fn draws_layers_relative_to_camera() {
        let mut space = Space::new();
        space.add_static(Rect::new(0.0, 100.0, 200.0, 20.0), CollisionType::Full);
        space.spawn_body(
            PhysicsBody::new(Vector2::new(50.0, 0.0), Rect::new(-8.0, -8.0, 16.0, 16.0))
                .with_hitbox(Circle::new(Vector2::zero(), 4.0)),
        );

        let mut recorder = Recorder::default();
        space.debug_draw(&mut recorder, Vector2::new(10.0, 0.0), DebugDrawFlags::all());

        assert_eq!(
            recorder.rects,
            vec![
                (Rect::new(-10.0, 100.0, 200.0, 20.0), DebugColor::Orange),
                (Rect::new(32.0, -8.0, 16.0, 16.0), DebugColor::Red),
            ]
        );
        assert_eq!(recorder.circles, vec![(Circle::new(Vector2::new(40.0, 0.0), 4.0), DebugColor::Yellow)]);
    }

    #[test]
    fn default_flags_skip_hitboxes() {
        let mut space = Space::new();
        space.spawn_body(PhysicsBody::new(Vector2::zero(), Rect::new(0.0, 0.0, 4.0, 4.0)));

        let mut recorder = Recorder::default();
        space.debug_draw(&mut recorder, Vector2::zero(), DebugDrawFlags::default());

        assert_eq!(recorder.rects.len(), 1);
        assert!(recorder.circles.is_empty());
    }
}
