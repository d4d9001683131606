// Simple particle struct to keep track of individual position, velocity, size and color.
// Only the position changes after construction.

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pos: Vector2<f64>,
    vel: Vector2<f64>,
    radius: f64,
    color: Color,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Places a particle uniformly inside a `width` x `height` viewport.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: u32,
        height: u32,
        config: &FieldConfig,
    ) -> Particle {
        let pos = [
            rng.gen::<f64>() * width as f64,
            rng.gen::<f64>() * height as f64,
        ];
        let speed_range = config.max_speed * 2.0;
        let vel = [
            rng.gen::<f64>() * speed_range - config.max_speed,
            rng.gen::<f64>() * speed_range - config.max_speed,
        ];
        let radius = rng.gen::<f64>() * config.radius_spread + config.min_radius;
        let color = config
            .base_color
            .with_alpha(rng.gen::<f64>() * config.max_alpha);

        Particle::new(pos, vel, radius, color)
    }

    pub fn pos(&self) -> Vector2<f64> {
        self.pos
    }

    pub fn vel(&self) -> Vector2<f64> {
        self.vel
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Advances one frame, then wraps.
    pub fn step(&mut self, width: u32, height: u32) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        self.wrap(width, height);
    }

    // Leaving past the far edge lands on 0, leaving past 0 lands on the far edge.
    pub fn wrap(&mut self, width: u32, height: u32) {
        self.pos[0] = wrap_axis(self.pos[0], width as f64);
        self.pos[1] = wrap_axis(self.pos[1], height as f64);
    }
}

fn wrap_axis(value: f64, extent: f64) -> f64 {
    if value > extent {
        0.0
    } else if value < 0.0 {
        extent
    } else {
        value
    }
}
