// Tunables for the particle field. Defaults are the values the announcement page uses.

use crate::color::Color;

/// What happens to particle positions when the viewport changes size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Leave positions alone; particles outside the new bounds are pulled back
    /// by the wraparound check on the next frame.
    Preserve,
    /// Wrap out-of-bounds positions back into the viewport immediately.
    Wrap,
}

impl Default for ResizePolicy {
    fn default() -> Self {
        ResizePolicy::Preserve
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub base_color: Color,
    /// Upper bound (exclusive) of each particle's alpha.
    pub max_alpha: f64,
    /// Velocity components are drawn from `[-max_speed, max_speed)`, in pixels per frame.
    pub max_speed: f64,
    pub min_radius: f64,
    pub radius_spread: f64,
    pub resize_policy: ResizePolicy,
}

impl FieldConfig {
    pub const PARTICLE_COUNT: usize = 50;

    pub fn with_resize_policy(self, resize_policy: ResizePolicy) -> Self {
        FieldConfig {
            resize_policy,
            ..self
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            count: FieldConfig::PARTICLE_COUNT,
            base_color: Color::GOLD,
            max_alpha: 0.5,
            max_speed: 0.5,
            min_radius: 0.5,
            radius_spread: 2.0,
            resize_policy: ResizePolicy::Preserve,
        }
    }
}
