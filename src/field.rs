// The particle collection and its per-frame update, independent of any drawing surface.

use crate::config::{FieldConfig, ResizePolicy};
use crate::particle::Particle;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct ParticleField {
    width: u32,
    height: u32,
    particles: Vec<Particle>,
    config: FieldConfig,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> ParticleField {
        ParticleField {
            width: 0,
            height: 0,
            particles: Vec::with_capacity(config.count),
            config,
        }
    }

    /// Replaces any existing particles with `config.count` fresh ones spread
    /// over a `width` x `height` viewport.
    pub fn initialize<R: Rng + ?Sized>(&mut self, width: u32, height: u32, rng: &mut R) {
        self.width = width;
        self.height = height;
        self.particles.clear();
        for _ in 0..self.config.count {
            let p = Particle::random(rng, width, height, &self.config);
            self.particles.push(p);
        }
    }

    /// Builds a field from explicit particles. Mostly useful for scripted scenes.
    pub fn from_particles(
        width: u32,
        height: u32,
        particles: Vec<Particle>,
        config: FieldConfig,
    ) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
            config,
        }
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        if self.config.resize_policy == ResizePolicy::Wrap {
            for particle in &mut self.particles {
                particle.wrap(width, height);
            }
        }
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
