// Ties a particle field to the surface it is drawn on.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::surface::Surface;
use rand::Rng;

pub struct Simulator<S: Surface> {
    field: ParticleField,
    surface: S,
}

impl<S: Surface> Simulator<S> {
    pub fn new(surface: S, config: FieldConfig) -> Simulator<S> {
        Simulator {
            field: ParticleField::new(config),
            surface,
        }
    }

    /// Sizes the surface to the viewport and seeds a fresh set of particles.
    /// Calling it again replaces the previous particles.
    pub fn initialize<R: Rng + ?Sized>(&mut self, width: u32, height: u32, rng: &mut R) {
        if self.surface.size() != (width, height) {
            self.surface.resize(width, height);
        }
        self.field.initialize(width, height, rng);
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.field.on_resize(width, height);
    }

    /// Clears the surface, advances every particle one frame, then draws them in order.
    pub fn tick(&mut self) {
        self.surface.clear();
        self.field.step();
        for particle in self.field.particles() {
            let [x, y] = particle.pos();
            self.surface
                .fill_circle(x, y, particle.radius(), particle.color());
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::surface::PixelSurface;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, PartialEq)]
    enum Op {
        Resize(u32, u32),
        Clear,
        Circle(f64, f64, f64),
    }

    struct RecordingSurface {
        size: (u32, u32),
        ops: Vec<Op>,
    }

    impl RecordingSurface {
        fn new(width: u32, height: u32) -> Self {
            RecordingSurface {
                size: (width, height),
                ops: Vec::new(),
            }
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (u32, u32) {
            self.size
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.size = (width, height);
            self.ops.push(Op::Resize(width, height));
        }

        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, _color: Color) {
            self.ops.push(Op::Circle(x, y, radius));
        }
    }

    fn simulator(seed: u64) -> Simulator<RecordingSurface> {
        let mut sim = Simulator::new(RecordingSurface::new(800, 600), FieldConfig::default());
        sim.initialize(800, 600, &mut StdRng::seed_from_u64(seed));
        sim
    }

    #[test]
    fn tick_clears_then_draws_every_particle_in_order() {
        let mut sim = simulator(3);
        sim.tick();

        let ops = &sim.surface().ops;
        assert_eq!(ops.len(), 51);
        assert_eq!(ops[0], Op::Clear);
        for (op, particle) in ops[1..].iter().zip(sim.field().particles()) {
            let [x, y] = particle.pos();
            assert_eq!(*op, Op::Circle(x, y, particle.radius()));
        }
    }

    #[test]
    fn initialize_matching_size_skips_resize() {
        let sim = simulator(4);
        assert!(sim.surface().ops.is_empty());
        assert_eq!(sim.field().len(), 50);
    }

    #[test]
    fn initialize_twice_keeps_fifty() {
        let mut sim = simulator(5);
        sim.initialize(640, 480, &mut StdRng::seed_from_u64(6));
        assert_eq!(sim.field().len(), 50);
        assert_eq!(sim.surface().ops, vec![Op::Resize(640, 480)]);
    }

    #[test]
    fn resize_reaches_surface_and_field() {
        let mut sim = simulator(8);
        sim.on_resize(1280, 720);
        assert_eq!(sim.surface().size(), (1280, 720));
        assert_eq!(sim.field().size(), (1280, 720));
    }

    #[test]
    fn many_ticks_keep_count() {
        let mut sim = Simulator::new(PixelSurface::new(64, 48), FieldConfig::default());
        sim.initialize(64, 48, &mut StdRng::seed_from_u64(12));
        for _ in 0..500 {
            sim.tick();
        }
        assert_eq!(sim.field().len(), 50);
        assert!(sim.surface().pixel_data().iter().any(|b| *b != 0));
    }
}
