use eframe::egui::{Pos2, Vec2, pos2, vec2};
use rand::Rng;

pub(super) const AREA_PER_PARTICLE: f32 = 15_000.0;
pub(super) const MAX_PARTICLES: usize = 80;
pub(super) const INITIAL_SPEED: f32 = 0.25;
pub(super) const MIN_RADIUS: f32 = 1.0;
pub(super) const MAX_RADIUS: f32 = 3.0;
pub(super) const REPULSION_RADIUS: f32 = 150.0;
pub(super) const REPULSION_STRENGTH: f32 = 0.02;
pub(super) const MAX_SPEED: f32 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Pos2,
    pub velocity: Vec2,
    pub radius: f32,
}

pub fn particle_count(bounds: Vec2) -> usize {
    let area = bounds.x * bounds.y;
    if !area.is_finite() || bounds.x <= 0.0 || bounds.y <= 0.0 {
        return 0;
    }

    ((area / AREA_PER_PARTICLE).floor() as usize).min(MAX_PARTICLES)
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    generation: u64,
}

impl ParticleField {
    pub fn seeded<R: Rng + ?Sized>(bounds: Vec2, rng: &mut R) -> Self {
        Self {
            particles: spawn_particles(bounds, rng),
            bounds,
            generation: 0,
        }
    }

    pub fn reseed<R: Rng + ?Sized>(&mut self, bounds: Vec2, rng: &mut R) {
        let particles = spawn_particles(bounds, rng);
        self.particles = particles;
        self.bounds = bounds;
        self.generation += 1;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step(&mut self, pointer: Option<Pos2>) {
        for particle in &mut self.particles {
            particle.position += particle.velocity;
            reflect(particle, self.bounds);
            if let Some(pointer) = pointer {
                repel(particle, pointer);
            }
            clamp_speed(particle);
        }
    }
}

fn spawn_particles<R: Rng + ?Sized>(bounds: Vec2, rng: &mut R) -> Vec<Particle> {
    let count = particle_count(bounds);
    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        particles.push(Particle {
            position: pos2(
                rng.random_range(0.0..bounds.x),
                rng.random_range(0.0..bounds.y),
            ),
            velocity: vec2(
                rng.random_range(-INITIAL_SPEED..=INITIAL_SPEED),
                rng.random_range(-INITIAL_SPEED..=INITIAL_SPEED),
            ),
            radius: rng.random_range(MIN_RADIUS..=MAX_RADIUS),
        });
    }
    particles
}

// Elastic edge bounce. The particle is not pulled back inside, so it can
// sit just past the edge until its reflected velocity carries it back.
pub(super) fn reflect(particle: &mut Particle, bounds: Vec2) {
    if particle.position.x < 0.0 || particle.position.x > bounds.x {
        particle.velocity.x = -particle.velocity.x;
    }
    if particle.position.y < 0.0 || particle.position.y > bounds.y {
        particle.velocity.y = -particle.velocity.y;
    }
}

pub(super) fn repel(particle: &mut Particle, pointer: Pos2) {
    let delta = pointer - particle.position;
    let distance = delta.length();
    if distance > 0.0 && distance < REPULSION_RADIUS {
        let force = (REPULSION_RADIUS - distance) / REPULSION_RADIUS;
        particle.velocity -= (delta / distance) * force * REPULSION_STRENGTH;
    }
}

pub(super) fn clamp_speed(particle: &mut Particle) {
    let speed = particle.velocity.length();
    if speed > MAX_SPEED {
        particle.velocity *= MAX_SPEED / speed;
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle {
            position: pos2(x, y),
            velocity: vec2(vx, vy),
            radius: 2.0,
        }
    }

    #[test]
    fn count_follows_area_and_cap() {
        assert_eq!(particle_count(vec2(800.0, 600.0)), 32);
        assert_eq!(particle_count(vec2(1920.0, 1080.0)), 80);
        assert_eq!(particle_count(vec2(100.0, 100.0)), 0);
        assert_eq!(particle_count(vec2(150.0, 100.0)), 1);
        assert_eq!(particle_count(vec2(-800.0, 600.0)), 0);
        assert_eq!(particle_count(vec2(f32::INFINITY, 600.0)), 0);
    }

    #[test]
    fn seeded_particles_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::seeded(vec2(1280.0, 720.0), &mut rng);
        assert_eq!(field.particles().len(), 61);

        for particle in field.particles() {
            assert!((0.0..1280.0).contains(&particle.position.x));
            assert!((0.0..720.0).contains(&particle.position.y));
            assert!(particle.velocity.x.abs() <= INITIAL_SPEED);
            assert!(particle.velocity.y.abs() <= INITIAL_SPEED);
            assert!((MIN_RADIUS..=MAX_RADIUS).contains(&particle.radius));
        }
    }

    #[test]
    fn reseed_replaces_the_whole_set() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = ParticleField::seeded(vec2(800.0, 600.0), &mut rng);
        let before = field.particles().to_vec();

        field.reseed(vec2(400.0, 300.0), &mut rng);
        assert_eq!(field.particles().len(), 8);
        assert_eq!(field.bounds(), vec2(400.0, 300.0));
        assert_eq!(field.generation(), 1);
        assert!(
            field
                .particles()
                .iter()
                .all(|particle| !before.contains(particle))
        );

        field.reseed(vec2(800.0, 600.0), &mut rng);
        assert_eq!(field.particles().len(), 32);
    }

    #[test]
    fn reflect_flips_only_the_escaping_axis() {
        let bounds = vec2(100.0, 100.0);

        let mut left = particle(-0.5, 50.0, -0.2, 0.1);
        reflect(&mut left, bounds);
        assert_eq!(left, particle(-0.5, 50.0, 0.2, 0.1));

        let mut bottom = particle(50.0, 100.5, 0.1, 0.3);
        reflect(&mut bottom, bounds);
        assert_eq!(bottom, particle(50.0, 100.5, 0.1, -0.3));

        let mut inside = particle(50.0, 50.0, 0.1, 0.3);
        reflect(&mut inside, bounds);
        assert_eq!(inside, particle(50.0, 50.0, 0.1, 0.3));
    }

    #[test]
    fn repel_pushes_away_inside_radius_only() {
        let mut near = particle(100.0, 100.0, 0.0, 0.0);
        repel(&mut near, pos2(100.0, 175.0));
        assert!(near.velocity.x.abs() < 1e-6);
        assert!((near.velocity.y - -0.01).abs() < 1e-6);

        let mut far = particle(100.0, 100.0, 0.0, 0.0);
        repel(&mut far, pos2(100.0, 250.0));
        assert_eq!(far.velocity, Vec2::ZERO);

        let mut on_top = particle(100.0, 100.0, 0.0, 0.0);
        repel(&mut on_top, pos2(100.0, 100.0));
        assert_eq!(on_top.velocity, Vec2::ZERO);
    }

    #[test]
    fn clamp_preserves_direction() {
        let mut fast = particle(0.0, 0.0, 3.0, 4.0);
        clamp_speed(&mut fast);
        assert!((fast.velocity.length() - MAX_SPEED).abs() < 1e-5);
        assert!((fast.velocity.x / fast.velocity.y - 0.75).abs() < 1e-5);

        let mut slow = particle(0.0, 0.0, 0.3, 0.4);
        clamp_speed(&mut slow);
        assert_eq!(slow.velocity, vec2(0.3, 0.4));
    }

    #[test]
    fn speed_stays_bounded_under_constant_pointer_pressure() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ParticleField::seeded(vec2(400.0, 300.0), &mut rng);
        for frame in 0..600 {
            let pointer = pos2((frame % 400) as f32, 150.0);
            field.step(Some(pointer));
            for particle in field.particles() {
                assert!(particle.velocity.length() <= MAX_SPEED + 1e-5);
            }
        }
    }
}
