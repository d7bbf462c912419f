use crate::config::Config;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct Node {
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,
    pub polarity: bool,
}

impl Node {
    /// A fresh node at a uniform-random position inside the viewport.
    pub fn random(width: f32, height: f32, cfg: &Config, rng: &mut impl Rng) -> Self {
        Self {
            pos: random_pos(width, height, rng),
            vel: random_vel(cfg, rng),
            mass: random_mass(cfg, rng),
            polarity: false,
        }
    }

    /// A fresh node at the given position (pointer insertion).
    pub fn at(pos: Vec2, cfg: &Config, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            vel: random_vel(cfg, rng),
            mass: random_mass(cfg, rng),
            polarity: false,
        }
    }

    /// Collision respawn: position, velocity and mass are all re-rolled.
    pub fn respawn(&mut self, width: f32, height: f32, cfg: &Config, rng: &mut impl Rng) {
        self.pos = random_pos(width, height, rng);
        self.vel = random_vel(cfg, rng);
        self.mass = random_mass(cfg, rng);
    }

    /// Boundary recycle: position and velocity are re-rolled, mass is kept.
    pub fn recycle(&mut self, width: f32, height: f32, cfg: &Config, rng: &mut impl Rng) {
        self.pos = random_pos(width, height, rng);
        self.vel = random_vel(cfg, rng);
    }

    /// Render radius equals mass.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.mass
    }
}

fn random_pos(width: f32, height: f32, rng: &mut impl Rng) -> Vec2 {
    Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height))
}

fn random_vel(cfg: &Config, rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.random_range(cfg.speed_min..cfg.speed_max),
        rng.random_range(cfg.speed_min..cfg.speed_max),
    )
}

fn random_mass(cfg: &Config, rng: &mut impl Rng) -> f32 {
    rng.random_range(cfg.mass_min..cfg.mass_max)
}
