//! Ambient voxel field behind the views.
//!
//! Terminal rendition of the fixed-camera decorative 3D scene: a field of
//! drifting blocks at three depths, seeded deterministically so the scene
//! is reproducible. No interaction, no physics; under reduced motion the
//! field holds still.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const SEED: u64 = 0x566f_7865_6c21;
const DENSITY: f32 = 0.004; // voxels per cell

/// Depth layer; nearer layers drift faster and render brighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Far,
    Mid,
    Near,
}

impl Depth {
    #[must_use]
    const fn drift(self) -> f32 {
        match self {
            Depth::Far => 0.4,
            Depth::Mid => 0.9,
            Depth::Near => 1.6,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Voxel {
    pub x: f32,
    pub y: f32,
    pub depth: Depth,
    /// Palette slot chosen at spawn.
    pub hue: u8,
}

/// The drifting voxel field, sized to the terminal.
#[derive(Debug, Clone)]
pub struct Background {
    voxels: Vec<Voxel>,
    width: f32,
    height: f32,
}

impl Background {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let mut background = Self {
            voxels: Vec::new(),
            width: 0.0,
            height: 0.0,
        };
        background.resize(width, height);
        background
    }

    /// Rebuild the field for a new terminal size. Deterministic for a given
    /// size.
    pub fn resize(&mut self, width: u16, height: u16) {
        let (width, height) = (f32::from(width), f32::from(height));
        if (width - self.width).abs() < f32::EPSILON
            && (height - self.height).abs() < f32::EPSILON
        {
            return;
        }
        self.width = width;
        self.height = height;

        let mut rng = StdRng::seed_from_u64(SEED);
        let count = (width * height * DENSITY).max(8.0) as usize;
        self.voxels = (0..count)
            .map(|_| {
                let depth = match rng.random_range(0..3u8) {
                    0 => Depth::Far,
                    1 => Depth::Mid,
                    _ => Depth::Near,
                };
                Voxel {
                    x: rng.random_range(0.0..width),
                    y: rng.random_range(0.0..height),
                    depth,
                    hue: rng.random_range(0..3),
                }
            })
            .collect();
    }

    pub fn advance(&mut self, delta: Duration, reduced_motion: bool) {
        if reduced_motion || self.height <= 0.0 {
            return;
        }
        let dt = delta.as_secs_f32().min(0.25);
        for voxel in &mut self.voxels {
            voxel.y -= voxel.depth.drift() * dt;
            if voxel.y < 0.0 {
                voxel.y += self.height;
            }
        }
    }

    #[must_use]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }
}
