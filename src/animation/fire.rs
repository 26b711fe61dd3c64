//! Fire simulation
//!
//! Cellular heat diffusion over a one-dimensional heat array, after the
//! `Fire2012` sketch from `FastLED`. Every frame the cells cool down, heat
//! drifts away from the base of the strip and new sparks ignite near it.

use embassy_time::Duration;
use rand::{Rng, RngCore, rngs::SmallRng};

use super::Animation;
use crate::{color::heat_color, surface::Surface};

const DEFAULT_COOLING: u8 = 60;
const DEFAULT_SPARKING: u8 = 50;
const DEFAULT_SPARKS: u8 = 3;
const DEFAULT_SPARK_HEIGHT: usize = 4;

// Diffusion weights of a cell and its three predecessors
const BLEND_SELF: u16 = 2;
const BLEND_NEIGHBOR_1: u16 = 3;
const BLEND_NEIGHBOR_2: u16 = 2;
const BLEND_NEIGHBOR_3: u16 = 1;
const BLEND_TOTAL: u16 = BLEND_SELF + BLEND_NEIGHBOR_1 + BLEND_NEIGHBOR_2 + BLEND_NEIGHBOR_3;

/// Cells below this index keep their heat during diffusion
const DIFFUSION_START: usize = 3;

const SPARK_HEAT_MIN: u8 = 160;
const SPARK_HEAT_MAX: u8 = 255;

/// Fire animation over `N` pixels
#[derive(Debug, Clone)]
pub struct FireAnimation<const N: usize, R: RngCore = SmallRng> {
    /// How much the air cools as it rises. Less cooling = taller flames.
    cooling: u8,
    /// Chance (out of 256) that a spark attempt ignites
    sparking: u8,
    /// Spark attempts per frame
    sparks: u8,
    /// Highest pixel index a spark may ignite at
    spark_height: usize,
    /// Temperature of every pixel
    heat: [u8; N],
    rng: R,
}

impl<const N: usize, R: RngCore> FireAnimation<N, R> {
    /// Create a fire with default tuning, drawing randomness from `rng`
    pub const fn new(rng: R) -> Self {
        Self {
            cooling: DEFAULT_COOLING,
            sparking: DEFAULT_SPARKING,
            sparks: DEFAULT_SPARKS,
            spark_height: DEFAULT_SPARK_HEIGHT,
            heat: [0; N],
            rng,
        }
    }

    /// Set the cooling rate
    #[must_use]
    pub fn with_cooling(mut self, cooling: u8) -> Self {
        self.cooling = cooling;
        self
    }

    /// Set the spark probability (0-255)
    #[must_use]
    pub fn with_sparking(mut self, sparking: u8) -> Self {
        self.sparking = sparking;
        self
    }

    /// Set the number of spark attempts per frame
    #[must_use]
    pub fn with_sparks(mut self, sparks: u8) -> Self {
        self.sparks = sparks;
        self
    }

    /// Set the size of the spark kernel at the base of the strip
    #[must_use]
    pub fn with_spark_height(mut self, spark_height: usize) -> Self {
        self.spark_height = spark_height;
        self
    }

    /// Current heat of every pixel
    pub const fn heat(&self) -> &[u8; N] {
        &self.heat
    }

    /// Mutable heat array, for seeding a fire
    pub fn heat_mut(&mut self) -> &mut [u8; N] {
        &mut self.heat
    }

    /// Upper bound of the random amount each cell cools per frame
    #[allow(clippy::cast_possible_truncation)]
    pub const fn cool_range(&self) -> u32 {
        if N == 0 {
            return 0;
        }
        (self.cooling as u32 * 10) / (N as u32) + 2
    }

    /// Cool every cell down by a little, never below zero
    pub fn cool(&mut self) {
        let cool_range = self.cool_range();
        for cell in &mut self.heat {
            let amount = self.rng.random_range(0..=cool_range);
            *cell = cell.saturating_sub(u8::try_from(amount).unwrap_or(u8::MAX));
        }
    }

    /// Drift heat up the strip and diffuse it a little
    ///
    /// Updates in place, so each cell blends with already diffused
    /// predecessors. The first three cells are left as they are.
    #[allow(clippy::cast_possible_truncation)]
    pub fn diffuse(&mut self) {
        for p in DIFFUSION_START..N {
            let n1 = self.heat[(p + N - 1) % N];
            let n2 = self.heat[(p + N - 2) % N];
            let n3 = self.heat[(p + N - 3) % N];

            let blended = (u16::from(self.heat[p]) * BLEND_SELF
                + u16::from(n1) * BLEND_NEIGHBOR_1
                + u16::from(n2) * BLEND_NEIGHBOR_2
                + u16::from(n3) * BLEND_NEIGHBOR_3)
                / BLEND_TOTAL;

            self.heat[p] = (blended % 256) as u8;
        }
    }

    /// Randomly ignite new sparks down in the flame kernel
    pub fn ignite(&mut self) {
        if N == 0 {
            return;
        }
        for _ in 0..self.sparks {
            if self.rng.random::<u8>() < self.sparking {
                let p = self.rng.random_range(0..=self.spark_height) % N;
                let spark = self.rng.random_range(SPARK_HEAT_MIN..=SPARK_HEAT_MAX);
                self.heat[p] = self.heat[p].wrapping_add(spark);
            }
        }
    }

    /// Write the heat array to `surface` as colors
    pub fn render<S: Surface>(&self, surface: &mut S) {
        for (pixel, heat) in surface.pixels_mut().iter_mut().zip(self.heat.iter()) {
            *pixel = heat_color(*heat);
        }
    }
}

impl<const N: usize, R: RngCore> Animation for FireAnimation<N, R> {
    fn reset<S: Surface>(&mut self, surface: &mut S) {
        self.heat = [0; N];
        surface.clear();
    }

    fn draw<S: Surface>(&mut self, surface: &mut S, _delta: Duration) {
        self.cool();
        self.diffuse();
        self.ignite();
        self.render(surface);
        surface.show();
    }
}
