/*
 * Galaxy Generator Module
 *
 * Produces the particle set for a single frame index. Each arm is a
 * parametric spiral, r = t * radial_scale, rotated by a fixed angle per
 * frame and blurred with Gaussian jitter. A central bulge of exponentially
 * distributed radii is added on top.
 *
 * The generator holds no per-frame state. Randomness comes from the RNG
 * passed into `generate`, so a seeded RNG gives a reproducible frame.
 */

use std::f32::consts::TAU;

use nannou::color::Rgba;
use nannou::prelude::*;
use rand::Rng;
use rand_distr::{Distribution, Exp, Normal};

use crate::colormap;
use crate::error::{GalaxyError, Result};
use crate::params::GalaxyParams;
use crate::particle::{Frame, ParticleGroup};

pub struct GalaxyGenerator {
    params: GalaxyParams,
    jitter: Normal<f32>,
    bulge_radius: Exp<f32>,
    bulge_color: Rgba,
}

impl GalaxyGenerator {
    pub fn new(params: GalaxyParams) -> Result<Self> {
        params.validate()?;

        let jitter = Normal::new(0.0, params.jitter_std_dev)
            .map_err(|e| GalaxyError::invalid("jitter_std_dev", e.to_string()))?;
        // Rate is the inverse of the mean radius
        let bulge_radius = Exp::new(1.0 / params.bulge_mean_radius)
            .map_err(|e| GalaxyError::invalid("bulge_mean_radius", e.to_string()))?;
        let bulge_color = colormap::yl_or_rd(params.bulge_heat);

        Ok(Self {
            params,
            jitter,
            bulge_radius,
            bulge_color,
        })
    }

    pub fn params(&self) -> &GalaxyParams {
        &self.params
    }

    /// Generate every particle of frame `frame_index`.
    ///
    /// Arm particles come first, arm by arm, ordered by increasing `t`;
    /// the bulge particles follow.
    pub fn generate<R: Rng + ?Sized>(&self, frame_index: u32, rng: &mut R) -> Frame {
        let p = &self.params;
        let per_arm = p.particles_per_arm();
        let ts = linspace(0.0, p.arm_span, per_arm);

        let mut frame = Frame::with_capacity(frame_index, p.total_particle_count());

        for arm in 0..p.n_arms {
            let (hue_start, hue_end) = hue_band(arm, p.n_arms, p.hue_band_width);
            let hues = linspace(hue_start, hue_end, per_arm);

            for (&t, &hue) in ts.iter().zip(&hues) {
                let smooth = self.spiral_point(t, arm, frame_index);
                let position = pt2(
                    smooth.x + self.jitter.sample(rng),
                    smooth.y + self.jitter.sample(rng),
                );
                let size = arm_particle_size(t / p.arm_span, p.arm_base_size);

                frame.push(position, colormap::hsv(hue), size, ParticleGroup::Arm(arm));
            }
        }

        for _ in 0..p.n_bulge {
            let r = self.bulge_radius.sample(rng);
            let angle = rng.gen_range(0.0..TAU);
            frame.push(
                pt2(r * angle.cos(), r * angle.sin()),
                self.bulge_color,
                p.bulge_size,
                ParticleGroup::Bulge,
            );
        }

        log::debug!("generated frame {} with {} particles", frame_index, frame.len());
        frame
    }

    // Position on an arm before jitter is applied
    pub fn spiral_point(&self, t: f32, arm: usize, frame_index: u32) -> Point2 {
        let p = &self.params;
        let theta = spiral_theta(t, arm_angle_offset(arm, p.n_arms), frame_index, p.rotation_rate);
        let r = spiral_radius(t, p.radial_scale);
        pt2(r * theta.cos(), r * theta.sin())
    }
}

// `n` evenly spaced values from `start` to `end`, both ends included
pub fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f32;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f32 })
                .collect()
        }
    }
}

pub fn arm_angle_offset(arm: usize, n_arms: usize) -> f32 {
    arm as f32 * (TAU / n_arms as f32)
}

pub fn spiral_theta(t: f32, angle_offset: f32, frame_index: u32, rotation_rate: f32) -> f32 {
    t + angle_offset + frame_index as f32 * rotation_rate
}

pub fn spiral_radius(t: f32, radial_scale: f32) -> f32 {
    t * radial_scale
}

/// Hue range `[arm / n_arms, arm / n_arms + width]` used for one arm.
pub fn hue_band(arm: usize, n_arms: usize, width: f32) -> (f32, f32) {
    let start = arm as f32 / n_arms as f32;
    (start, start + width)
}

// Larger near the core, half the base size at the arm tip
pub fn arm_particle_size(normalized_t: f32, base_size: f32) -> f32 {
    base_size * (1.0 - normalized_t / 2.0)
}
