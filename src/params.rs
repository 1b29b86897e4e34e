/*
 * Galaxy Parameters Module
 *
 * This module defines the GalaxyParams struct that holds every constant
 * shaping the galaxy: arm layout, noise, colour bands, marker sizes and the
 * animation cadence. Nothing here is adjustable at runtime; the defaults are
 * the look of the visualization and changing them means recompiling.
 */

use std::f32::consts::PI;
use std::time::Duration;

use crate::error::{GalaxyError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct GalaxyParams {
    // Spiral arms
    pub n_arms: usize,
    pub n_particles: usize,
    pub arm_span: f32,          // Upper bound of the arm parameter t
    pub radial_scale: f32,      // r = t * radial_scale
    pub rotation_rate: f32,     // Radians per frame
    pub jitter_std_dev: f32,
    pub hue_band_width: f32,
    pub arm_base_size: f32,

    // Central bulge
    pub n_bulge: usize,
    pub bulge_mean_radius: f32,
    pub bulge_size: f32,
    pub bulge_heat: f32,        // Point on the heat ramp used for every bulge particle

    // Presentation
    pub scatter_alpha: f32,
    pub view_extent: f32,       // World window is [-extent, extent] on both axes
    pub frame_count: u32,
    pub frame_interval: Duration,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            n_arms: 3,
            n_particles: 2000,
            arm_span: 4.0 * PI,
            radial_scale: 0.8,
            rotation_rate: 0.02,
            jitter_std_dev: 0.3,
            hue_band_width: 0.3,
            arm_base_size: 50.0,
            n_bulge: 200,
            bulge_mean_radius: 0.5,
            bulge_size: 100.0,
            bulge_heat: 0.9,
            scatter_alpha: 0.6,
            view_extent: 15.0,
            frame_count: 200,
            frame_interval: Duration::from_millis(50),
        }
    }
}

impl GalaxyParams {
    // Arm particles are split evenly; any remainder of the division is dropped
    pub fn particles_per_arm(&self) -> usize {
        if self.n_arms == 0 {
            return 0;
        }
        self.n_particles / self.n_arms
    }

    pub fn arm_particle_count(&self) -> usize {
        self.particles_per_arm() * self.n_arms
    }

    pub fn total_particle_count(&self) -> usize {
        self.arm_particle_count() + self.n_bulge
    }

    /// Check that every field can be used to build a generator and a session.
    pub fn validate(&self) -> Result<()> {
        if self.n_arms == 0 {
            return Err(GalaxyError::invalid("n_arms", "at least one arm is required"));
        }
        if self.n_particles < self.n_arms {
            return Err(GalaxyError::invalid(
                "n_particles",
                format!("{} particles cannot fill {} arms", self.n_particles, self.n_arms),
            ));
        }
        positive("arm_span", self.arm_span)?;
        positive("radial_scale", self.radial_scale)?;
        if !self.rotation_rate.is_finite() {
            return Err(GalaxyError::invalid("rotation_rate", "must be finite"));
        }
        if !(self.jitter_std_dev.is_finite() && self.jitter_std_dev >= 0.0) {
            return Err(GalaxyError::invalid("jitter_std_dev", "must be finite and non-negative"));
        }
        unit_interval("hue_band_width", self.hue_band_width)?;
        positive("arm_base_size", self.arm_base_size)?;
        positive("bulge_mean_radius", self.bulge_mean_radius)?;
        positive("bulge_size", self.bulge_size)?;
        unit_interval("bulge_heat", self.bulge_heat)?;
        unit_interval("scatter_alpha", self.scatter_alpha)?;
        positive("view_extent", self.view_extent)?;
        if self.frame_count == 0 {
            return Err(GalaxyError::invalid("frame_count", "at least one frame is required"));
        }
        if self.frame_interval.is_zero() {
            return Err(GalaxyError::invalid("frame_interval", "must be longer than zero"));
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GalaxyError::invalid(name, format!("must be finite and positive, got {value}")))
    }
}

fn unit_interval(name: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GalaxyError::invalid(name, format!("must lie in [0, 1], got {value}")))
    }
}
