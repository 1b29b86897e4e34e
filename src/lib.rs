/*
 * Spiral Galaxy Visualization - Module Definitions
 *
 * This file defines the module structure for the galaxy animation.
 * Generation (params, colormap, particle, generator) is independent of the
 * window; session, viewport, renderer and app drive the display.
 */

// Re-export key components for easier access
pub use app::Model;
pub use error::GalaxyError;
pub use generator::GalaxyGenerator;
pub use params::GalaxyParams;
pub use particle::{Frame, ParticleGroup};
pub use renderer::ScatterLayer;
pub use session::{AnimationSession, SessionState};
pub use viewport::Viewport;

// Define modules
pub mod app;
pub mod colormap;
pub mod error;
pub mod generator;
pub mod params;
pub mod particle;
pub mod renderer;
pub mod session;
pub mod viewport;

// Constants
pub const WINDOW_SIDE: u32 = 1000;
pub const TITLE: &str = "Spiral Galaxy Visualization";
pub const TITLE_FONT_SIZE: u32 = 16;
pub const TITLE_PAD: f32 = 20.0;
pub const BACKGROUND: nannou::color::Srgb<u8> = nannou::color::BLACK;

pub const STARTUP_MESSAGES: [&str; 2] = [
    "🌌 Creating your spiral galaxy visualization...",
    "✨ Close the window to exit",
];
