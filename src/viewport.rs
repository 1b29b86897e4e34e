/*
 * Viewport Module
 *
 * Maps the fixed world window [-extent, extent] x [-extent, extent] into the
 * largest square centred in the window, so the galaxy keeps an equal aspect
 * ratio whatever shape the window takes.
 */

use nannou::prelude::*;

// A scatter size is an area in points^2; the window side spans this many points
pub const REFERENCE_SIDE_POINTS: f32 = 720.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub extent: f32,
}

impl Viewport {
    pub fn new(extent: f32) -> Self {
        Self { extent }
    }

    // Side length in pixels of the square the world window is drawn into
    pub fn side(&self, window_rect: Rect) -> f32 {
        window_rect.w().min(window_rect.h())
    }

    // Pixels per world unit
    pub fn scale(&self, window_rect: Rect) -> f32 {
        self.side(window_rect) / (2.0 * self.extent)
    }

    // Convert a point from world space to screen space
    pub fn world_to_screen(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        point * self.scale(window_rect) + window_rect.xy()
    }

    // The plotted square in screen space
    pub fn plot_rect(&self, window_rect: Rect) -> Rect {
        let side = self.side(window_rect);
        Rect::from_xy_wh(window_rect.xy(), vec2(side, side))
    }

    /// Radius in pixels of a marker whose size is an area in points squared.
    pub fn marker_radius(&self, area: f32, window_rect: Rect) -> f32 {
        let pixels_per_point = self.side(window_rect) / REFERENCE_SIDE_POINTS;
        area.max(0.0).sqrt() / 2.0 * pixels_per_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_maps_to_square_edges() {
        let viewport = Viewport::new(15.0);
        let window = Rect::from_w_h(1000.0, 1000.0);

        let corner = viewport.world_to_screen(vec2(15.0, 15.0), window);
        assert!((corner.x - 500.0).abs() < 1e-3);
        assert!((corner.y - 500.0).abs() < 1e-3);

        let origin = viewport.world_to_screen(Vec2::ZERO, window);
        assert_eq!(origin, Vec2::ZERO);
    }

    #[test]
    fn test_non_square_window_keeps_aspect() {
        let viewport = Viewport::new(15.0);
        let window = Rect::from_w_h(1600.0, 900.0);

        assert_eq!(viewport.side(window), 900.0);
        let x_edge = viewport.world_to_screen(vec2(15.0, 0.0), window);
        let y_edge = viewport.world_to_screen(vec2(0.0, 15.0), window);
        assert!((x_edge.x - y_edge.y).abs() < 1e-3);
        assert_eq!(viewport.plot_rect(window).w(), 900.0);
    }

    #[test]
    fn test_marker_radius() {
        let viewport = Viewport::new(15.0);
        let window = Rect::from_w_h(720.0, 720.0);
        assert!((viewport.marker_radius(100.0, window) - 5.0).abs() < 1e-4);
        assert!(viewport.marker_radius(100.0, window) > viewport.marker_radius(50.0, window));
        assert_eq!(viewport.marker_radius(-1.0, window), 0.0);
    }
}
