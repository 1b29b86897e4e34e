/*
 * Renderer Module
 *
 * This module turns a generated frame into what ends up in the window.
 *
 * Every displayed frame is a full redraw: the background is cleared, the
 * scatter layer is drawn as one batch of translucent discs and the title is
 * laid over the top. Particle identity is not stable between frames, so
 * there is nothing to update incrementally.
 */

use nannou::color::{rgba, Rgba};
use nannou::prelude::*;

use crate::app::Model;
use crate::particle;
use crate::viewport::Viewport;
use crate::{BACKGROUND, TITLE, TITLE_FONT_SIZE, TITLE_PAD};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: Point2,   // World space
    pub area: f32,          // Points squared
    pub color: Rgba,
}

// The drawable form of one frame, handed back to the driving loop
#[derive(Debug, Clone)]
pub struct ScatterLayer {
    pub frame_index: u32,
    pub markers: Vec<Marker>,
}

impl ScatterLayer {
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Build the scatter layer for `frame`, applying `alpha` to every colour.
pub fn scatter_layer(frame: &particle::Frame, alpha: f32) -> ScatterLayer {
    let markers = frame
        .positions()
        .iter()
        .zip(frame.colors())
        .zip(frame.sizes())
        .map(|((&position, color), &area)| Marker {
            position,
            area,
            color: rgba(color.color.red, color.color.green, color.color.blue, alpha),
        })
        .collect();

    ScatterLayer {
        frame_index: frame.index(),
        markers,
    }
}

pub fn draw_scatter(draw: &Draw, layer: &ScatterLayer, viewport: &Viewport, window_rect: Rect) {
    for marker in &layer.markers {
        let screen_pos = viewport.world_to_screen(marker.position, window_rect);
        draw.ellipse()
            .xy(screen_pos)
            .radius(viewport.marker_radius(marker.area, window_rect))
            .color(marker.color);
    }
}

// Title sits above the plotted square, kept inside the window
pub fn title_position(viewport: &Viewport, window_rect: Rect) -> Point2 {
    let plot_top = viewport.plot_rect(window_rect).top();
    let max_y = window_rect.top() - TITLE_FONT_SIZE as f32;
    pt2(window_rect.x(), (plot_top + TITLE_PAD).min(max_y))
}

pub fn draw_title(draw: &Draw, viewport: &Viewport, window_rect: Rect) {
    draw.text(TITLE)
        .xy(title_position(viewport, window_rect))
        .w(window_rect.w())
        .color(WHITE)
        .font_size(TITLE_FONT_SIZE);
}

// Render the current layer
pub fn view(app: &App, model: &Model, frame: nannou::prelude::Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    draw.background().color(BACKGROUND);

    if let Some(layer) = &model.layer {
        draw_scatter(&draw, layer, &model.viewport, window_rect);
    }

    draw_title(&draw, &model.viewport, window_rect);

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GalaxyGenerator;
    use crate::params::GalaxyParams;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn frame() -> particle::Frame {
        let gen = GalaxyGenerator::new(GalaxyParams::default()).unwrap();
        gen.generate(5, &mut StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_layer_covers_every_particle() {
        let frame = frame();
        let layer = scatter_layer(&frame, 0.6);
        assert_eq!(layer.len(), frame.len());
        assert_eq!(layer.frame_index, 5);
        for (marker, &pos) in layer.markers.iter().zip(frame.positions()) {
            assert_eq!(marker.position, pos);
        }
    }

    #[test]
    fn test_layer_applies_alpha() {
        let frame = frame();
        let layer = scatter_layer(&frame, 0.6);
        assert!(layer.markers.iter().all(|m| (m.color.alpha - 0.6).abs() < 1e-6));

        let source = frame.colors()[0];
        assert_eq!(layer.markers[0].color.color.red, source.color.red);
        assert_eq!(layer.markers[0].area, frame.sizes()[0]);
    }

    #[test]
    fn test_title_above_plot_inside_window() {
        let viewport = Viewport::new(15.0);

        // Square window: no room above the plot, so the title is clamped inside
        let square = Rect::from_w_h(1000.0, 1000.0);
        let pos = title_position(&viewport, square);
        assert!(pos.y < square.top());

        // Tall window: title sits TITLE_PAD above the plotted square
        let tall = Rect::from_w_h(600.0, 1000.0);
        let pos = title_position(&viewport, tall);
        assert!((pos.y - (300.0 + TITLE_PAD)).abs() < 1e-3);
    }
}
