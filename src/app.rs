/*
 * Application Module
 *
 * This module defines the application model and the driving loop. nannou
 * calls `update` once per display refresh; the session decides whether
 * enough time has passed for the next frame, and when it has, the scatter
 * layer is rebuilt and kept on the model until the following frame.
 */

use nannou::prelude::*;

use crate::error::{GalaxyError, Result};
use crate::params::GalaxyParams;
use crate::renderer::{self, ScatterLayer};
use crate::session::AnimationSession;
use crate::viewport::Viewport;
use crate::{TITLE, WINDOW_SIDE};

// Main model for the application
pub struct Model {
    pub session: AnimationSession,
    pub viewport: Viewport,
    pub layer: Option<ScatterLayer>,
}

impl Model {
    pub fn new(session: AnimationSession) -> Self {
        let viewport = Viewport::new(session.params().view_extent);
        Self {
            session,
            viewport,
            layer: None,
        }
    }

    // Rebuild the scatter layer from the session's current frame
    pub fn refresh_layer(&mut self) {
        let alpha = self.session.params().scatter_alpha;
        self.layer = self
            .session
            .current_frame()
            .map(|frame| renderer::scatter_layer(frame, alpha));
    }
}

pub fn run() {
    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    match build_model(app) {
        Ok(model) => model,
        Err(e) => fail_startup(&e),
    }
}

fn build_model(app: &App) -> Result<Model> {
    let session = AnimationSession::new(GalaxyParams::default())?;

    app.new_window()
        .title(TITLE)
        .size(WINDOW_SIDE, WINDOW_SIDE)
        .view(renderer::view)
        .closed(window_closed)
        .build()
        .map_err(|e| GalaxyError::Window(format!("{:?}", e)))?;

    let mut model = Model::new(session);
    model.session.start();
    model.refresh_layer();
    Ok(model)
}

/// Report a startup failure and terminate the process.
pub fn fail_startup(err: &GalaxyError) -> ! {
    log::error!("startup failed: {}", err);
    eprintln!("galaxy: {}", err);
    std::process::exit(1);
}

// Update the model
pub fn update(_app: &App, model: &mut Model, update: Update) {
    if model.session.update(update.since_last) {
        model.refresh_layer();
    }
}

fn window_closed(app: &App, model: &mut Model) {
    model.session.close();
    app.quit();
}
