//! Interactive node garden viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state
//! (garden, link buffer, configuration) and implements [`eframe::App`]
//! to advance and render the garden once per display frame.

use eframe::App;
use garden_core::{config::Config, garden::Garden, links::LinkBuffer, phases};
use glam::Vec2;

/// Panel background; the per-frame clear of the drawing surface.
const BACKGROUND: egui::Color32 = egui::Color32::WHITE;
/// Fill color of the node circles.
const NODE_COLOR: egui::Color32 = egui::Color32::BLACK;
/// Stroke alpha per unit of link strength; capped at fully opaque.
const LINE_ALPHA_SCALE: f32 = 50.0;

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: [`Garden`], [`LinkBuffer`], [`Config`].
/// - eframe/egui callbacks for drawing and pointer interaction.
///
/// The per-frame update is:
/// 1. Sync the garden to the panel size and pixel density (seeds on the
///    first frame, tops up after a window resize).
/// 2. Apply pointer presses: primary adds a node under the cursor, middle
///    removes the nearest one.
/// 3. Advance one tick via [`Viewer::step_once`].
/// 4. Paint the link lines and node circles, then request the next frame.
///
/// The garden works in device pixels; egui works in logical points. The
/// `world_to_screen`/`screen_to_world` helpers convert between the two
/// using the current pixel density.
///
/// ### Fields
/// - `garden` - World state being simulated.
/// - `cfg` - Global simulation configuration (force constants, ranges).
/// - `links` - Per-tick pairwise interactions, stroked as lines.
/// - `rng` - Random number generator for spawning and respawning nodes.
pub struct Viewer {
    garden: Garden,
    cfg: Config,
    links: LinkBuffer,
    rng: rand::rngs::ThreadRng,
}

impl Viewer {
    /// Creates a new viewer with an empty garden.
    ///
    /// The garden starts with zero dimensions; the first call to
    /// [`Viewer::sync_viewport`] picks up the real panel size and seeds the
    /// node collection to the density target.
    pub fn new() -> Self {
        Self {
            garden: Garden::new(0.0, 0.0),
            cfg: Config::default(),
            links: LinkBuffer::new(),
            rng: rand::rng(),
        }
    }

    /// Matches the garden dimensions to the drawing area.
    ///
    /// `rect` is the panel rectangle in logical points and `pixel_ratio`
    /// the display's pixels-per-point factor. When the resulting
    /// device-pixel size differs from the garden's, the garden is resized:
    /// existing nodes survive and the collection is topped up to the
    /// density target. The first frame always differs, which seeds the
    /// initial population.
    fn sync_viewport(&mut self, rect: egui::Rect, pixel_ratio: f32) {
        let device_w = rect.width() * pixel_ratio;
        let device_h = rect.height() * pixel_ratio;

        if device_w != self.garden.width || device_h != self.garden.height {
            self.garden
                .resize(rect.width(), rect.height(), pixel_ratio, &self.cfg, &mut self.rng);
            log::info!(
                "garden resized to {:.0}x{:.0} device pixels, {} nodes",
                self.garden.width,
                self.garden.height,
                self.garden.nodes.len()
            );
        }
    }

    /// Advances the simulation by a single tick.
    ///
    /// The tick consists of:
    /// 1. [`phases::interaction_phase`] — pairwise forces, collisions and
    ///    link recording.
    /// 2. [`phases::integration_phase`] — position updates and boundary
    ///    recycling.
    fn step_once(&mut self) {
        phases::interaction_phase(&mut self.garden, &self.cfg, &mut self.links, &mut self.rng);
        phases::integration_phase(&mut self.garden, &self.cfg, &mut self.rng);
    }

    /// Converts a world-space position (device pixels) to screen-space.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect, pixel_ratio: f32) -> egui::Pos2 {
        egui::pos2(rect.min.x + p.x / pixel_ratio, rect.min.y + p.y / pixel_ratio)
    }

    /// Converts a screen-space position back to world-space device pixels.
    ///
    /// This is the inverse of [`Viewer::world_to_screen`] up to floating
    /// point rounding.
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect, pixel_ratio: f32) -> Vec2 {
        Vec2::new(
            (p.x - rect.min.x) * pixel_ratio,
            (p.y - rect.min.y) * pixel_ratio,
        )
    }

    /// Primary press: insert a node under the pointer.
    fn add_at(&mut self, screen_pos: egui::Pos2, rect: egui::Rect, pixel_ratio: f32) {
        let world = self.screen_to_world(screen_pos, rect, pixel_ratio);
        self.garden.add_node(world, &self.cfg, &mut self.rng);
    }

    /// Middle press: remove the node nearest to the pointer.
    fn remove_at(&mut self, screen_pos: egui::Pos2, rect: egui::Rect, pixel_ratio: f32) {
        let world = self.screen_to_world(screen_pos, rect, pixel_ratio);
        if let Some(node) = self.garden.remove_nearest(world) {
            log::debug!("removed node at ({:.0}, {:.0})", node.pos.x, node.pos.y);
        }
    }

    /// Builds the bottom status bar (node and link counts).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("nodes = {}", self.garden.nodes.len()));
                ui.label(format!("links = {}", self.links.len()));
            });
        });
    }

    /// Builds the central panel where the garden is simulated and drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::click());
                let rect = response.rect;
                let painter = ui.painter_at(rect);
                let pixel_ratio = ctx.pixels_per_point();

                self.sync_viewport(rect, pixel_ratio);

                // Pointer presses mutate the collection before the tick.
                if response.clicked()
                    && let Some(pos) = response.interact_pointer_pos()
                {
                    self.add_at(pos, rect, pixel_ratio);
                }

                if response.clicked_by(egui::PointerButton::Middle)
                    && let Some(pos) = response.interact_pointer_pos()
                {
                    self.remove_at(pos, rect, pixel_ratio);
                }

                self.step_once();

                // Gravity lines first, node circles on top.
                let stroke_width = 1.0 / pixel_ratio;
                for link in self.links.iter() {
                    let alpha = (link.strength * LINE_ALPHA_SCALE).min(1.0);
                    let color = egui::Color32::from_rgba_unmultiplied(
                        67,
                        67,
                        67,
                        (alpha * 255.0) as u8,
                    );
                    let a = self.world_to_screen(link.a, rect, pixel_ratio);
                    let b = self.world_to_screen(link.b, rect, pixel_ratio);
                    painter.line_segment([a, b], egui::Stroke::new(stroke_width, color));
                }

                for node in &self.garden.nodes {
                    let p = self.world_to_screen(node.pos, rect, pixel_ratio);
                    painter.circle_filled(p, node.radius() / pixel_ratio, NODE_COLOR);
                }

                // Self-rescheduling frame loop: ask for the next tick once
                // this one is done.
                ctx.request_repaint();
            });
    }
}

impl App for Viewer {
    /// eframe callback that runs one tick and draws the garden.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn new_starts_with_an_empty_garden() {
        let viewer = Viewer::new();
        assert!(viewer.garden.nodes.is_empty());
        assert!(viewer.links.is_empty());
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let viewer = Viewer::new();
        let rect = test_rect();
        let pixel_ratio = 2.0;

        let world_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 250.0),
            Vec2::new(13.5, 877.25),
        ];

        let eps = 1e-4;

        for p in world_points {
            let screen = viewer.world_to_screen(p, rect, pixel_ratio);
            let back = viewer.screen_to_world(screen, rect, pixel_ratio);

            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={:?}, back={:?}",
                p,
                back
            );
        }
    }

    #[test]
    fn sync_viewport_seeds_on_the_first_frame() {
        let mut viewer = Viewer::new();
        let rect = test_rect();

        viewer.sync_viewport(rect, 1.0);

        // sqrt(800 * 600) / 10 = 69.28... -> 69 nodes.
        assert_eq!(viewer.garden.nodes.len(), 69);
        assert_eq!(viewer.garden.width, 800.0);
        assert_eq!(viewer.garden.height, 600.0);

        // Same size again: nothing changes.
        let first = viewer.garden.nodes[0];
        viewer.sync_viewport(rect, 1.0);
        assert_eq!(viewer.garden.nodes.len(), 69);
        assert_eq!(viewer.garden.nodes[0].pos, first.pos);
    }

    #[test]
    fn clicks_add_and_remove_through_screen_coordinates() {
        let mut viewer = Viewer::new();
        let rect = test_rect();
        let pixel_ratio = 2.0;
        viewer.garden.width = 1600.0;
        viewer.garden.height = 1200.0;

        viewer.add_at(egui::Pos2::new(50.0, 50.0), rect, pixel_ratio);

        assert_eq!(viewer.garden.nodes.len(), 1);
        assert_eq!(viewer.garden.nodes[0].pos, Vec2::new(100.0, 100.0));

        viewer.remove_at(egui::Pos2::new(51.0, 51.0), rect, pixel_ratio);

        assert!(viewer.garden.nodes.is_empty());
    }

    #[test]
    fn step_once_on_an_empty_garden_does_not_panic() {
        let mut viewer = Viewer::new();
        viewer.step_once();
        assert!(viewer.links.is_empty());
    }
}
