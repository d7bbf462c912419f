use crate::config::Config;
use crate::node::Node;
use glam::Vec2;
use rand::Rng;

/// The world state: viewport dimensions in device pixels plus the owned
/// node collection. Node order carries no meaning for the physics.
#[derive(Debug)]
pub struct Garden {
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<Node>,
}

impl Garden {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            nodes: Vec::new(),
        }
    }

    /// Number of nodes the viewport should hold, scaled with its area.
    ///
    /// `max(1, floor(sqrt(width * height) / density_divisor))`, so larger
    /// viewports come up denser while a degenerate one still holds a node.
    pub fn target_count(&self, cfg: &Config) -> usize {
        let area = self.width * self.height;
        ((area.sqrt() / cfg.density_divisor) as usize).max(1)
    }

    /// Applies a viewport change: logical size times pixel density.
    ///
    /// Existing nodes keep their positions and velocities; the collection is
    /// only topped up to [`Garden::target_count`], never shrunk.
    pub fn resize(
        &mut self,
        logical_w: f32,
        logical_h: f32,
        pixel_ratio: f32,
        cfg: &Config,
        rng: &mut impl Rng,
    ) {
        self.width = logical_w * pixel_ratio;
        self.height = logical_h * pixel_ratio;

        let target = self.target_count(cfg);
        if self.nodes.len() < target {
            log::debug!(
                "viewport {:.0}x{:.0}: topping up nodes {} -> {}",
                self.width,
                self.height,
                self.nodes.len(),
                target
            );
            while self.nodes.len() < target {
                self.nodes
                    .push(Node::random(self.width, self.height, cfg, rng));
            }
        }
    }

    /// Appends one node at `pos` with fresh random velocity and mass.
    pub fn add_node(&mut self, pos: Vec2, cfg: &Config, rng: &mut impl Rng) {
        self.nodes.push(Node::at(pos, cfg, rng));
    }

    /// Removes the node closest to `pos` (ties keep the first-encountered)
    /// and returns it. No-op on an empty garden.
    pub fn remove_nearest(&mut self, pos: Vec2) -> Option<Node> {
        let mut best = None;
        let mut best_d2 = f32::MAX;
        for (id, n) in self.nodes.iter().enumerate() {
            let d2 = (n.pos - pos).length_squared();
            if d2 < best_d2 {
                best_d2 = d2;
                best = Some(id);
            }
        }
        best.map(|id| self.nodes.swap_remove(id))
    }
}
