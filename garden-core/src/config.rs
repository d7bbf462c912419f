#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Numerator scale of the pairwise force.
    pub force_scale: f32,
    /// Upper bound on the per-pair impulse magnitude.
    pub force_cap: f32,
    /// Pairs farther apart than this exchange no force.
    pub force_cutoff: f32,
    /// Nodes this far past a viewport edge get recycled.
    pub edge_margin: f32,
    /// Mass range at spawn, half-open.
    pub mass_min: f32,
    pub mass_max: f32,
    /// Velocity component range at spawn, half-open.
    pub speed_min: f32,
    pub speed_max: f32,
    /// Divisor in the area-based node count: sqrt(area) / divisor.
    pub density_divisor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            force_scale: 10.0,
            force_cap: 0.025,
            force_cutoff: 200.0,
            edge_margin: 25.0,
            mass_min: 1.0,
            mass_max: 2.5,
            speed_min: -0.5,
            speed_max: 0.5,
            density_divisor: 10.0,
        }
    }
}
