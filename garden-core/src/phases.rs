//! High-level simulation phases for the node garden.
//!
//! The per-tick update loop looks like:
//! 1. [`interaction_phase`] — every unordered node pair exchanges a
//!    gravity-like impulse, colliding pairs respawn, and each interacting
//!    pair is recorded in a [`LinkBuffer`] for the renderer.
//! 2. [`integration_phase`] — velocities are added to positions and nodes
//!    that left the viewport are recycled back inside.

use crate::{config::Config, garden::Garden, links::LinkBuffer, node::Node};
use rand::Rng;

/// Runs the pairwise interaction pass over all unordered node pairs.
///
/// For each pair (A, B), using the positions current at visit time:
///
/// 1. If the circles overlap (`distance < massA/2 + massB/2`), every member
///    of the pair whose mass, as read at the start of the visit, is less
///    than or equal to the other's is respawned in place with fresh
///    position, velocity and mass. Equal masses respawn both. The pair
///    exchanges no force this tick.
/// 2. If `distance` exceeds `cfg.force_cutoff`, the pair is skipped entirely
///    and no link is recorded.
/// 3. Otherwise `force = force_scale * massA * massB / distance²`, clamped
///    to `cfg.force_cap`, is applied as an equal-and-opposite velocity
///    impulse along the line between the pair. Nodes of differing polarity
///    pull together; matching polarity pushes apart. The impulse is not
///    divided by mass. One [`crate::links::Link`] is recorded per
///    interacting pair.
///
/// The buffer is cleared at the start of the pass, so after it returns it
/// holds exactly this tick's interactions.
///
/// ### Parameters
/// - `garden` - World state; node velocities (and, on collision, whole
///   nodes) are mutated.
/// - `cfg` - Global configuration providing the force constants.
/// - `links` - Scratch buffer refilled with this tick's interactions.
/// - `rng` - Randomness source for collision respawns.
pub fn interaction_phase(
    garden: &mut Garden,
    cfg: &Config,
    links: &mut LinkBuffer,
    rng: &mut impl Rng,
) {
    links.clear();

    let (w, h) = (garden.width, garden.height);
    let n = garden.nodes.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let a: Node = garden.nodes[i];
            let b: Node = garden.nodes[j];

            let delta = b.pos - a.pos;
            let distance = delta.length();

            if distance < a.mass / 2.0 + b.mass / 2.0 {
                // Overlap: the lighter one respawns, both on a mass tie.
                if a.mass <= b.mass {
                    garden.nodes[i].respawn(w, h, cfg, rng);
                }
                if b.mass <= a.mass {
                    garden.nodes[j].respawn(w, h, cfg, rng);
                }
                continue;
            }

            if distance > cfg.force_cutoff {
                continue;
            }

            // Overlap is ruled out above, so distance >= 1 here and the
            // direction is well defined.
            let dir = delta / distance;
            let force =
                (cfg.force_scale * a.mass * b.mass / (distance * distance)).min(cfg.force_cap);
            let impulse = dir * force;

            if a.polarity != b.polarity {
                // Opposite polarities attract.
                garden.nodes[i].vel += impulse;
                garden.nodes[j].vel -= impulse;
            } else {
                garden.nodes[i].vel -= impulse;
                garden.nodes[j].vel += impulse;
            }

            links.push(a.pos, b.pos, force);
        }
    }
}

/// Advances every node by its velocity and recycles runaways.
///
/// A node that ends up more than `cfg.edge_margin` past any viewport edge
/// gets a fresh random position and velocity; its mass is preserved, unlike
/// a collision respawn.
///
/// ### Parameters
/// - `garden` - World state; node positions (and velocities of recycled
///   nodes) are mutated.
/// - `cfg` - Global configuration providing the edge margin.
/// - `rng` - Randomness source for boundary recycling.
pub fn integration_phase(garden: &mut Garden, cfg: &Config, rng: &mut impl Rng) {
    let (w, h) = (garden.width, garden.height);
    let margin = cfg.edge_margin;

    for node in &mut garden.nodes {
        node.pos += node.vel;

        if node.pos.x > w + margin
            || node.pos.x < -margin
            || node.pos.y > h + margin
            || node.pos.y < -margin
        {
            node.recycle(w, h, cfg, rng);
        }
    }
}
