use glam::Vec2;

/// One pairwise interaction recorded during a tick.
///
/// Endpoint positions are captured at the moment the force was computed, so
/// a later respawn of either node in the same pass does not move the line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: Vec2,
    pub b: Vec2,
    /// Clamped force magnitude; the renderer derives stroke alpha from it.
    pub strength: f32,
}

/// A temporary buffer that collects the [`Link`]s of a single tick.
///
/// The interaction phase clears and refills it every tick; the viewer then
/// strokes one line per entry. Keeping the buffer outside the phase lets the
/// allocation be reused across ticks and keeps the core render-free.
#[derive(Debug, Default)]
pub struct LinkBuffer {
    links: Vec<Link>,
}

impl LinkBuffer {
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Drops all recorded links, keeping the allocation.
    pub fn clear(&mut self) {
        self.links.clear();
    }

    #[inline]
    pub fn push(&mut self, a: Vec2, b: Vec2, strength: f32) {
        self.links.push(Link { a, b, strength });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_records_links_in_order() {
        let mut buf = LinkBuffer::new();
        assert!(buf.is_empty());

        buf.push(Vec2::ZERO, Vec2::new(1.0, 0.0), 0.01);
        buf.push(Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0), 0.025);

        assert_eq!(buf.len(), 2);
        let links: Vec<&Link> = buf.iter().collect();
        assert_eq!(links[0].b, Vec2::new(1.0, 0.0));
        assert_eq!(links[1].strength, 0.025);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut buf = LinkBuffer::new();
        buf.push(Vec2::ZERO, Vec2::ONE, 0.02);

        buf.clear();

        assert!(buf.is_empty());
        assert_eq!(buf.iter().count(), 0);
    }
}
