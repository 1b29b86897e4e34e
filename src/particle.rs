/*
 * Particle Module
 *
 * A Frame is the complete particle set for one frame index. Particles have
 * no identity across frames: every frame is generated from scratch and the
 * previous one is simply dropped.
 *
 * Storage is struct-of-arrays so the renderer can walk positions, colours
 * and sizes in lockstep. The four sequences always have the same length.
 */

use nannou::color::Rgba;
use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleGroup {
    Arm(usize),
    Bulge,
}

#[derive(Debug, Clone)]
pub struct Frame {
    index: u32,
    positions: Vec<Point2>,
    colors: Vec<Rgba>,
    sizes: Vec<f32>,
    groups: Vec<ParticleGroup>,
}

impl Frame {
    pub fn with_capacity(index: u32, capacity: usize) -> Self {
        Self {
            index,
            positions: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
            sizes: Vec::with_capacity(capacity),
            groups: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, position: Point2, color: Rgba, size: f32, group: ParticleGroup) {
        self.positions.push(position);
        self.colors.push(color);
        self.sizes.push(size);
        self.groups.push(group);
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Point2] {
        &self.positions
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    // Indices of all particles belonging to `group`, in generation order
    pub fn indices_of(&self, group: ParticleGroup) -> impl Iterator<Item = usize> + '_ {
        self.groups
            .iter()
            .enumerate()
            .filter(move |(_, g)| **g == group)
            .map(|(i, _)| i)
    }

    pub fn count_of(&self, group: ParticleGroup) -> usize {
        self.indices_of(group).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::color::rgba;

    #[test]
    fn test_push_keeps_sequences_aligned() {
        let mut frame = Frame::with_capacity(7, 3);
        assert!(frame.is_empty());

        frame.push(pt2(1.0, 2.0), rgba(1.0, 0.0, 0.0, 1.0), 50.0, ParticleGroup::Arm(0));
        frame.push(pt2(-1.0, 0.5), rgba(0.0, 1.0, 0.0, 1.0), 40.0, ParticleGroup::Arm(1));
        frame.push(pt2(0.1, 0.1), rgba(1.0, 0.5, 0.0, 1.0), 100.0, ParticleGroup::Bulge);

        assert_eq!(frame.index(), 7);
        assert_eq!(frame.len(), 3);
        assert_eq!(frame.positions().len(), 3);
        assert_eq!(frame.colors().len(), 3);
        assert_eq!(frame.sizes().len(), 3);
        assert_eq!(frame.count_of(ParticleGroup::Bulge), 1);
        assert_eq!(frame.sizes()[2], 100.0);
    }

    #[test]
    fn test_group_lookup() {
        let mut frame = Frame::with_capacity(0, 4);
        frame.push(pt2(0.0, 0.0), rgba(1.0, 1.0, 1.0, 1.0), 1.0, ParticleGroup::Arm(0));
        frame.push(pt2(0.0, 0.0), rgba(1.0, 1.0, 1.0, 1.0), 1.0, ParticleGroup::Bulge);
        frame.push(pt2(0.0, 0.0), rgba(1.0, 1.0, 1.0, 1.0), 1.0, ParticleGroup::Arm(0));

        let arm: Vec<usize> = frame.indices_of(ParticleGroup::Arm(0)).collect();
        assert_eq!(arm, vec![0, 2]);
        assert_eq!(frame.count_of(ParticleGroup::Bulge), 1);
        assert_eq!(frame.count_of(ParticleGroup::Arm(1)), 0);
    }
}
