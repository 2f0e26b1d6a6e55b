//! Read-only view of the simulation handed to a renderer once per tick.

use crate::float::Float;
use crate::point_mass::PointMass;
use crate::vec::Vec2;

/// One drawn spring: its two endpoint positions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment<F: Float> {
    pub from: Vec2<F>,
    pub to: Vec2<F>,
}

/// Consumer of the per-tick simulation state. It cannot feed anything back.
pub trait RenderSink<F: Float> {
    fn render(&mut self, points: &[PointMass<F>], segments: &[Segment<F>]);
}

/// A sink that draws nothing.
pub struct NoOpRenderSink;

impl<F: Float> RenderSink<F> for NoOpRenderSink {
    fn render(&mut self, _points: &[PointMass<F>], _segments: &[Segment<F>]) {}
}
