//! Mapping between path commands and point-mass backed vertices.
//!
//! A [`PathVertex`] remembers everything about its source command except the
//! end point, which lives in the point arena and moves with the simulation.
//! Re-encoding reads the current positions and rebuilds the same command
//! kind, flags and control offsets.

use crate::command::{Arc, ArcEllipse, CommandKind, PathCommand};
use crate::error::UnsupportedCommand;
use crate::float::Float;
use crate::point_mass::PointMass;
use crate::vec::Vec2;

/// Kind-specific metadata kept for re-encoding.
///
/// Control offsets are stored in the frame of the source command and are
/// never simulated; only end points move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum VertexShape<F: Float> {
    Move,
    Line,
    HorizontalLine,
    VerticalLine,
    Cubic { control_start: Vec2<F>, control_end: Vec2<F> },
    SmoothCubic { control_end: Vec2<F> },
    Quadratic { control: Vec2<F> },
    Arc {
        radii: Vec2<F>,
        x_rotation: F,
        large_arc: bool,
        sweep: bool,
        ellipse: Option<ArcEllipse<F>>,
    },
    Close,
}

/// One command's end point plus the metadata to rebuild the command.
#[derive(Clone, Debug, PartialEq)]
pub struct PathVertex<F: Float> {
    shape: VertexShape<F>,
    relative: bool,
    /// Arena index of the end point; `None` for close.
    point: Option<usize>,
    /// Arena index of the preceding end point in the chain.
    previous: Option<usize>,
}

impl<F: Float> PathVertex<F> {
    /// Build a vertex from a command whose end point is `point`.
    ///
    /// Smooth quadratic curves have no mapping and are rejected.
    pub fn from_command(
        command: &PathCommand<F>,
        point: Option<usize>,
        previous: Option<usize>,
    ) -> Result<Self, UnsupportedCommand> {
        let shape = match command.kind {
            CommandKind::MoveTo(_) => VertexShape::Move,
            CommandKind::LineTo(_) => VertexShape::Line,
            CommandKind::HorizontalLineTo(_) => VertexShape::HorizontalLine,
            CommandKind::VerticalLineTo(_) => VertexShape::VerticalLine,
            CommandKind::CurveTo { control_start, control_end, .. } => {
                VertexShape::Cubic { control_start, control_end }
            }
            CommandKind::SmoothCurveTo { control_end, .. } => VertexShape::SmoothCubic { control_end },
            CommandKind::QuadTo { control, .. } => VertexShape::Quadratic { control },
            CommandKind::Arc(arc) => VertexShape::Arc {
                radii: arc.radii,
                x_rotation: arc.x_rotation,
                large_arc: arc.large_arc,
                sweep: arc.sweep,
                ellipse: arc.ellipse,
            },
            CommandKind::ClosePath => VertexShape::Close,
            CommandKind::SmoothQuadTo(_) => return Err(UnsupportedCommand(command.letter())),
        };
        let point = if shape == VertexShape::Close { None } else { point };
        Ok(PathVertex { shape, relative: command.relative, point, previous })
    }

    pub fn shape(&self) -> &VertexShape<F> {
        &self.shape
    }

    pub fn is_relative(&self) -> bool {
        self.relative
    }

    pub fn point(&self) -> Option<usize> {
        self.point
    }

    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    /// Coordinate to emit: the end point, or its offset from the previous
    /// point when relative. `None` for close.
    pub fn position(&self, points: &[PointMass<F>]) -> Option<Vec2<F>> {
        let current = points[self.point?].position;
        match (self.relative, self.previous) {
            (true, Some(previous)) => Some(current - points[previous].position),
            _ => Some(current),
        }
    }

    /// Rebuild the source command from the current point positions.
    pub fn command(&self, points: &[PointMass<F>]) -> PathCommand<F> {
        let to = self.position(points).unwrap_or_else(Vec2::zero);
        let kind = match self.shape {
            VertexShape::Move => CommandKind::MoveTo(to),
            VertexShape::Line => CommandKind::LineTo(to),
            VertexShape::HorizontalLine => CommandKind::HorizontalLineTo(to.x),
            VertexShape::VerticalLine => CommandKind::VerticalLineTo(to.y),
            VertexShape::Cubic { control_start, control_end } => {
                CommandKind::CurveTo { control_start, control_end, to }
            }
            VertexShape::SmoothCubic { control_end } => CommandKind::SmoothCurveTo { control_end, to },
            VertexShape::Quadratic { control } => CommandKind::QuadTo { control, to },
            VertexShape::Arc { radii, x_rotation, large_arc, sweep, ellipse } => CommandKind::Arc(Arc {
                radii,
                x_rotation,
                large_arc,
                sweep,
                to,
                ellipse,
            }),
            VertexShape::Close => CommandKind::ClosePath,
        };
        PathCommand { relative: self.relative, kind }
    }
}
