//! Declarative path-drawing commands as supplied by a source path.

use crate::float::Float;
use crate::vec::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ellipse parameters some path libraries annotate arcs with. Carried through
/// unchanged; nothing in the simulation reads them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArcEllipse<F: Float> {
    pub center: Vec2<F>,
    pub phi1: F,
    pub phi2: F,
}

/// Elliptical arc parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arc<F: Float> {
    pub radii: Vec2<F>,
    pub x_rotation: F,
    pub large_arc: bool,
    pub sweep: bool,
    pub to: Vec2<F>,
    pub ellipse: Option<ArcEllipse<F>>,
}

/// The kind of a path command together with its coordinates.
///
/// Coordinates are in the frame the command declares: absolute, or relative
/// to the previous end point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CommandKind<F: Float> {
    MoveTo(Vec2<F>),
    LineTo(Vec2<F>),
    HorizontalLineTo(F),
    VerticalLineTo(F),
    CurveTo { control_start: Vec2<F>, control_end: Vec2<F>, to: Vec2<F> },
    SmoothCurveTo { control_end: Vec2<F>, to: Vec2<F> },
    QuadTo { control: Vec2<F>, to: Vec2<F> },
    SmoothQuadTo(Vec2<F>),
    Arc(Arc<F>),
    ClosePath,
}

/// One drawing command.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathCommand<F: Float> {
    pub relative: bool,
    pub kind: CommandKind<F>,
}

impl<F: Float> CommandKind<F> {
    /// Upper-case SVG command letter.
    pub fn letter(&self) -> char {
        match self {
            CommandKind::MoveTo(_) => 'M',
            CommandKind::LineTo(_) => 'L',
            CommandKind::HorizontalLineTo(_) => 'H',
            CommandKind::VerticalLineTo(_) => 'V',
            CommandKind::CurveTo { .. } => 'C',
            CommandKind::SmoothCurveTo { .. } => 'S',
            CommandKind::QuadTo { .. } => 'Q',
            CommandKind::SmoothQuadTo(_) => 'T',
            CommandKind::Arc(_) => 'A',
            CommandKind::ClosePath => 'Z',
        }
    }

    /// Offset of the command's end point: `(x, y)` for two-coordinate kinds,
    /// `(x, 0)` for horizontal lines, `(0, y)` for vertical lines, none for
    /// close.
    pub fn target_offset(&self) -> Option<Vec2<F>> {
        match *self {
            CommandKind::MoveTo(to)
            | CommandKind::LineTo(to)
            | CommandKind::CurveTo { to, .. }
            | CommandKind::SmoothCurveTo { to, .. }
            | CommandKind::QuadTo { to, .. }
            | CommandKind::SmoothQuadTo(to) => Some(to),
            CommandKind::Arc(arc) => Some(arc.to),
            CommandKind::HorizontalLineTo(x) => Some(Vec2::new(x, F::zero())),
            CommandKind::VerticalLineTo(y) => Some(Vec2::new(F::zero(), y)),
            CommandKind::ClosePath => None,
        }
    }
}

impl<F: Float> PathCommand<F> {
    pub fn absolute(kind: CommandKind<F>) -> Self {
        PathCommand { relative: false, kind }
    }

    pub fn relative(kind: CommandKind<F>) -> Self {
        PathCommand { relative: true, kind }
    }

    /// SVG command letter, lower-case when relative.
    pub fn letter(&self) -> char {
        let letter = self.kind.letter();
        if self.relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        }
    }

    /// True if every coordinate, control offset and arc parameter is finite.
    pub fn is_finite(&self) -> bool {
        match self.kind {
            CommandKind::MoveTo(to) | CommandKind::LineTo(to) | CommandKind::SmoothQuadTo(to) => to.is_finite(),
            CommandKind::HorizontalLineTo(v) | CommandKind::VerticalLineTo(v) => v.is_finite(),
            CommandKind::CurveTo { control_start, control_end, to } => {
                control_start.is_finite() && control_end.is_finite() && to.is_finite()
            }
            CommandKind::SmoothCurveTo { control_end: control, to } | CommandKind::QuadTo { control, to } => {
                control.is_finite() && to.is_finite()
            }
            CommandKind::Arc(arc) => {
                arc.radii.is_finite()
                    && arc.x_rotation.is_finite()
                    && arc.to.is_finite()
                    && arc.ellipse.map_or(true, |e| {
                        e.center.is_finite() && e.phi1.is_finite() && e.phi2.is_finite()
                    })
            }
            CommandKind::ClosePath => true,
        }
    }

    /// Approximate equality of kind, flags and coordinates.
    pub fn approx_eq(&self, other: &Self, epsilon: F) -> bool {
        fn close<F: Float>(a: Vec2<F>, b: Vec2<F>, eps: F) -> bool {
            (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
        }
        if self.relative != other.relative {
            return false;
        }
        match (self.kind, other.kind) {
            (CommandKind::MoveTo(a), CommandKind::MoveTo(b))
            | (CommandKind::LineTo(a), CommandKind::LineTo(b))
            | (CommandKind::SmoothQuadTo(a), CommandKind::SmoothQuadTo(b)) => close(a, b, epsilon),
            (CommandKind::HorizontalLineTo(a), CommandKind::HorizontalLineTo(b))
            | (CommandKind::VerticalLineTo(a), CommandKind::VerticalLineTo(b)) => {
                (a - b).abs() <= epsilon
            }
            (
                CommandKind::CurveTo { control_start: s1, control_end: e1, to: t1 },
                CommandKind::CurveTo { control_start: s2, control_end: e2, to: t2 },
            ) => close(s1, s2, epsilon) && close(e1, e2, epsilon) && close(t1, t2, epsilon),
            (
                CommandKind::SmoothCurveTo { control_end: c1, to: t1 },
                CommandKind::SmoothCurveTo { control_end: c2, to: t2 },
            )
            | (CommandKind::QuadTo { control: c1, to: t1 }, CommandKind::QuadTo { control: c2, to: t2 }) => {
                close(c1, c2, epsilon) && close(t1, t2, epsilon)
            }
            (CommandKind::Arc(a), CommandKind::Arc(b)) => {
                a.large_arc == b.large_arc
                    && a.sweep == b.sweep
                    && a.ellipse == b.ellipse
                    && (a.x_rotation - b.x_rotation).abs() <= epsilon
                    && close(a.radii, b.radii, epsilon)
                    && close(a.to, b.to, epsilon)
            }
            (CommandKind::ClosePath, CommandKind::ClosePath) => true,
            _ => false,
        }
    }
}
