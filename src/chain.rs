//! Movable chains: the vertices of one source path, in drawing order.

use crate::command::PathCommand;
use crate::float::Float;
use crate::path_data;
use crate::point_mass::PointMass;
use crate::vertex::PathVertex;
use alloc::string::String;
use alloc::vec::Vec as AllocVec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity of a chain within its scene.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChainId(pub usize);

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A source path as handed over by the host: its commands and whether the
/// final vertex is anchored.
#[derive(Clone, Debug, PartialEq)]
pub struct SourcePath<F: Float> {
    pub commands: AllocVec<PathCommand<F>>,
    pub anchor_last: bool,
    /// Host handle for the path (element id, file name...).
    pub label: Option<String>,
    /// The `d` text the commands were parsed from, if any.
    pub original_data: Option<String>,
}

impl<F: Float> SourcePath<F> {
    pub fn new(commands: AllocVec<PathCommand<F>>) -> Self {
        SourcePath { commands, anchor_last: false, label: None, original_data: None }
    }

    /// Parse `d` attribute text.
    pub fn from_data(data: &str) -> Result<Self, crate::error::ParseError> {
        let commands = path_data::parse(data)?;
        Ok(SourcePath { original_data: Some(String::from(data)), ..SourcePath::new(commands) })
    }

    pub fn anchored_last(mut self, anchor_last: bool) -> Self {
        self.anchor_last = anchor_last;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// The vertices built from one source path.
///
/// Built once during scene assembly; afterwards only read, to re-encode the
/// path from the current point positions.
#[derive(Clone, Debug, PartialEq)]
pub struct MovableChain<F: Float> {
    id: ChainId,
    label: Option<String>,
    original_data: Option<String>,
    anchor_last: bool,
    vertices: AllocVec<PathVertex<F>>,
}

impl<F: Float> MovableChain<F> {
    pub(crate) fn new(id: ChainId, source: &SourcePath<F>, vertices: AllocVec<PathVertex<F>>) -> Self {
        MovableChain {
            id,
            label: source.label.clone(),
            original_data: source.original_data.clone(),
            anchor_last: source.anchor_last,
            vertices,
        }
    }

    pub fn id(&self) -> ChainId {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn original_data(&self) -> Option<&str> {
        self.original_data.as_deref()
    }

    pub fn anchor_last(&self) -> bool {
        self.anchor_last
    }

    pub fn vertices(&self) -> &[PathVertex<F>] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Arena indices of the chain's points in traversal order.
    pub fn point_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices.iter().filter_map(PathVertex::point)
    }

    /// Commands rebuilt from the current positions, in the original order.
    pub fn commands(&self, points: &[PointMass<F>]) -> AllocVec<PathCommand<F>> {
        self.vertices.iter().map(|v| v.command(points)).collect()
    }

    /// Path data rebuilt from the current positions.
    pub fn encode(&self, points: &[PointMass<F>]) -> String {
        path_data::encode(&self.commands(points))
    }
}
