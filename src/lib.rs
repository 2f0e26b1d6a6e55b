//! Spring-mass animation of SVG paths.
//!
//! `svg-springs` turns the end points of path-drawing commands into point
//! masses joined by damped springs, advances them with semi-implicit Euler,
//! and re-encodes the moved points as path commands of the same kind, flags
//! and coordinate mode. Rendering, frame scheduling and DOM access belong to
//! the host.
//!
//! # Features
//!
//! - **Point masses**: force accumulation, semi-implicit Euler, fixed anchors
//! - **Springs**: Hookean stiffness plus velocity-projected damping
//! - **Collisions**: pairwise separation and restitution impulses
//! - **Lossless mapping**: command kind, relative flag, control offsets and
//!   arc flags survive a simulate/re-encode round trip
//! - **Path data**: parser and encoder for the SVG `d` grammar
//! - **Observable**: monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use svg_springs::{NoOpRenderSink, NoOpStepObserver, Scene, SimulationConfig};
//!
//! let mut scene: Scene<f64> = Scene::new(SimulationConfig::new())?;
//! scene.add_path_data("M10 10 l0 20 l0 20", false)?;
//! let frame = scene.tick(&mut NoOpRenderSink, &mut NoOpStepObserver);
//! assert!(frame[0].data.starts_with("M10 10l"));
//! # Ok::<(), svg_springs::SceneError>(())
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod color;
pub mod point_mass;
pub mod spring;
pub mod collision;
pub mod command;
pub mod path_data;
pub mod vertex;
pub mod chain;
pub mod solver;
pub mod scene;
pub mod render;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use color::Color;
pub use point_mass::PointMass;
pub use spring::Spring;
pub use command::{ArcEllipse, CommandKind, PathCommand};
pub use vertex::{PathVertex, VertexShape};
pub use chain::{ChainId, MovableChain, SourcePath};
pub use solver::SpringSolver;
pub use scene::{EncodedChain, Scene};
pub use render::{NoOpRenderSink, RenderSink, Segment};
pub use config::{Bounds, SimulationConfig, SpringConfig};
pub use observer::{NoOpStepObserver, StepObserver, StepStats};
pub use error::{ParseError, ParseErrorKind, SceneError, UnsupportedCommand};
