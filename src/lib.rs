//! # Flow-routing
//!
//! `flow-routing` computes D8 hydrological flow routing over a digital
//! elevation model (DEM): it removes spurious pits, assigns each cell a
//! single steepest-descent flow direction among its eight neighbours,
//! spreads directions into flat areas, propagates catchment labels upstream
//! from stream cells, and marks basin borders.
//!
//! Grids are [`ndarray::Array2`] values. Every convergence stage reads one
//! fully materialised grid per pass and writes a new one (never updating in
//! place), runs row-parallel, and is bounded by an explicit pass cap whose
//! outcome comes back as a [`FixedPoint`].
//!
//! Cells whose input elevation equals [`STREAM_ELEVATION`] are treated as
//! fixed drains: pit filling keeps them at their own elevation and the flow
//! assigner routes them (and every border cell) outward.
//!
//! ## Example
//!
//! ```
//! use ndarray::array;
//! use flow_routing::{fill_pits, flow_directions, resolve_flats, stream_mask};
//!
//! let dem = array![
//!     [1.0, 5.0, 5.0],
//!     [5.0, 4.0, 5.0],
//!     [5.0, 5.0, 5.0],
//! ];
//! let stream = stream_mask(&dem);
//! let filled = fill_pits(&dem, &stream, 100).unwrap().into_grid().unwrap();
//! let flow = flow_directions(&filled, &stream).unwrap();
//! let flow = resolve_flats(&flow, 100).into_grid().unwrap();
//! assert!(flow.iter().all(|&d| d != 0));
//! ```

pub mod catchment;
pub mod error;
pub mod fill;
pub mod flow;
pub mod geometry;
mod grid;
pub mod raster;

pub use catchment::{assign_catchments, basin_borders};
pub use error::FlowError;
pub use fill::fill_pits;
pub use flow::{flow_directions, resolve_flats};
pub use geometry::{Direction, border_mask, outside_mask};
pub use grid::FixedPoint;
pub use raster::{STREAM_ELEVATION, read_dem, stream_mask, write_directions};
