//! Error type shared by all routing stages and the raster collaborator.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    /// Two grids that must share a shape do not. Raised at the point of
    /// combination, never silently broadcast.
    #[error("grid dimensions differ: {left:?} vs {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A fixed-point stage hit its pass cap while cells were still changing.
    #[error("{stage} was still changing after {passes} passes")]
    NonConvergence { stage: &'static str, passes: usize },

    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("tiff: {0}")]
    Tiff(#[from] tiff::TiffError),

    #[error("unsupported raster sample format")]
    UnsupportedSampleFormat,

    #[error("raster holds {got} samples, expected {rows}x{cols}")]
    TruncatedRaster {
        got: usize,
        rows: usize,
        cols: usize,
    },
}
