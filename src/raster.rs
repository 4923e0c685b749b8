//! Raster file input and output, backed by the `tiff` crate.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use ndarray::Array2;
use num::ToPrimitive;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::encoder::{TiffEncoder, colortype};

use crate::error::FlowError;

/// Input elevation equal to this value marks a stream cell.
pub const STREAM_ELEVATION: f64 = 1.0;

/// Mask of cells treated as fixed drains, derived from the sentinel value.
pub fn stream_mask(dem: &Array2<f64>) -> Array2<bool> {
    dem.mapv(|z| z == STREAM_ELEVATION)
}

/// Reads a single-band grayscale TIFF into an elevation grid.
///
/// Integer and 32-bit float samples are widened to `f64`.
pub fn read_dem<P: AsRef<Path>>(path: P) -> Result<Array2<f64>, FlowError> {
    let mut decoder = Decoder::new(BufReader::new(File::open(path)?))?;
    let (width, height) = decoder.dimensions()?;
    let (rows, cols) = (height as usize, width as usize);

    let data: Vec<f64> = match decoder.read_image()? {
        DecodingResult::F64(v) => v,
        DecodingResult::F32(v) => widen(v),
        DecodingResult::U8(v) => widen(v),
        DecodingResult::U16(v) => widen(v),
        DecodingResult::U32(v) => widen(v),
        DecodingResult::I8(v) => widen(v),
        DecodingResult::I16(v) => widen(v),
        DecodingResult::I32(v) => widen(v),
        _ => return Err(FlowError::UnsupportedSampleFormat),
    };

    if data.len() != rows * cols {
        return Err(FlowError::TruncatedRaster {
            got: data.len(),
            rows,
            cols,
        });
    }
    Ok(Array2::from_shape_vec((rows, cols), data).expect("length checked above"))
}

/// Writes a direction-code grid as an 8-bit grayscale TIFF.
pub fn write_directions<P: AsRef<Path>>(flow: &Array2<u8>, path: P) -> Result<(), FlowError> {
    let (rows, cols) = flow.dim();
    let data: Vec<u8> = flow.iter().copied().collect();
    let mut encoder = TiffEncoder::new(BufWriter::new(File::create(path)?))?;
    encoder.write_image::<colortype::Gray8>(cols as u32, rows as u32, &data)?;
    Ok(())
}

fn widen<T: ToPrimitive>(v: Vec<T>) -> Vec<f64> {
    v.into_iter()
        .map(|x| x.to_f64().unwrap_or(f64::NAN))
        .collect()
}
