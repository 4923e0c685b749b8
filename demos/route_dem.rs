use std::path::PathBuf;

use anyhow::Result;
use flow_routing::{
    assign_catchments, basin_borders, fill_pits, flow_directions, read_dem, resolve_flats,
    stream_mask, write_directions,
};
use ndarray::{Array2, array};
use tempfile::NamedTempFile;

fn main() -> Result<()> {
    // two stream cells on opposite sides, a pit in between
    let dem: Array2<f64> = array![
        [6.0, 6.0, 6.0, 6.0, 6.0, 6.0],
        [1.0, 5.0, 5.0, 5.0, 5.0, 6.0],
        [6.0, 5.0, 3.0, 5.0, 5.0, 6.0],
        [6.0, 5.0, 5.0, 5.0, 5.0, 1.0],
        [6.0, 6.0, 6.0, 6.0, 6.0, 6.0],
    ];
    let (rows, cols) = dem.dim();
    let stream = stream_mask(&dem);
    let cap = rows * cols;

    let filled = fill_pits(&dem, &stream, cap)?.into_grid()?;
    let flow = flow_directions(&filled, &stream)?;
    let flow = resolve_flats(&flow, cap).into_grid()?;
    println!("Flow directions {flow}");

    let seeds = stream.mapv(|s| u32::from(s));
    let catchments = assign_catchments(&flow, &seeds, cap)?;
    println!(
        "Catchments ({} cells drain off-grid) {}",
        catchments.unresolved, catchments.grid
    );
    println!("Basin borders {}", basin_borders(&catchments.grid));

    // round-trip the direction raster through a file
    let tmp = NamedTempFile::new()?;
    let ofn: PathBuf = tmp.path().to_path_buf();
    write_directions(&flow, &ofn)?;
    let back = read_dem(&ofn)?;
    assert_eq!(back.dim(), flow.dim());
    println!("Wrote directions to {ofn:?} and read them back");
    tmp.close()?;

    Ok(())
}
