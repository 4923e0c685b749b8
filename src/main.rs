use std::env;
use std::process;

use flow_routing::{
    FlowError, fill_pits, flow_directions, read_dem, resolve_flats, stream_mask, write_directions,
};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        let name = args.first().map(String::as_str).unwrap_or("flow-routing");
        eprintln!("usage: {name} <dem.tif> <directions.tif>");
        process::exit(2);
    }
    if let Err(err) = route(&args[1], &args[2]) {
        eprintln!("flow-routing: {err}");
        process::exit(1);
    }
}

fn route(input: &str, output: &str) -> Result<(), FlowError> {
    let dem = read_dem(input)?;
    let (rows, cols) = dem.dim();
    let stream = stream_mask(&dem);

    // a productive pass settles at least one cell, so cell count bounds the
    // fixed point
    let cap = rows * cols;

    let filled = fill_pits(&dem, &stream, cap)?.into_grid()?;
    let flow = flow_directions(&filled, &stream)?;
    let flats = resolve_flats(&flow, cap);
    if flats.unresolved > 0 {
        eprintln!(
            "flow-routing: {} cells kept no flow direction",
            flats.unresolved
        );
    }
    write_directions(&flats.into_grid()?, output)?;
    Ok(())
}
