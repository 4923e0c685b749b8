use anyhow::Result;
use flow_routing::{fill_pits, stream_mask};
use ndarray::{Array2, array};

fn main() -> Result<()> {
    // a pit in the middle, a stream outlet in the corner
    let dem: Array2<f64> = array![
        [10.0, 12.0, 10.0, 10.0],
        [12.0, 9.0, 10.0, 12.0],
        [10.0, 12.0, 10.0, 1.0],
    ];
    let stream = stream_mask(&dem);
    println!("Filling pits on {dem}");
    let outcome = fill_pits(&dem, &stream, 100)?;
    println!(
        "settled after {} passes, now is {}",
        outcome.passes, outcome.grid
    );

    Ok(())
}
