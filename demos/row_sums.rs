use std::env;

use multiview::{MultiView, Result};

use rand::Rng;

fn read_dim(var: &str, default: usize) -> usize {
    env::var(var)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

/// ----------------------
/// Row sums over a flat buffer
/// ----------------------
fn row_sums(view: &MultiView<multiview::Position<'_, f32>>) -> Result<Vec<f32>> {
    let rows = view.sizes()[0];
    let mut sums = Vec::with_capacity(rows);
    for r in 0..rows {
        let row = view.sub_slice(&[r])?.unwrap_or_default();
        sums.push(row.iter().sum());
    }
    Ok(sums)
}

fn main() -> Result<()> {
    env_logger::init();

    let rows = read_dim("ROW_SUMS_ROWS", 4);
    let cols = read_dim("ROW_SUMS_COLS", 8);

    let mut rng = rand::rng();
    let data: Vec<f32> = (0..rows * cols).map(|_| rng.random_range(-1.0..1.0)).collect();

    let view = MultiView::from_slice(&data[..], &[rows, cols])?;
    let sums = row_sums(&view)?;

    for (r, sum) in sums.iter().enumerate() {
        let first = view.get(&[r])?.copied().unwrap_or_default();
        println!("row {r}: first {first:+.3}, sum {sum:+.3}");
    }

    let total: f32 = data.iter().sum();
    let by_rows: f32 = sums.iter().sum();
    println!("total {total:+.3}, sum of row sums {by_rows:+.3}");

    Ok(())
}
