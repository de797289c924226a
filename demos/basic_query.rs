use anyhow::{Context, Result};
use euler_lca::{LcaConfig, LcaIndex};

fn main() -> Result<()> {
    // 0 has children 1 and 2; 1 has children 3 and 4
    let edges = [(0, 1), (0, 2), (1, 3), (1, 4)];
    let index = LcaIndex::from_edges(5, &edges, LcaConfig::default())
        .context("failed to build lca index")?;

    for (u, v) in [(3, 4), (3, 2), (1, 4), (0, 0)] {
        println!(
            "lca({u}, {v}) = {}\tdistance = {}",
            index.query(u, v)?,
            index.distance(u, v)?
        );
    }

    println!("euler tour: {:?}", index.euler_tour().nodes());
    Ok(())
}
