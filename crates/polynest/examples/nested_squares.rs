//! Three nested squares plus a disjoint triangle; prints the border records.
//!
//! Run: cargo run -p polynest --example nested_squares

use polynest::prelude::*;

fn main() -> Result<(), NestError> {
    let polygons = vec![
        Polygon::from_coords(0, &[(0, 0), (10, 0), (10, 10), (0, 10)])?,
        Polygon::from_coords(1, &[(2, 2), (8, 2), (8, 8), (2, 8)])?,
        Polygon::from_coords(2, &[(4, 4), (6, 4), (6, 6), (4, 6)])?,
        Polygon::from_coords(3, &[(20, 0), (30, 0), (25, 8)])?,
    ];
    check_topology(&polygons)?;
    let sorted = order_polygons(polygons);
    let forest = ContainmentForest::build(&sorted, NestCfg::default())?;
    let records = collect_borders(&sorted, NestCfg::default())?;
    println!("{}", records.len());
    for r in &records {
        println!("{r}");
    }
    println!("nesting levels: {}", forest.height());
    Ok(())
}
