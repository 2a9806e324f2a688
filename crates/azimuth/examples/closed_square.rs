//! Worked traverse demo: the four-leg square from the survey grid origin.
//!
//! Purpose
//! - Show the engine end to end on the canonical closed figure: four legs
//!   of 10 units at the cardinal azimuths, starting at (1000, 1000), with
//!   one notation per supported input style.
//! - Print the interchange columns the export path uses.

use azimuth::traverse::{run_traverse, TraverseRow};
use azimuth::Vec2;

fn main() {
    let rows = vec![
        TraverseRow::new("0°0'0\"", 10.0),
        TraverseRow::new("90 0 0", 10.0),
        TraverseRow::new("180:0:0", 10.0),
        TraverseRow::new(270.0, 10.0),
    ];
    let out = run_traverse(&rows, Vec2::new(1000.0, 1000.0));

    println!("Row,Azimuth_Original,Azimuth_Decimal,Distance,Reference_X,Reference_Y,X_Coordinate,Y_Coordinate");
    for r in &out.results {
        println!(
            "{},{},{},{},{},{},{},{}",
            r.row,
            r.azimuth_raw,
            r.azimuth_deg,
            r.distance,
            r.reference.x,
            r.reference.y,
            r.point.x,
            r.point.y
        );
    }
    for e in &out.errors {
        eprintln!("row {}: {}", e.row, e.message());
    }
    let closure = out.closure.expect("at least one accepted row");
    println!(
        "area={:.3} closure_distance={:.6} closes={}",
        out.area.unwrap_or(0.0),
        closure.distance,
        closure.closes
    );
}
