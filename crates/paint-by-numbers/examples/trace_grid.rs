//! Example: trace a synthetic sheet of colored cells.
//!
//! Builds a `cols x rows` grid of rectangular cells separated by one-pixel
//! black dividers, cycling through a small built-in palette, then traces and
//! labels every cell. One cell color is deliberately left out of the palette
//! to show how unlabeled regions are reported.
//!
//! Run from the workspace root:
//!   cargo run -p paint-by-numbers --example trace_grid -- --help
//!   cargo run -p paint-by-numbers --example trace_grid -- --save sheet.png

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use paint_by_numbers::{
    Color, Palette, Point, Raster, ScanOrder, TraceConfig, collect_regions, label_regions,
};
use serde::Serialize;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Trace a synthetic grid of paint-by-numbers cells")]
struct Args {
    #[arg(long, default_value_t = 4)]
    cols: usize,

    #[arg(long, default_value_t = 3)]
    rows: usize,

    /// Interior size of each cell in pixels
    #[arg(long, default_value_t = 5)]
    cell: usize,

    /// Scan column by column instead of row by row
    #[arg(long)]
    column_major: bool,

    /// Also write the generated sheet as an image
    #[arg(long)]
    save: Option<String>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct CellDto {
    color: String,
    label: Option<String>,
    vertices: usize,
    area: f64,
}

#[derive(Serialize)]
struct Summary {
    width: usize,
    height: usize,
    elapsed_ms: f64,
    cells: Vec<CellDto>,
}

const PALETTE: &str = "\
e63946 1
f1faee 2
a8dadc 3
457b9d sea
";

const COLORS: [Color; 5] = [
    Color::new(0xe6, 0x39, 0x46),
    Color::new(0xf1, 0xfa, 0xee),
    Color::new(0xa8, 0xda, 0xdc),
    Color::new(0x45, 0x7b, 0x9d),
    // not in the palette
    Color::new(0x1d, 0x35, 0x57),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let palette = Palette::parse(PALETTE).context("parsing built-in palette")?;
    let mut raster = build_sheet(args.cols, args.rows, args.cell)?;

    if let Some(path) = &args.save {
        save_sheet(&raster, path)?;
    }

    let cfg = TraceConfig {
        scan_order: if args.column_major {
            ScanOrder::ColumnMajor
        } else {
            ScanOrder::RowMajor
        },
    };

    let t0 = Instant::now();
    let set = collect_regions(&mut raster, &cfg);
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    let cells = label_regions(&set, &palette)
        .into_iter()
        .map(|l| CellDto {
            color: l.region.color().to_string(),
            label: l.label.map(ToString::to_string),
            vertices: l.region.len(),
            area: l.region.area(),
        })
        .collect();

    let summary = Summary {
        width: set.width,
        height: set.height,
        elapsed_ms,
        cells,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn build_sheet(cols: usize, rows: usize, cell: usize) -> Result<Raster> {
    let pitch = cell + 1;
    let width = cols * pitch + 1;
    let height = rows * pitch + 1;
    let mut raster = Raster::new_fill(width, height, Color::BLACK);

    for r in 0..rows {
        for c in 0..cols {
            let color = COLORS[(r * cols + c) % COLORS.len()];
            for y in 0..cell {
                for x in 0..cell {
                    let p = Point::new((c * pitch + 1 + x) as i32, (r * pitch + 1 + y) as i32);
                    raster.set_color(p, color)?;
                }
            }
        }
    }

    Ok(raster)
}

fn save_sheet(raster: &Raster, path: &str) -> Result<()> {
    let mut img = image::RgbImage::new(raster.width() as u32, raster.height() as u32);
    for (x, y, px) in img.enumerate_pixels_mut() {
        let c = raster.get(Point::new(x as i32, y as i32)).color;
        *px = image::Rgb([c.r, c.g, c.b]);
    }
    img.save(path).with_context(|| format!("saving sheet to {path}"))
}
