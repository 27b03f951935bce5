use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pbn_core::{Point, Raster};
use pbn_palette::{LabeledRegion, Palette, label_regions};
use pbn_trace::{RegionSet, ScanOrder, TraceConfig, collect_regions};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pbn")]
#[command(about = "Trace paint-by-numbers regions out of a color sheet")]
struct Cli {
    /// Default log filter; `RUST_LOG` takes precedence.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trace every region and write regions.json + meta.json.
    #[command(name = "trace")]
    Trace(TraceArgs),
    /// Parse a palette file and print its entries.
    #[command(name = "palette")]
    Palette(PaletteArgs),
}

#[derive(Args, Debug, Clone)]
struct PaletteArgs {
    #[arg(long, required = true)]
    palette: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct TraceArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[command(flatten)]
    palette: PaletteArgs,
    #[arg(long, default_value = "out")]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = ScanOrderArg::Row)]
    scan_order: ScanOrderArg,
    /// Overwrite an existing regions.json.
    #[arg(long, short = 'f')]
    force: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ScanOrderArg {
    Row,
    Column,
}

impl From<ScanOrderArg> for ScanOrder {
    fn from(arg: ScanOrderArg) -> Self {
        match arg {
            ScanOrderArg::Row => ScanOrder::RowMajor,
            ScanOrderArg::Column => ScanOrder::ColumnMajor,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct RegionDto {
    id: usize,
    color: String,
    label: Option<String>,
    origin: [i32; 2],
    area: f64,
    perimeter: i64,
    /// Min and max vertex, inclusive.
    bounds: Option<[[i32; 2]; 2]>,
    vertices: Vec<[i32; 2]>,
}

#[derive(Debug, Clone, Serialize)]
struct ColorSummary {
    color: String,
    label: Option<String>,
    regions: usize,
}

#[derive(Debug, Clone, Serialize)]
struct RegionsDto {
    width: usize,
    height: usize,
    regions: Vec<RegionDto>,
}

#[derive(Debug, Clone, Serialize)]
struct MetaTrace {
    input: String,
    palette: String,
    scan_order: &'static str,
    palette_entries: usize,
    region_count: usize,
    vertex_count: usize,
    unlabeled: usize,
    colors: Vec<ColorSummary>,
    coordinates: &'static str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match cli.cmd {
        Command::Trace(args) => run_trace(args),
        Command::Palette(args) => run_palette(args),
    }
}

fn init_logging(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter '{default_filter}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("initializing logger: {e}"))
}

fn run_trace(args: TraceArgs) -> Result<()> {
    ensure_file_exists(&args.input, "input")?;
    let palette = load_palette(&args.palette.palette)?;

    let regions_path = args.out.join("regions.json");
    if regions_path.exists() && !args.force {
        bail!(
            "{} already exists; pass --force to overwrite.",
            regions_path.display()
        );
    }

    let mut raster = load_input_rgb(&args.input)?;
    let cfg = TraceConfig {
        scan_order: args.scan_order.into(),
    };
    let set = collect_regions(&mut raster, &cfg);
    let labeled = label_regions(&set, &palette);

    let unlabeled = labeled.iter().filter(|l| l.label.is_none()).count();
    tracing::info!(
        regions = set.len(),
        vertices = set.num_vertices(),
        unlabeled,
        "trace complete"
    );

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;

    write_json(
        regions_path,
        &RegionsDto {
            width: set.width,
            height: set.height,
            regions: labeled.iter().enumerate().map(region_dto).collect(),
        },
    )?;

    write_json(
        args.out.join("meta.json"),
        &MetaTrace {
            input: args.input.display().to_string(),
            palette: args.palette.palette.display().to_string(),
            scan_order: match cfg.scan_order {
                ScanOrder::RowMajor => "row",
                ScanOrder::ColumnMajor => "column",
            },
            palette_entries: palette.len(),
            region_count: set.len(),
            vertex_count: set.num_vertices(),
            unlabeled,
            colors: color_summaries(&set, &palette),
            coordinates: "pixel centers, x right, y down; vertices on divider pixels",
        },
    )?;

    Ok(())
}

fn run_palette(args: PaletteArgs) -> Result<()> {
    let palette = load_palette(&args.palette)?;

    println!("{:<8}  label", "color");
    for entry in palette.iter() {
        println!("{:<8}  {}", entry.color.to_string(), entry.label);
    }
    println!("{} entries", palette.len());

    Ok(())
}

fn region_dto((id, labeled): (usize, &LabeledRegion<'_>)) -> RegionDto {
    let region = labeled.region;
    RegionDto {
        id,
        color: region.color().to_string(),
        label: labeled.label.map(ToString::to_string),
        origin: point_xy(region.origin()),
        area: region.area(),
        perimeter: region.perimeter(),
        bounds: region.bounds().map(|(lo, hi)| [point_xy(lo), point_xy(hi)]),
        vertices: region.vertices().iter().copied().map(point_xy).collect(),
    }
}

fn color_summaries(set: &RegionSet, palette: &Palette) -> Vec<ColorSummary> {
    set.distinct_colors()
        .into_iter()
        .map(|color| ColorSummary {
            color: color.to_string(),
            label: palette.lookup(color).map(ToString::to_string),
            regions: set.iter_color(color).count(),
        })
        .collect()
}

fn point_xy(p: Point) -> [i32; 2] {
    [p.x, p.y]
}

fn load_palette(path: &Path) -> Result<Palette> {
    ensure_file_exists(path, "palette")?;
    let src = fs::read_to_string(path)
        .with_context(|| format!("reading palette {}", path.display()))?;
    Palette::parse(&src).with_context(|| format!("parsing palette {}", path.display()))
}

fn load_input_rgb(path: &Path) -> Result<Raster> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let rgb = dyn_img.to_rgb8();
    let (w, h) = rgb.dimensions();

    Raster::from_rgb_bytes(w as usize, h as usize, rgb.as_raw())
        .with_context(|| format!("constructing raster from {}", path.display()))
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pbn_core::{Color, Point};
    use pbn_palette::{Label, LabeledRegion, Palette};
    use pbn_trace::{Region, RegionSet, ScanOrder};

    use super::{Cli, Command, color_summaries, region_dto};

    #[test]
    fn trace_args_parse_with_defaults() {
        let cli = Cli::try_parse_from(["pbn", "trace", "--input", "a.png", "--palette", "p.txt"])
            .expect("valid args");

        assert_eq!(cli.log_level, "info");
        let Command::Trace(args) = cli.cmd else {
            panic!("expected trace subcommand");
        };
        assert_eq!(args.out.to_str(), Some("out"));
        assert!(!args.force);
        assert_eq!(ScanOrder::from(args.scan_order), ScanOrder::RowMajor);
    }

    #[test]
    fn trace_args_accept_column_order_and_short_force() {
        let cli = Cli::try_parse_from([
            "pbn",
            "--log-level",
            "debug",
            "trace",
            "--input",
            "a.png",
            "--palette",
            "p.txt",
            "--scan-order",
            "column",
            "-f",
        ])
        .expect("valid args");

        assert_eq!(cli.log_level, "debug");
        let Command::Trace(args) = cli.cmd else {
            panic!("expected trace subcommand");
        };
        assert!(args.force);
        assert_eq!(ScanOrder::from(args.scan_order), ScanOrder::ColumnMajor);
    }

    #[test]
    fn trace_requires_palette() {
        assert!(Cli::try_parse_from(["pbn", "trace", "--input", "a.png"]).is_err());
    }

    #[test]
    fn region_dto_keeps_vertex_order_and_label() {
        let region = Region::new(
            Color::new(0x12, 0xab, 0xff),
            Point::new(1, 1),
            vec![
                Point::new(0, 0),
                Point::new(2, 0),
                Point::new(2, 2),
                Point::new(0, 2),
            ],
        );
        let label = Label::Number(7);

        let dto = region_dto((3, &LabeledRegion {
            region: &region,
            label: Some(&label),
        }));
        assert_eq!(dto.id, 3);
        assert_eq!(dto.color, "#12abff");
        assert_eq!(dto.label.as_deref(), Some("7"));
        assert_eq!(dto.origin, [1, 1]);
        assert_eq!(dto.area, 4.0);
        assert_eq!(dto.perimeter, 8);
        assert_eq!(dto.bounds, Some([[0, 0], [2, 2]]));
        assert_eq!(dto.vertices, vec![[0, 0], [2, 0], [2, 2], [0, 2]]);

        let dto = region_dto((0, &LabeledRegion {
            region: &region,
            label: None,
        }));
        assert_eq!(dto.label, None);
    }

    #[test]
    fn color_summaries_count_regions_per_color() {
        let square = |color: Color, x: i32| {
            Region::new(
                color,
                Point::new(x + 1, 1),
                vec![
                    Point::new(x, 0),
                    Point::new(x + 2, 0),
                    Point::new(x + 2, 2),
                    Point::new(x, 2),
                ],
            )
        };
        let red = Color::new(255, 0, 0);
        let blue = Color::new(0, 0, 255);
        let set = RegionSet {
            width: 9,
            height: 3,
            regions: vec![square(blue, 0), square(red, 3), square(blue, 6)],
        };
        let palette = Palette::parse("ff0000 1").expect("valid palette");

        let summary = color_summaries(&set, &palette);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].color, "#0000ff");
        assert_eq!(summary[0].label, None);
        assert_eq!(summary[0].regions, 2);
        assert_eq!(summary[1].label.as_deref(), Some("1"));
        assert_eq!(summary[1].regions, 1);
    }
}
