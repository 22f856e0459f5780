mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use polynest::cluster::{collect_borders, BorderRecord, ContainmentForest, NestCfg};
use polynest::geom::rand::{draw_nested_scene, ReplayToken, SceneCfg, VertexCount};
use polynest::geom::{check_topology, order_polygons, Polygon, PolygonId, RayMode};
use polynest::io::{parse_scene, write_borders, write_scene};
use provenance::Sidecar;
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "polynest")]
#[command(about = "Polygon nesting and border clustering")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Cluster a scene and print its border records
    Solve(SolveArgs),
    /// Write a random nested scene in the input format
    Gen(GenArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct SolveArgs {
    /// Scene file, or `-` for stdin
    #[arg(long, default_value = "-")]
    input: String,
    /// Write records here (plus a provenance sidecar) instead of stdout
    #[arg(long)]
    out: Option<String>,
    /// Emit JSON with records, parents, and depths
    #[arg(long)]
    json: bool,
    /// Reject crossing edges and polygons that stick out of their container
    #[arg(long)]
    strict: bool,
    /// Cast the containment ray along DX,DY instead of horizontally
    #[arg(long, value_parser = parse_dir)]
    ray_dir: Option<(i64, i64)>,
}

#[derive(Args, Clone, Debug)]
struct GenArgs {
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    #[arg(long)]
    out: String,
    #[arg(long, default_value_t = 3)]
    roots: usize,
    /// Nesting levels below the roots
    #[arg(long, default_value_t = 3)]
    depth: usize,
    /// Maximum direct children per polygon
    #[arg(long, default_value_t = 3)]
    children: usize,
    #[arg(long, default_value_t = 8)]
    vertices: usize,
}

#[derive(Serialize)]
struct SolveReport {
    count: usize,
    borders: Vec<Vec<usize>>,
    parents: Vec<Option<usize>>,
    depth: Vec<usize>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve(args) => solve(args),
        Action::Gen(args) => gen(args),
        Action::Report => report(),
    }
}

fn parse_dir(s: &str) -> Result<(i64, i64), String> {
    let (dx, dy) = s
        .split_once(',')
        .ok_or_else(|| format!("expected DX,DY, got {s:?}"))?;
    let dx: i64 = dx.trim().parse().map_err(|e| format!("bad DX: {e}"))?;
    let dy: i64 = dy.trim().parse().map_err(|e| format!("bad DY: {e}"))?;
    if dx == 0 && dy == 0 {
        return Err("ray direction must be non-zero".to_string());
    }
    Ok((dx, dy))
}

fn solve(args: SolveArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let rendered = render(&args, &text)?;
    match &args.out {
        Some(out) => {
            create_parent(out)?;
            std::fs::write(out, &rendered).with_context(|| format!("writing {out}"))?;
            let params = serde_json::json!({
                "json": args.json,
                "strict": args.strict,
                "ray_dir": args.ray_dir,
            });
            Sidecar::new("solve", out, params)
                .with_input(&args.input)
                .write()?;
        }
        None => std::io::stdout().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

/// Parse, cluster, and format one scene.
fn render(args: &SolveArgs, text: &str) -> Result<String> {
    let polygons = parse_scene(text).with_context(|| format!("parsing {}", args.input))?;
    if args.strict {
        check_topology(&polygons)?;
    }
    let cfg = NestCfg {
        ray: args
            .ray_dir
            .map(|(dx, dy)| RayMode::Directed { dx, dy })
            .unwrap_or_default(),
        verify_nesting: args.strict,
    };
    let n = polygons.len();
    let sorted = order_polygons(polygons);
    let records = collect_borders(&sorted, cfg)?;
    tracing::info!(
        input = args.input.as_str(),
        polygons = n,
        records = records.len(),
        "solve"
    );
    if args.json {
        let forest = ContainmentForest::build(&sorted, cfg)?;
        let report = solve_report(&records, &forest, &sorted);
        Ok(serde_json::to_string_pretty(&report)? + "\n")
    } else {
        let mut buf = Vec::new();
        write_borders(&records, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

fn solve_report(
    records: &[BorderRecord],
    forest: &ContainmentForest,
    sorted: &[Polygon],
) -> SolveReport {
    let depth = (0..sorted.len())
        .map(|k| forest.depth(PolygonId(k)).unwrap_or(0))
        .collect();
    SolveReport {
        count: records.len(),
        borders: records
            .iter()
            .map(|r| r.ids().map(|id| id.0).collect())
            .collect(),
        parents: forest.parents().iter().map(|p| p.map(|id| id.0)).collect(),
        depth,
    }
}

fn gen(args: GenArgs) -> Result<()> {
    let cfg = SceneCfg {
        roots: args.roots,
        max_depth: args.depth,
        max_children: args.children,
        vertex_count: VertexCount::Fixed(args.vertices),
        ..SceneCfg::default()
    };
    let tok = ReplayToken {
        seed: args.seed,
        index: args.index,
    };
    let scene = draw_nested_scene(cfg, tok)?;
    tracing::info!(
        seed = args.seed,
        index = args.index,
        polygons = scene.polygons.len(),
        out = args.out.as_str(),
        "gen"
    );
    create_parent(&args.out)?;
    let mut buf = Vec::new();
    write_scene(&scene.polygons, &mut buf)?;
    std::fs::write(&args.out, buf).with_context(|| format!("writing {}", args.out))?;
    let params = serde_json::json!({
        "seed": args.seed,
        "index": args.index,
        "roots": args.roots,
        "depth": args.depth,
        "children": args.children,
        "vertices": args.vertices,
    });
    Sidecar::new("gen", &args.out, params).write()?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": polynest::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {input}"))
    }
}

fn create_parent(out: &str) -> Result<()> {
    if let Some(parent) = Path::new(out).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
