//! Delivery planning demo.
//!
//! Generates a seeded random grid (or loads one from layout/traffic strings),
//! prints it, and plans every destination with one strategy or all of them.
//!
//! Usage:
//!   gridroute-demo --seed 7 --strategy astar2
//!   gridroute-demo --strategy all --config gen.json
//!   gridroute-demo --layout "1;3;1;1;0,2;0,0;" --traffic "0,0,0,1,2;0,1,0,2,2;"
//!
//! Set `RUST_LOG=debug` to see per-store attempts.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use gridroute_core::GridModel;
use gridroute_paths::{SearchConfig, Strategy};
use gridroute_plan::{DeliveryPlan, GenConfig, GridGen, PlanError, Planner};
use rand::RngExt;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the grid generator; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Strategy token (BFS, DFS, UCS, ASTAR1, ASTAR2, GREEDY1, GREEDY2, ID) or "all"
    #[arg(long, default_value = "all")]
    strategy: String,

    /// Layout string; requires --traffic and skips generation
    #[arg(long, requires = "traffic")]
    layout: Option<String>,

    /// Traffic string; requires --layout
    #[arg(long, requires = "layout")]
    traffic: Option<String>,

    /// JSON file with generator ranges
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Depth ceiling for iterative deepening
    #[arg(long, default_value_t = SearchConfig::default().max_depth)]
    max_depth: usize,

    /// Plan from this store only
    #[arg(long)]
    store: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let grid = load_grid(args)?;
    println!("{grid}");
    println!("layout:  {}", grid.encode_layout());
    println!("traffic: {}", grid.encode_traffic());
    println!();

    let config = SearchConfig {
        max_depth: args.max_depth,
    };

    if args.strategy.eq_ignore_ascii_case("all") {
        println!(
            "{:<20} {:>8} {:>8} {:>10}",
            "strategy", "reached", "cost", "expanded"
        );
        for strategy in Strategy::ALL {
            let plan = plan(&grid, strategy, config, args.store)?;
            let reached = plan.destinations.iter().filter(|d| d.is_success()).count();
            let cost = plan
                .total_cost()
                .map_or_else(|| "-".to_string(), |c| c.to_string());
            println!(
                "{:<20} {:>8} {:>8} {:>10}",
                strategy.to_string(),
                format!("{reached}/{}", plan.destinations.len()),
                cost,
                plan.total_expanded()
            );
        }
    } else {
        let strategy: Strategy = args.strategy.parse()?;
        let plan = plan(&grid, strategy, config, args.store)?;
        println!("{plan}");
    }
    Ok(())
}

fn load_grid(args: &Args) -> Result<GridModel, Box<dyn Error>> {
    if let (Some(layout), Some(traffic)) = (&args.layout, &args.traffic) {
        return Ok(GridModel::parse(layout, traffic)?);
    }

    let gen_config = match &args.config {
        Some(path) => serde_json::from_str::<GenConfig>(&fs::read_to_string(path)?)?,
        None => GenConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    println!("seed: {seed}");
    Ok(GridGen::seeded(gen_config, seed)?.generate()?)
}

fn plan(
    grid: &GridModel,
    strategy: Strategy,
    config: SearchConfig,
    store: Option<usize>,
) -> Result<DeliveryPlan, PlanError> {
    let planner = Planner::new(grid, strategy).with_config(config);
    match store {
        Some(i) => planner.plan_all_from(i),
        None => planner.plan_all(),
    }
}
