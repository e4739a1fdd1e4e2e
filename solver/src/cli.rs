use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "waypoint-solver")]
#[command(about = "Grid route planner with interchangeable search strategies")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Pretty-print the JSON response
    #[arg(short, long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Route through the request's waypoints with one strategy
    Run {
        /// Path to the JSON request ("-" reads stdin)
        #[arg(short, long, value_name = "FILE")]
        request: PathBuf,

        /// Strategy to use: bfs, dfs or dijkstra (overrides the request's "algorithm")
        #[arg(short, long)]
        algorithm: Option<String>,
    },

    /// Route with every strategy and compare the results
    Compare {
        /// Path to the JSON request ("-" reads stdin)
        #[arg(short, long, value_name = "FILE")]
        request: PathBuf,
    },
}
