mod cli;
mod logging;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::Parser;
use colored::Colorize;
use eyre::{Result, WrapErr};
use log::{debug, info, warn};
use serde::Serialize;

use cli::{Args, Command};
use logging::Logger;
use waypoint_solver::request::{CompareResponse, RouteRequest, RouteResponse};
use waypoint_solver::{Comparison, Strategy, compare_all, compose};

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    match args.command {
        Command::Run { request, algorithm } => run(&request, algorithm.as_deref(), args.pretty),
        Command::Compare { request } => run_compare(&request, args.pretty),
    }
}

fn run(path: &Path, algorithm: Option<&str>, pretty: bool) -> Result<()> {
    let request = read_request(path)?;

    let strategy = match algorithm {
        Some(name) => Strategy::from_name(name)?,
        None => match request.strategy() {
            Some(strategy) => strategy?,
            None => eyre::bail!("no strategy given: pass --algorithm or set \"algorithm\" in the request"),
        },
    };

    let grid = request.grid()?;
    let points = request.waypoints(&grid)?;
    info!(
        "routing {} waypoints on {}x{} grid with {strategy}",
        points.len(),
        grid.rows(),
        grid.cols()
    );

    let route = compose(&strategy, &grid, &points)?;
    match route.cost {
        Some(cost) => info!(
            "found {} cells at cost {cost} ({} explored)",
            route.path_length(),
            route.nodes_explored()
        ),
        None => warn!("no route found ({} explored)", route.nodes_explored()),
    }

    print_json(&RouteResponse::from(route), pretty)
}

fn run_compare(path: &Path, pretty: bool) -> Result<()> {
    let request = read_request(path)?;
    if let Some(strategy) = request.algorithm.as_deref() {
        debug!("ignoring request algorithm '{strategy}' in compare mode");
    }

    let grid = request.grid()?;
    let points = request.waypoints(&grid)?;
    let comparison = compare_all(&grid, &points)?;

    print_summary(&comparison);
    print_json(&CompareResponse::from(&comparison), pretty)
}

fn read_request(path: &Path) -> Result<RouteRequest> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .wrap_err("failed to read request from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read request {}", path.display()))?
    };

    serde_json::from_str(&raw).wrap_err("malformed request")
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn print_summary(comparison: &Comparison) {
    info!("comparison results:");
    info!(
        "{:<10} {:>8} {:>10} {:>10}  {:>12}",
        "strategy", "cells", "explored", "cost", "plan"
    );
    info!("{:-<56}", "");

    for report in &comparison.reports {
        let cost = match report.route.cost {
            Some(cost) => format!("{cost:>10}").normal(),
            None => format!("{:>10}", "-").red(),
        };
        info!(
            "{:<10} {:>8} {:>10} {}  {:>12?}",
            report.strategy.name(),
            report.path_length(),
            report.nodes_explored(),
            cost,
            report.planning_time,
        );
    }

    if let Some(best) = comparison.best_by_cost() {
        info!(
            "cheapest: {} (cost {})",
            best.strategy.name().green().bold(),
            best.route.cost.unwrap_or_default()
        );
    }

    if let Some(leanest) = comparison.fewest_explored() {
        info!(
            "fewest explored: {} ({} cells)",
            leanest.strategy.name().green(),
            leanest.nodes_explored()
        );
    }
}
