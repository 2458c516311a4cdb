use clap::{Parser, Subcommand};
use itertools::Itertools;
use searchtrace::search::{
    error::{RoadMapError, SearchError},
    RoadMap, RouteProblem, SearchResult, SearchStrategy, Verbosity,
};
use serde::Serialize;
use std::{process::ExitCode, rc::Rc};
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Find routes between cities of a road map.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        help = "A built-in map (romania, australia) or the path of a map file",
        short = 'm',
        long = "map",
        id = "MAP",
        default_value = "romania"
    )]
    map: String,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a route with one strategy and print it.
    Solve {
        #[arg(help = "The start city", short = 'f', long = "from", id = "FROM")]
        from: String,
        #[arg(help = "The goal city", short = 't', long = "to", id = "TO")]
        to: String,
        #[arg(
            value_enum,
            help = "The search strategy to use",
            short = 's',
            long = "strategy",
            id = "STRATEGY",
            default_value_t = SearchStrategy::Bfs
        )]
        strategy: SearchStrategy,
        #[arg(help = "Print the result as JSON", long = "json")]
        json: bool,
    },
    /// Search for a route with every strategy and compare the effort.
    Compare {
        #[arg(help = "The start city", short = 'f', long = "from", id = "FROM")]
        from: String,
        #[arg(help = "The goal city", short = 't', long = "to", id = "TO")]
        to: String,
    },
}

#[derive(Debug, Error)]
enum RouterError {
    #[error(transparent)]
    Map(#[from] RoadMapError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("failed to serialise report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct SolveReport {
    map: String,
    from: String,
    to: String,
    strategy: String,
    solved: bool,
    generated_nodes: usize,
    visited_nodes: usize,
    expanded_nodes: usize,
    discarded_nodes: usize,
    path_cost: Option<f64>,
    path: Option<Vec<String>>,
    search_duration_secs: f64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.verbosity.init_logging(cli.colour);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), RouterError> {
    let map = Rc::new(RoadMap::load(&cli.map)?);
    match cli.command {
        Commands::Solve {
            from,
            to,
            strategy,
            json,
        } => solve(map, &from, &to, strategy, json),
        Commands::Compare { from, to } => compare(map, &from, &to),
    }
}

fn solve(
    map: Rc<RoadMap>,
    from: &str,
    to: &str,
    strategy: SearchStrategy,
    json: bool,
) -> Result<(), RouterError> {
    let problem = RouteProblem::new(map.clone(), from, to)?;
    info!(map = map.name(), from, to, %strategy, "searching");
    let (result, statistics) = strategy.search(&problem)?;

    if json {
        let solution = result.solution();
        let report = SolveReport {
            map: map.name().to_string(),
            from: from.to_string(),
            to: to.to_string(),
            strategy: strategy.to_string(),
            solved: result.is_success(),
            generated_nodes: statistics.generated_nodes(),
            visited_nodes: statistics.visited_nodes(),
            expanded_nodes: statistics.expanded_nodes(),
            discarded_nodes: statistics.discarded_nodes(),
            path_cost: solution.map(|solution| solution.path_cost().into_inner()),
            path: solution.map(|solution| solution.path_states()),
            search_duration_secs: statistics.search_duration().as_secs_f64(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Generated nodes: {}", statistics.generated_nodes());
    println!("Visited nodes: {}", statistics.visited_nodes());
    match result {
        SearchResult::Success(solution) => {
            println!("Path cost: {}", solution.path_cost());
            println!("Path: {}", solution);
            println!(
                "Cities: {}",
                solution
                    .path_states()
                    .iter()
                    .map(|id| map.city_name(id))
                    .join(" -> ")
            );
        }
        SearchResult::NoPathFound => println!("No path from {} to {}", from, to),
    }
    Ok(())
}

fn compare(map: Rc<RoadMap>, from: &str, to: &str) -> Result<(), RouterError> {
    let problem = RouteProblem::new(map, from, to)?;

    println!(
        "{:<34} {:>9} {:>8} {:>10} {:>7} {:>12}",
        "strategy", "generated", "visited", "path cost", "length", "time"
    );
    for strategy in SearchStrategy::iter() {
        let (result, statistics) = strategy.search(&problem)?;
        let duration = humantime::format_duration(statistics.search_duration());
        let (cost, length) = match result.solution() {
            Some(solution) => (
                solution.path_cost().to_string(),
                solution.path().len().to_string(),
            ),
            None => ("-".to_string(), "-".to_string()),
        };
        println!(
            "{:<34} {:>9} {:>8} {:>10} {:>7} {:>12}",
            strategy.to_string(),
            statistics.generated_nodes(),
            statistics.visited_nodes(),
            cost,
            length,
            duration.to_string()
        );
    }
    Ok(())
}
