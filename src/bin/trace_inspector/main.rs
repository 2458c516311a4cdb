mod repl_command;

use clap::Parser;
use console::style;
use dialoguer::{theme::ColorfulTheme, BasicHistory, Input};
use itertools::Itertools;
use repl_command::ReplCommand;
use searchtrace::search::{
    error::TraceError, BidirectionalIterator, RoadMap, RouteProblem, SearchSnapshot,
    SearchStrategy, Verbosity,
};
use std::{process::ExitCode, rc::Rc};

#[derive(Parser)]
#[command(version)]
/// Step forwards and backwards through a route search.
struct Cli {
    #[arg(help = "The start city", short = 'f', long = "from", id = "FROM")]
    from: String,
    #[arg(help = "The goal city", short = 't', long = "to", id = "TO")]
    to: String,
    #[arg(
        value_enum,
        help = "The search strategy to trace",
        short = 's',
        long = "strategy",
        id = "STRATEGY",
        default_value_t = SearchStrategy::Bfs
    )]
    strategy: SearchStrategy,
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
        default_value_t = Verbosity::Silent
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured log output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.verbosity.init_logging(cli.colour);

    let problem = match RoadMap::load(&cli.map)
        .and_then(|map| RouteProblem::new(Rc::new(map), &cli.from, &cli.to))
    {
        Ok(problem) => Rc::new(problem),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let route = problem.clone();
    let steps = BidirectionalIterator::new(cli.strategy.trace(problem));
    let map = route.map();

    println!(
        "Tracing {} from {} to {} on {}. Type `help` for commands.",
        cli.strategy,
        map.city_name(&cli.from),
        map.city_name(&cli.to),
        map.name()
    );
    run_repl(map, steps);
    ExitCode::SUCCESS
}

fn run_repl(map: &RoadMap, mut steps: BidirectionalIterator<String>) {
    let mut history = BasicHistory::new().max_entries(100).no_duplicates(true);

    #[allow(clippy::while_let_loop)]
    loop {
        if let Ok(cmd) = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter command")
            .history_with(&mut history)
            .interact_text()
        {
            let cmd = ReplCommand::parse(&cmd);
            match cmd {
                Some(ReplCommand::Exit) => break,
                Some(ReplCommand::Help) => {
                    println!("Commands:");
                    println!("  exit: exit the REPL");
                    println!("  help: show this help message");
                    println!("  next [n]: move <n> steps forwards, 1 by default");
                    println!("  prev [n]: move <n> steps backwards, 1 by default");
                    println!("  show: show the current step");
                    println!("  reset: go back to the first step");
                    println!(
                        "Legend: {} {} {}",
                        style("current").red(),
                        style("closed").green(),
                        style("fringe").yellow()
                    );
                }
                Some(ReplCommand::Next(count)) => {
                    for _ in 0..count {
                        match steps.next() {
                            Ok(_) => {}
                            Err(TraceError::NoMoreSteps) => {
                                println!("No more steps");
                                break;
                            }
                            Err(e) => {
                                println!("Search failed: {}", e);
                                break;
                            }
                        }
                    }
                    show(map, &steps);
                }
                Some(ReplCommand::Prev(count)) => {
                    for _ in 0..count {
                        if let Err(e) = steps.prev() {
                            println!("{}", e);
                            break;
                        }
                    }
                    show(map, &steps);
                }
                Some(ReplCommand::Show) => show(map, &steps),
                Some(ReplCommand::Reset) => {
                    steps.rewind();
                    show(map, &steps);
                }
                None => println!("Unknown command"),
            }
        } else {
            break;
        }
    }
}

fn show(map: &RoadMap, steps: &BidirectionalIterator<String>) {
    match (steps.position(), steps.current()) {
        (Some(position), Some(snapshot)) => print_snapshot(map, position, snapshot),
        _ => println!("No step taken yet"),
    }
}

fn print_snapshot(map: &RoadMap, position: usize, snapshot: &SearchSnapshot<String>) {
    println!(
        "{} {} ({})",
        style("Step").bold(),
        position + 1,
        snapshot.kind()
    );
    println!(
        "  generated: {}, visited: {}",
        snapshot.generated(),
        snapshot.visited()
    );
    match (snapshot.current(), snapshot.path()) {
        (Some(current), Some(path)) => {
            println!(
                "  current: {}",
                style(map.city_name(current.state())).red()
            );
            println!(
                "  path: {} (cost {})",
                path.iter().map(|node| map.city_name(node.state())).join(" -> "),
                snapshot.path_cost()
            );
        }
        _ => println!("  frontier exhausted, no path found"),
    }

    let closed = snapshot
        .closed()
        .iter()
        .sorted()
        .map(|id| map.city_name(id))
        .join(", ");
    println!("  closed: {}", style(closed).green());
    let fringe = snapshot
        .fringe()
        .iter()
        .map(|node| format!("{} ({})", map.city_name(node.state()), node.path_cost()))
        .join(", ");
    println!("  fringe: {}", style(fringe).yellow());
}
