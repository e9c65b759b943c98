use std::{collections::BTreeMap, error::Error, path::PathBuf, process::ExitCode};

use clap::Parser;
use itertools::Itertools;
use serde::Serialize;
use shortest_paths::{
    graphs::{example_graph, graph_factory::GraphFactory, Distance, WeightedGraph, UNREACHABLE},
    search::{
        dijkstra::ShortestPathEngine,
        observer::{SearchStep, StepRecorder},
        path::{reconstruct_path, validate_path, Path},
    },
    utility::init_tracing,
};
use tracing::{error, info};

/// Prints shortest distances and paths from a source vertex.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph as edge list (`tail head weight` per line) or `.json` file. The
    /// built-in six vertex graph is used if omitted.
    #[arg(short, long)]
    graph: Option<PathBuf>,
    /// Source vertex
    #[arg(short, long, default_value = "A")]
    source: String,
    /// Only search for the path to this vertex
    #[arg(short, long)]
    target: Option<String>,
    /// Print every step of the search
    #[arg(long)]
    steps: bool,
    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    source: &'a str,
    /// `null` for unreachable vertices.
    distances: BTreeMap<&'a str, Option<Distance>>,
    paths: BTreeMap<&'a str, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<&'a [SearchStep<String>]>,
}

#[derive(Serialize)]
struct PairReport<'a> {
    path: Option<&'a Path<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<&'a [SearchStep<String>]>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let graph = match &args.graph {
        Some(path) => GraphFactory::from_file(path)?,
        None => example_graph(),
    };
    info!(
        vertices = graph.number_of_vertices(),
        edges = graph.number_of_edges(),
        "graph ready"
    );

    let engine = ShortestPathEngine::new(&graph);
    if let Some(target) = &args.target {
        return single_pair(&graph, &engine, args, target);
    }

    let mut recorder = StepRecorder::<String>::new();
    let (distances, predecessors) = engine.compute_with_observer(&args.source, &mut recorder)?;

    let mut paths = BTreeMap::new();
    for vertex in graph.vertices() {
        paths.insert(
            vertex.as_str(),
            reconstruct_path(&predecessors, &args.source, vertex)?,
        );
    }

    if args.json {
        let report = Report {
            source: &args.source,
            distances: distances
                .iter()
                .map(|(vertex, &distance)| {
                    (vertex.as_str(), (distance != UNREACHABLE).then_some(distance))
                })
                .collect(),
            paths,
            steps: args.steps.then_some(recorder.steps.as_slice()),
        };
        serde_json::to_writer_pretty(std::io::stdout().lock(), &report)?;
        println!();
        return Ok(());
    }

    print_graph(&graph);
    println!("Shortest paths from '{}'", args.source);
    for (vertex, path) in &paths {
        let distance = distances[*vertex];
        if *vertex == args.source {
            println!("  {}: distance = 0 (source)", vertex);
        } else if distance == UNREACHABLE {
            println!("  {}: unreachable", vertex);
        } else {
            println!("  {}: distance = {}, path: {}", vertex, distance, path.join(" → "));
        }
    }

    if args.steps {
        print_steps(&recorder.steps);
    }

    Ok(())
}

fn single_pair(
    graph: &WeightedGraph<String>,
    engine: &ShortestPathEngine<String>,
    args: &Args,
    target: &String,
) -> Result<(), Box<dyn Error>> {
    let mut recorder = StepRecorder::<String>::new();
    let path = engine.shortest_path_with_observer(&args.source, target, &mut recorder)?;
    if let Some(path) = &path {
        validate_path(graph, path)?;
    }

    if args.json {
        let report = PairReport {
            path: path.as_ref(),
            steps: args.steps.then_some(recorder.steps.as_slice()),
        };
        serde_json::to_writer_pretty(std::io::stdout().lock(), &report)?;
        println!();
        return Ok(());
    }

    match path {
        Some(path) => println!(
            "{} → {}: distance = {}, path: {}",
            args.source,
            target,
            path.distance,
            path.vertices.join(" → ")
        ),
        None => println!("{} → {}: unreachable", args.source, target),
    }

    if args.steps {
        print_steps(&recorder.steps);
    }

    Ok(())
}

fn print_graph(graph: &WeightedGraph<String>) {
    println!("Graph:");
    for vertex in graph.vertices().iter().sorted() {
        let neighbors = graph
            .neighbors(vertex)
            .map(|(neighbor, weight)| format!("{}({})", neighbor, weight))
            .join(", ");
        println!("  {}: {}", vertex, neighbors);
    }
    println!();
}

fn print_steps(steps: &[SearchStep<String>]) {
    println!();
    println!("Search steps");

    let mut visited = Vec::new();
    let mut step = 0;
    for search_step in steps {
        match search_step {
            SearchStep::Settled { vertex, distance } => {
                step += 1;
                visited.push(vertex.as_str());
                visited.sort_unstable();
                println!(
                    "Step {}: settle '{}' (distance = {}), visited: [{}]",
                    step,
                    vertex,
                    distance,
                    visited.join(", ")
                );
            }
            SearchStep::Relaxed {
                head,
                previous,
                distance,
                ..
            } => {
                let previous = previous.map_or_else(|| "∞".to_string(), |d| d.to_string());
                println!("  {}: {} → {}", head, previous, distance);
            }
            SearchStep::Stale { vertex, distance } => {
                println!("  skip stale entry ({}, {})", distance, vertex);
            }
        }
    }
}
