use std::{error::Error, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;
use shortest_paths::{
    error::SearchError,
    graphs::{example_graph, graph_factory::GraphFactory, Distance, UNREACHABLE},
    search::dijkstra::ShortestPathEngine,
    utility::{get_progressbar, init_tracing},
};
use tracing::{error, info};

/// Runs one single source search per vertex in parallel and prints, for every
/// source, how many vertices it reaches and the largest finite distance.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph as edge list or `.json` file, the built-in graph if omitted
    #[arg(short, long)]
    graph: Option<PathBuf>,
}

struct SourceSummary {
    source: String,
    reachable: usize,
    eccentricity: Distance,
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
    let engine = ShortestPathEngine::new(&graph);

    let start = Instant::now();
    let bar = get_progressbar("searching", graph.number_of_vertices() as u64);
    let mut summaries = graph
        .vertices()
        .par_iter()
        .progress_with(bar)
        .map(|source| -> Result<SourceSummary, SearchError> {
            let (distances, _) = engine.compute(source)?;
            let finite = distances
                .values()
                .copied()
                .filter(|&distance| distance != UNREACHABLE);

            Ok(SourceSummary {
                source: source.clone(),
                reachable: finite.clone().count(),
                eccentricity: finite.max().unwrap_or(0),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        searches = summaries.len(),
        took = ?start.elapsed(),
        "all searches finished"
    );

    summaries.sort_by(|a, b| a.source.cmp(&b.source));
    for summary in summaries {
        println!(
            "{}: reaches {} vertices, eccentricity {}",
            summary.source, summary.reachable, summary.eccentricity
        );
    }

    Ok(())
}
