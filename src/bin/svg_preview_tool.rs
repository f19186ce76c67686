//! Headless preview utility: renders the sankey plugin against bundled
//! sample rows and writes the resulting SVG document, so output can be
//! eyeballed without a live dashboard host.
//!
//! Usage: `svg_preview_tool [--flow] [OUTPUT_PATH]`
//! Without an output path the markup goes to stdout.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use sankey_vis::api::{Container, RenderDetails, RenderHost, RenderRequest};
use sankey_vis::core::{Cell, FieldDescriptor, QueryFields, QueryResponse, Row};
use sankey_vis::render::{Renderer, SvgRenderer};
use sankey_vis::{RenderConfig, SankeyVis, VisRegistry, Visualization};

const PREVIEW_WIDTH: u32 = 800;
const PREVIEW_HEIGHT: u32 = 400;

struct StderrHost {
    done: bool,
}

impl RenderHost for StderrHost {
    fn report_error(&mut self, title: &str, message: &str) {
        eprintln!("render error: {title}: {message}");
    }

    fn rendering_done(&mut self) {
        self.done = true;
    }
}

struct CliArgs {
    flow: bool,
    output: Option<PathBuf>,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut flow = false;
    let mut output = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--flow" => flow = true,
            "--help" | "-h" => {
                return Err("usage: svg_preview_tool [--flow] [OUTPUT_PATH]".to_owned());
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown flag `{other}`"));
            }
            other => {
                if output.replace(PathBuf::from(other)).is_some() {
                    return Err("at most one output path is accepted".to_owned());
                }
            }
        }
    }
    Ok(CliArgs { flow, output })
}

fn sample_rows() -> Vec<Row> {
    let table: [(f64, &str, f64); 7] = [
        (2000.0, "rock", 50.0),
        (2001.0, "rock", 150.0),
        (2002.0, "pop", 200.0),
        (2003.0, "pop", 130.0),
        (2004.0, "electronic", 240.0),
        (2005.0, "electronic", 380.0),
        (2006.0, "electronic", 420.0),
    ];
    table
        .into_iter()
        .map(|(year, genre, popularity)| {
            let mut row = Row::new();
            row.insert("tracks.year".to_owned(), Cell::number(year));
            row.insert("tracks.genre".to_owned(), Cell::text(genre));
            row.insert("tracks.popularity".to_owned(), Cell::number(popularity));
            row
        })
        .collect()
}

fn sample_query() -> QueryResponse {
    QueryResponse::new(QueryFields {
        dimension_like: vec![
            FieldDescriptor::new("tracks.year", "Year"),
            FieldDescriptor::new("tracks.genre", "Genre"),
        ],
        measure_like: vec![FieldDescriptor::new("tracks.popularity", "Popularity")],
        pivots: Vec::new(),
    })
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let mut registry = VisRegistry::new();
    registry.register(Box::new(SankeyVis::new().with_flow_rendering(args.flow)));
    let Some(vis) = registry.get_mut(SankeyVis::ID) else {
        eprintln!("sankey plugin is not registered");
        return ExitCode::FAILURE;
    };

    let container = Container::new(PREVIEW_WIDTH, PREVIEW_HEIGHT);
    let config = RenderConfig::default();
    let rows = sample_rows();
    let query = sample_query();
    let details = RenderDetails::default();

    vis.setup(container, &config);
    let mut host = StderrHost { done: false };
    vis.render(
        &RenderRequest {
            rows: &rows,
            container,
            config: &config,
            query: &query,
            details: &details,
        },
        &mut host,
    );
    if !host.done {
        eprintln!("render did not complete");
        return ExitCode::FAILURE;
    }

    let Some(scene) = vis.scene() else {
        eprintln!("no scene after render");
        return ExitCode::FAILURE;
    };
    let mut renderer = SvgRenderer::new();
    if let Err(err) = renderer.render(scene) {
        eprintln!("svg serialization failed: {err}");
        return ExitCode::FAILURE;
    }

    match args.output {
        Some(path) => {
            if let Err(err) = fs::write(&path, renderer.svg()) {
                eprintln!("failed to write {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        }
        None => println!("{}", renderer.svg()),
    }
    ExitCode::SUCCESS
}
