// Algoscope: step-through terminal visualizer for classic algorithms

mod datagen;
mod model;
mod playback;
mod project;
mod runners;
mod step;
mod ui;

use std::io;
use std::str::FromStr;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use playback::PlaybackController;
use runners::{AlgorithmId, Family, RunInput};
use ui::App;

struct Options {
    algorithm: AlgorithmId,
    size: usize,
    seed: u64,
    values: Option<Vec<i32>>,
    target: Option<i32>,
    nodes: usize,
    edges: usize,
    start: Option<String>,
    end: Option<String>,
    text: Option<String>,
    pattern: Option<String>,
    speed: u8,
}

fn usage(program_name: &str) {
    eprintln!("Usage: {} <algorithm> [options]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --size N        array length for sorting (default 20)");
    eprintln!("  --values a,b,c  explicit array, overrides --size/--seed");
    eprintln!("  --target N      value to search for (default: an element of the array)");
    eprintln!("  --nodes N       graph node count (default 8)");
    eprintln!("  --edges N       graph edge count (default 12)");
    eprintln!("  --start ID      start node (default: first node)");
    eprintln!("  --end ID        end node for pathfinding (default: last node)");
    eprintln!("  --text S        search text for string matching");
    eprintln!("  --pattern S     pattern for string matching");
    eprintln!("  --seed N        RNG seed for generated inputs (default 42)");
    eprintln!("  --speed N       playback speed 1-100 (default 50)");
    eprintln!("  --list          list the available algorithms and exit");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} quick-sort --size 30", program_name);
    eprintln!("  {} kruskal --nodes 10 --edges 16 --seed 7", program_name);
    eprintln!("  {} kmp --text ABABDABACDABABCABAB --pattern ABABC", program_name);
}

fn list_algorithms() {
    for family in [
        Family::Sorting,
        Family::Searching,
        Family::Mst,
        Family::Pathfinding,
        Family::Traversal,
        Family::Matching,
    ] {
        let names: Vec<&str> = AlgorithmId::ALL
            .iter()
            .filter(|id| id.family() == family)
            .map(|id| id.name())
            .collect();
        println!("{:?}: {}", family, names.join(", "));
    }
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let algorithm = AlgorithmId::from_str(&args[0]).map_err(|e| e.to_string())?;
    let mut options = Options {
        algorithm,
        size: 20,
        seed: 42,
        values: None,
        target: None,
        nodes: 8,
        edges: 12,
        start: None,
        end: None,
        text: None,
        pattern: None,
        speed: 50,
    };

    let mut iter = args[1..].iter();
    while let Some(flag) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} needs a value", name))
        };
        match flag.as_str() {
            "--size" => {
                options.size = value("--size")?
                    .parse()
                    .map_err(|_| "--size needs a non-negative integer".to_string())?;
            }
            "--seed" => {
                options.seed = value("--seed")?
                    .parse()
                    .map_err(|_| "--seed needs a non-negative integer".to_string())?;
            }
            "--values" => {
                let raw = value("--values")?;
                let values: Result<Vec<i32>, _> =
                    raw.split(',').map(|v| v.trim().parse()).collect();
                options.values =
                    Some(values.map_err(|_| "--values needs comma-separated integers".to_string())?);
            }
            "--target" => {
                options.target = Some(
                    value("--target")?
                        .parse()
                        .map_err(|_| "--target needs an integer".to_string())?,
                );
            }
            "--nodes" => {
                options.nodes = value("--nodes")?
                    .parse()
                    .map_err(|_| "--nodes needs a non-negative integer".to_string())?;
            }
            "--edges" => {
                options.edges = value("--edges")?
                    .parse()
                    .map_err(|_| "--edges needs a non-negative integer".to_string())?;
            }
            "--start" => options.start = Some(value("--start")?),
            "--end" => options.end = Some(value("--end")?),
            "--text" => options.text = Some(value("--text")?),
            "--pattern" => options.pattern = Some(value("--pattern")?),
            "--speed" => {
                options.speed = value("--speed")?
                    .parse()
                    .map_err(|_| "--speed needs an integer between 1 and 100".to_string())?;
            }
            other => return Err(format!("unknown option '{}'", other)),
        }
    }
    Ok(options)
}

fn build_input(options: &Options) -> RunInput {
    match options.algorithm.family() {
        Family::Sorting => {
            let values = match &options.values {
                Some(values) => values.clone(),
                None => datagen::random_array(options.size, options.seed),
            };
            RunInput::Array(values)
        }
        Family::Searching => {
            let values = match &options.values {
                Some(values) => values.clone(),
                None => datagen::random_array(options.size, options.seed),
            };
            // Without --target, search for a value that is actually present.
            let target = options
                .target
                .or_else(|| values.get(values.len() / 2).copied())
                .unwrap_or(0);
            RunInput::Search { values, target }
        }
        Family::Mst | Family::Pathfinding | Family::Traversal => RunInput::Graph {
            graph: datagen::random_graph(options.nodes, options.edges, options.seed),
            start: options.start.clone(),
            end: options.end.clone(),
        },
        Family::Matching => RunInput::Text {
            text: options
                .text
                .clone()
                .unwrap_or_else(|| datagen::DEFAULT_TEXT.to_string()),
            pattern: options
                .pattern
                .clone()
                .unwrap_or_else(|| datagen::DEFAULT_PATTERN.to_string()),
        },
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("algoscope");

    if args.iter().any(|a| a == "--list") {
        list_algorithms();
        return Ok(());
    }
    if args.len() < 2 {
        eprintln!("Error: No algorithm given");
        eprintln!();
        usage(program_name);
        std::process::exit(1);
    }

    let options = match parse_options(&args[1..]) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            usage(program_name);
            std::process::exit(1);
        }
    };

    let input = build_input(&options);
    eprintln!("Running {}...", options.algorithm.name());
    let steps = match runners::run(options.algorithm, &input) {
        Ok(steps) => steps,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    eprintln!("Recorded {} steps.", steps.len());

    let mut controller = PlaybackController::new();
    controller.set_speed(options.speed);
    controller.load(steps);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(options.algorithm, input, controller);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
