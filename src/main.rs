use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use crossterm::event::{Event, KeyCode, KeyEventKind};

use crate::analysis::inflow::max_inflow;
use crate::analysis::report::{busiest_pairs, top_municipalities};
use crate::analysis::resilience::most_affected_stations;
use crate::flow::cost::cost_augmented_max_flow;
use crate::flow::solver::max_flow;
use crate::network::network::RailNetwork;
use crate::scenario::basic::BasicNetwork;
use crate::scenario::random::RandomNetwork;
use crate::tui::app::App;
use crate::tui::draw::draw_app;

mod analysis;
mod flow;
mod loader;
mod network;
mod scenario;
mod tui;

#[derive(Parser)]
#[command(name = "railflow", about = "Rail network flow and capacity analysis")]
struct Cli {
    /// Station records file (name, district, municipality, township, line)
    #[arg(long, requires = "segments")]
    stations: Option<PathBuf>,

    /// Segment records file (stationA, stationB, capacity, service)
    #[arg(long, requires = "stations")]
    segments: Option<PathBuf>,

    /// Generate a seeded demo network instead of loading files
    #[arg(long, conflicts_with = "stations")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Maximum number of trains between two stations
    MaxFlow { from: String, to: String },
    /// Maximum number of trains that can arrive at a station at once
    Inflow { station: String },
    /// Maximum flow together with the cheapest best augmentations found
    CostFlow { from: String, to: String },
    /// Stations most affected by the failure of one segment
    Impact {
        a: String,
        b: String,
        #[arg(short, long, default_value_t = 5)]
        k: usize,
    },
    /// Station pairs that need the most trains end to end
    Busiest,
    /// Municipalities ranked by incident segment capacity
    Municipalities {
        #[arg(short, long, default_value_t = 5)]
        k: usize,
    },
    /// Interactive session
    Tui,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let network = match build_network(&cli) {
        Ok(network) => network,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, network) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn build_network(cli: &Cli) -> Result<RailNetwork, loader::loader::LoadError> {
    match (&cli.stations, &cli.segments, cli.seed) {
        (Some(stations), Some(segments), _) => loader::loader::load_network(stations, segments),
        (_, _, Some(seed)) => Ok(RandomNetwork::build(seed)),
        _ => Ok(BasicNetwork::build()),
    }
}

fn run(command: Command, mut network: RailNetwork) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::MaxFlow { from, to } => {
            let total = max_flow(&network, &from, &to)?;
            println!("{total} trains can run between {from} and {to}");
        }
        Command::Inflow { station } => {
            let total = max_inflow(&mut network, &station)?;
            println!("{total} trains can arrive at {station} simultaneously");
        }
        Command::CostFlow { from, to } => {
            let records = cost_augmented_max_flow(&network, &from, &to)?;
            println!("best augmentations between {from} and {to}:");
            for (flow, cost) in records {
                println!("  {flow} trains at cost {cost}");
            }
        }
        Command::Impact { a, b, k } => {
            let impacts = most_affected_stations(&mut network, &a, &b, k)?;
            println!("stations most affected by losing {a} / {b}:");
            for impact in impacts {
                println!(
                    "  {}: {} -> {} (-{})",
                    impact.station, impact.before, impact.after, impact.delta
                );
            }
        }
        Command::Busiest => {
            for (a, b, flow) in busiest_pairs(&network) {
                println!("{a} / {b}: {flow} trains");
            }
        }
        Command::Municipalities { k } => {
            for (municipality, capacity) in top_municipalities(&network, k) {
                println!("{municipality}: total incident capacity {capacity}");
            }
        }
        Command::Tui => run_tui(network)?,
    }
    Ok(())
}

fn run_tui(network: RailNetwork) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let mut app = App::new(network);

    while app.running {
        let _ = terminal.draw(|frame| draw_app(frame, &app));

        if crossterm::event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = crossterm::event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key.code);
                }
            }
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode) {
    if app.awaiting_input() {
        match code {
            KeyCode::Enter => app.submit(),
            KeyCode::Esc => app.cancel(),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Char(c) => app.push_char(c),
            _ => {}
        }
        return;
    }
    match code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char(c) => {
            if let Some(digit) = c.to_digit(10) {
                let index = digit as usize;
                if index >= 1 && index <= tui::app::Action::ALL.len() {
                    app.start(tui::app::Action::ALL[index - 1]);
                }
            }
        }
        _ => {}
    }
}
