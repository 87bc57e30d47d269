use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use canopy::visibility::{self, Report, Strategy};
use canopy::{Grid, Height};

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    Part1,
    Part2,
    Both,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid of digit rows; read from stdin when omitted
    input: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = Mode::Both)]
    mode: Mode,
    #[arg(short, long)]
    verbose: bool,
    /// Spread the per-cell scans across a thread pool
    #[arg(short, long)]
    parallel: bool,
}

fn load(args: &Args) -> anyhow::Result<Grid<Height>> {
    match &args.input {
        Some(path) => canopy::load_path(path),
        None => {
            let stdin = std::io::stdin();
            let handle = stdin.lock();
            Grid::from_reader(handle)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .init();

    let grid = load(&args)?;
    if !grid.is_square() {
        log::info!("grid is {}x{}, not square", grid.rows(), grid.cols());
    }
    if args.verbose {
        log::debug!(
            "\n{}",
            grid.render_with(|h| char::from_digit(u32::from(*h), 10).unwrap_or('?'))
        );
    }
    let strategy = if args.parallel {
        Strategy::Parallel
    } else {
        Strategy::Sequential
    };

    let start = std::time::Instant::now();
    match args.mode {
        Mode::Part1 => {
            let visible = visibility::count_visible(&grid, strategy);
            println!("{}", Report::format_part1(visible));
        }
        Mode::Part2 => {
            let best = visibility::max_scenic_score(&grid, strategy);
            println!("{}", Report::format_part2(best));
        }
        Mode::Both => {
            let report = visibility::analyze(&grid, strategy);
            println!("{}", report);
        }
    }
    log::debug!("finished in {:?}", start.elapsed());
    Ok(())
}
