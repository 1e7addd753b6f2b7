//! `timetable` CLI: lay out lesson and exam listings from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Grid, merges and conflicts as JSON (stdin → stdout)
//! timetable layout < lessons.json
//!
//! # Only some courses, custom hours
//! timetable layout -i lessons.json --course Algebra --course Physics --start-hour 9 --end-hour 18
//!
//! # Quick look in the terminal; conflicts go to stderr
//! timetable preview -i lessons.json
//!
//! # Styled sheet for an exporter
//! timetable sheet -i lessons.json -o sheet.json
//! timetable sheet --exams -i exams.json
//!
//! # Date-sorted exam table
//! timetable exams -i exams.json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use schedule_grid::preview::{preview, render_text};
use schedule_grid::{
    exam_table, generate_schedule, ExamInput, ExamTable, GridConfig, Schedule, ScheduleInput,
    Sheet,
};
use serde::Serialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "timetable",
    version,
    about = "Lay out lessons and exams on a time/day grid"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out lessons and print grid, merges, conflicts and classrooms as JSON
    Layout {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        grid: GridArgs,
    },
    /// Print a condensed text preview of the lesson grid
    Preview {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        grid: GridArgs,
    },
    /// Print the styled export sheet as JSON
    Sheet {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        grid: GridArgs,
        /// Treat the input as an exam listing instead of lessons
        #[arg(long, conflicts_with_all = ["start_hour", "end_hour", "days", "keep_end_of_week"])]
        exams: bool,
    },
    /// Print the date-sorted exam table as JSON
    Exams {
        #[command(flatten)]
        io: IoArgs,
    },
}

#[derive(Args)]
struct IoArgs {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Only include this course (repeatable; all courses when omitted)
    #[arg(long = "course")]
    courses: Vec<String>,
}

impl IoArgs {
    fn courses(&self) -> Vec<&str> {
        self.courses.iter().map(String::as_str).collect()
    }
}

/// Overrides for the grid configuration carried by the input document.
#[derive(Args)]
struct GridArgs {
    /// First hour row of the grid
    #[arg(long)]
    start_hour: Option<u32>,
    /// Hour after the last row of the grid
    #[arg(long)]
    end_hour: Option<u32>,
    /// Comma-separated day column names; weekday numbers map onto them in order
    #[arg(long)]
    days: Option<String>,
    /// Keep the end-of-week column even when it has no lessons
    #[arg(long)]
    keep_end_of_week: bool,
}

impl GridArgs {
    fn apply(&self, config: &mut GridConfig) {
        if let Some(hour) = self.start_hour {
            config.start_hour = hour;
        }
        if let Some(hour) = self.end_hour {
            config.end_hour = hour;
        }
        if let Some(days) = &self.days {
            config.day_names = days
                .split(',')
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect();
            config.weekday_names.clear();
        }
        if self.keep_end_of_week {
            config.end_of_week_day = None;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Layout { io, grid } => {
            let schedule = load_schedule(&io, &grid)?;
            write_json(io.output.as_deref(), &schedule)?;
        }
        Commands::Preview { io, grid } => {
            let schedule = load_schedule(&io, &grid)?;
            for conflict in &schedule.layout.conflicts {
                eprintln!("warning: {}", conflict);
            }
            let text = render_text(&preview(&schedule.layout.grid));
            write_output(io.output.as_deref(), &text)?;
        }
        Commands::Sheet { io, grid, exams } => {
            let sheet = if exams {
                Sheet::from_exams(&load_exams(&io)?)
            } else {
                Sheet::from_schedule(&load_schedule(&io, &grid)?)
            };
            write_json(io.output.as_deref(), &sheet)?;
        }
        Commands::Exams { io } => {
            let table = load_exams(&io)?;
            write_json(io.output.as_deref(), &table)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    // Fails only when a logger is already installed.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn load_schedule(io: &IoArgs, grid: &GridArgs) -> Result<Schedule> {
    let json = read_input(io.input.as_deref())?;
    let mut input = ScheduleInput::from_json(&json).context("Failed to parse lesson input")?;
    grid.apply(&mut input.config);
    let schedule =
        generate_schedule(&input, &io.courses()).context("Failed to lay out the schedule")?;
    log::info!(
        "laid out {} rows x {} columns with {} conflicts",
        schedule.layout.grid.height(),
        schedule.layout.grid.width(),
        schedule.layout.conflicts.len()
    );
    Ok(schedule)
}

fn load_exams(io: &IoArgs) -> Result<ExamTable> {
    let json = read_input(io.input.as_deref())?;
    let input = ExamInput::from_json(&json).context("Failed to parse exam input")?;
    Ok(exam_table(&input, &io.courses()))
}

fn write_json<T: Serialize>(path: Option<&str>, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    json.push('\n');
    write_output(path, &json)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
