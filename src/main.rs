use clap::{Parser, Subcommand};
use gridhmm::cli;
use log::error;

#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate one run on a maze and print the decoded paths
    Run {
        /// Maze text file
        #[clap(long)]
        maze: std::path::PathBuf,
        /// Moves of the robot as a string of n/e/s/w.
        /// If not specified, `--n-moves` random moves are used.
        #[clap(long)]
        moves: Option<String>,
        /// Number of random moves
        #[clap(long, default_value_t = 10)]
        n_moves: usize,
        /// Seed of the simulation
        #[clap(long, default_value_t = 0)]
        seed: u64,
        /// Probability that the sensor reads the true color.
        /// If not specified, it will use p=0.88.
        #[clap(long)]
        accuracy: Option<f64>,
        /// Print the report as JSON
        #[clap(long)]
        json: bool,
    },
    /// Measure the accuracy of the decoders on random runs
    Evaluate {
        /// Maze text file
        #[clap(long)]
        maze: std::path::PathBuf,
        /// Number of simulated runs
        #[clap(long)]
        n_trials: usize,
        /// Number of moves of each run
        #[clap(long)]
        n_moves: usize,
        /// Seed of the first run, run i uses seed + i
        #[clap(long, default_value_t = 0)]
        seed: u64,
        /// Probability that the sensor reads the true color
        #[clap(long)]
        accuracy: Option<f64>,
    },
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();
    // keep stdout a single JSON document
    if !matches!(opts.command, Commands::Run { json: true, .. }) {
        println!("# started_at={}", chrono::Local::now());
        println!("# n_threads={}", rayon::current_num_threads());
        println!("# opts={:?}", opts);
    }
    let result = match &opts.command {
        Commands::Run {
            maze,
            moves,
            n_moves,
            seed,
            accuracy,
            json,
        } => cli::run(maze, moves.as_deref(), *n_moves, *seed, *accuracy, *json),
        Commands::Evaluate {
            maze,
            n_trials,
            n_moves,
            seed,
            accuracy,
        } => cli::evaluate(maze, *n_trials, *n_moves, *seed, *accuracy),
    };
    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
