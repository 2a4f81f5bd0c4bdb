//! Reads a maze, prints the cheapest Path through it.
//!
//! ```text
//! $ printf '3 3\n1 2 0\n2 0 1\n9 1 0\n0 0 2 1\n' | shortest_path
//! 0 0
//! 1 0
//! 2 0
//! 2 1
//! .
//! ```

use clap::{Parser, ValueEnum};
use env_logger::Env;
use grid_shortest_path::{
	input::{parse_input, InputError, Query},
	output::write_path,
	shortest_path_with_config, Reconstruction, SearchConfig, TieBreak,
};
use log::{error, info};

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Find the cheapest path through a maze of digits (0 = wall, 1-9 = cost)
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// file to read the maze from (stdin if omitted)
	input: Option<PathBuf>,

	/// rebuild the path from a predecessor map instead of carrying it along
	#[arg(long)]
	low_mem: bool,

	/// which of several equally cheap candidates is expanded first
	#[arg(long, value_enum, default_value_t = Order::Insertion)]
	tie_break: Order,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Order {
	Insertion,
	Coordinate,
}

impl From<Order> for TieBreak {
	fn from(order: Order) -> TieBreak {
		match order {
			Order::Insertion => TieBreak::Insertion,
			Order::Coordinate => TieBreak::Coordinate,
		}
	}
}

#[derive(Debug, Error)]
enum ReadError {
	#[error("{}: {source}", path.display())]
	Open { path: PathBuf, source: io::Error },
	#[error(transparent)]
	Input(#[from] InputError),
}

fn read_query(input: Option<&PathBuf>) -> Result<Query, ReadError> {
	let query = match input {
		Some(path) => {
			let file = File::open(path).map_err(|source| ReadError::Open {
				path: path.clone(),
				source,
			})?;
			parse_input(BufReader::new(file))?
		}
		None => parse_input(io::stdin().lock())?,
	};
	Ok(query)
}

fn main() -> ExitCode {
	env_logger::init_from_env(Env::default().filter_or("SHORTEST_PATH_LOG", "warn"));

	let args = Args::parse();

	let query = match read_query(args.input.as_ref()) {
		Ok(query) => query,
		Err(err) => {
			eprintln!("Error: {}", err);
			return ExitCode::FAILURE;
		}
	};
	info!(
		"read {}x{} maze, {:?} -> {:?}",
		query.grid.rows(),
		query.grid.columns(),
		query.start,
		query.end
	);

	let config = SearchConfig {
		reconstruction: if args.low_mem {
			Reconstruction::Predecessors
		} else {
			Reconstruction::CarriedPath
		},
		tie_break: args.tie_break.into(),
	};

	match shortest_path_with_config(&query.grid, query.start, query.end, config) {
		Ok(path) => {
			info!("path of {} steps, cost {}", path.len(), path.cost);
			if let Err(err) = write_path(io::stdout().lock(), &path) {
				error!("failed to write path: {}", err);
				return ExitCode::FAILURE;
			}
			ExitCode::SUCCESS
		}
		Err(err) => {
			info!("search failed: {}", err);
			eprintln!("Path wasn't found");
			ExitCode::FAILURE
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_file_keeps_io_error() {
		let path = PathBuf::from("/definitely/not/a/maze.txt");
		match read_query(Some(&path)) {
			Err(ReadError::Open { path: failed, source }) => {
				assert_eq!(failed, path);
				assert_eq!(source.kind(), io::ErrorKind::NotFound);
			}
			other => panic!("expected an open error, got {:?}", other),
		}
	}

	#[test]
	fn parse_errors_stay_typed() {
		let path = std::env::temp_dir().join(format!("shortest_path_{}.txt", std::process::id()));
		std::fs::write(&path, "3 3\n1 2 0\n").unwrap();
		let result = read_query(Some(&path));
		std::fs::remove_file(&path).unwrap();

		assert!(matches!(result, Err(ReadError::Input(InputError::MissingRows))));
	}
}
