use std::collections::HashSet;
use std::process;

use log::info;
use text_io::read;

use scramble_solver::{Board, Lexicon, Result, Solver, BOARD_SIZE};

const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

struct Args {
    tiles: Vec<String>,
    dict: String,
    json: bool,
}

fn usage() -> ! {
    eprintln!("usage: scramble-solver [--dict <path>] [--json] [tile ...]");
    eprintln!(
        "supply all {} board tiles in row-major order, or none to be prompted",
        BOARD_SIZE * BOARD_SIZE
    );
    process::exit(2);
}

fn parse_args() -> Args {
    let mut tiles = Vec::new();
    let mut dict = DEFAULT_DICTIONARY.to_string();
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dict" => match args.next() {
                Some(path) => dict = path,
                None => usage(),
            },
            "--json" => json = true,
            "--help" | "-h" => usage(),
            _ => tiles.push(arg.to_lowercase()),
        }
    }
    Args { tiles, dict, json }
}

fn read_board_interactively() -> Vec<String> {
    println!(
        "Enter the {} board tiles, left to right, top to bottom:",
        BOARD_SIZE * BOARD_SIZE
    );
    let line: String = read!("{}\n");
    line.split_whitespace().map(|t| t.to_lowercase()).collect()
}

fn sorted(words: &HashSet<String>) -> Vec<&String> {
    let mut out: Vec<&String> = words.iter().collect();
    out.sort_unstable();
    out
}

fn run(args: Args) -> Result<()> {
    let tiles = if args.tiles.is_empty() {
        read_board_interactively()
    } else {
        args.tiles
    };
    let board = Board::new(tiles)?;

    let lexicon = Lexicon::from_file(&args.dict)?;
    info!("loaded {} words from {}", lexicon.len(), args.dict);

    let solver = Solver::new(board, lexicon);
    let words = solver.solve();

    if args.json {
        println!("{}", serde_json::to_string(&sorted(&words))?);
    } else {
        for word in sorted(&words) {
            println!("{}", word);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run(parse_args()) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
