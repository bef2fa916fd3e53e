use anyhow::Result;
use clap::Parser;
use pleco::{BitMove, Board, Player};
use std::io::{self, Write};
use tactician::board::{self, GameStatus};
use tactician::search::alphabeta::Searcher;

#[derive(Parser, Debug)]
#[command(version, about = "Play chess against a fixed-depth alpha-beta engine", long_about = None)]
struct Args {
    /// Search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,

    /// Moves (UCI) applied to the starting position before play begins
    #[arg(long, num_args = 0..)]
    moves: Vec<String>,

    /// Print search statistics after each engine move
    #[arg(long)]
    verbose: bool,
}

fn parse_color(color_str: &str) -> Result<Player> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Player::White),
        "b" | "black" => Ok(Player::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn get_human_move(board: &Board) -> Result<BitMove> {
    loop {
        print!("Enter your move (e.g., e2e4): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        match board::find_move(board, input) {
            Some(mv) => return Ok(mv),
            None => println!("Illegal move!"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let human_color = parse_color(&args.color)?;
    let mut board = match &args.fen {
        Some(fen) => board::from_fen(fen)?,
        None => board::startpos(),
    };
    for mv in &args.moves {
        board::apply_uci(&mut board, mv)?;
    }

    let mut searcher = Searcher::new();

    loop {
        match board::status(&board) {
            GameStatus::Checkmate => {
                let winner =
                    if board.turn() == Player::White { "Black" } else { "White" };
                println!("\nCheckmate! {} wins!", winner);
                break;
            }
            GameStatus::Stalemate => {
                println!("\nGame is a stalemate!");
                break;
            }
            GameStatus::Ongoing => {}
        }

        println!(
            "\n{}'s turn",
            if board.turn() == Player::White { "White" } else { "Black" }
        );
        println!("{}", board.pretty_string());

        if board.turn() == human_color {
            let mv = get_human_move(&board)?;
            board.apply_move(mv);
        } else {
            if args.verbose {
                println!("Thinking...");
            }
            let report = searcher.select_best_move(&mut board, args.depth);
            let Some(best) = report.best else {
                println!("No legal moves available!");
                break;
            };
            println!("Engine plays: {}", best);
            if args.verbose {
                println!(
                    "nodes: {}, elapsed: {:.2}s, NPS: {:.0}, cache hits: {}",
                    report.nodes,
                    report.elapsed.as_secs_f64(),
                    report.nodes_per_second(),
                    report.cache_hits
                );
            }
            board.apply_move(best);
        }
    }

    Ok(())
}
