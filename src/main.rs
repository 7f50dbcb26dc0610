use std::env;
use std::io::{self, BufRead};
use std::process;

use sudoku_solver::Board;

fn main() {
    let line = match env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let stdin = io::stdin();
            let mut line = String::new();
            if let Err(err) = stdin.lock().read_line(&mut line) {
                eprintln!("{}", err);
                process::exit(1);
            }
            line
        }
    };

    let mut board = match Board::from_str_line(&line) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    if board.solve() {
        println!("{}", board);
    } else {
        eprintln!("no solution");
        process::exit(1);
    }
}
