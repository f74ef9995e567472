//! Drives the selected strategies and prints solutions and timings.

use std::io::{self, BufRead, Write as _};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::bail;
use npuzzle_core::Board;
use npuzzle_search::{Ddfs, Iddfs, Kind, Strategy};

use crate::Args;
use crate::prefs::Prefs;

/// One strategy's result, kept for the closing summary.
struct Report {
    kind: Kind,
    condensed: Option<String>,
    cancelled: bool,
    elapsed: Duration,
}

/// Entry point behind `main`: board in, solutions and timings out.
pub fn run(args: Args) -> anyhow::Result<()> {
    let mut prefs = match &args.prefs {
        Some(path) => Prefs::load(path)?,
        None => Prefs::default(),
    };

    let board = acquire_board(&args, &prefs)?;
    if !board.is_solvable() {
        bail!("board {} cannot reach the solved position", board.id());
    }

    let kinds: Vec<Kind> = match args.algorithm {
        Some(kind) => vec![kind],
        None => Kind::ALL.to_vec(),
    };

    let mut reports = Vec::with_capacity(kinds.len());
    for &kind in &kinds {
        reports.push(run_one(kind, &board, &args));
    }
    print_summary(&reports);

    prefs.board = Some(board.id());
    prefs.algorithm = args.algorithm.map(|kind| kind.to_string());
    if let Some(path) = &args.prefs {
        prefs.save(path)?;
    }
    Ok(())
}

/// Pick the board to solve: scramble, argument, previous run, or prompt.
fn acquire_board(args: &Args, prefs: &Prefs) -> anyhow::Result<Board> {
    if let Some(n) = args.scramble {
        if n < 2 {
            bail!("scrambles need a board of at least 2x2");
        }
        let board = Board::scrambled(n, &mut rand::rng());
        println!("Scrambled board:\n{board}");
        return Ok(board);
    }
    if let Some(s) = &args.board {
        return Ok(s.parse::<Board>()?);
    }
    if let Some(s) = &prefs.board {
        if let Ok(board) = s.parse::<Board>() {
            println!("Reusing previous board {}", board.id());
            return Ok(board);
        }
    }
    prompt_for_board()
}

/// Ask on stdin until a valid board arrives. Bad input is re-collected,
/// never patched up.
fn prompt_for_board() -> anyhow::Result<Board> {
    let stdin = io::stdin();
    loop {
        print!(
            "Enter the board pieces separated by dashes from top-left to \
             bottom-right (leave a space for the blank piece): "
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("no board was entered");
        }
        match line.trim_end_matches(['\r', '\n']).parse::<Board>() {
            Ok(board) => return Ok(board),
            Err(err) => println!("{err}; please try again."),
        }
    }
}

/// A strategy instance configured from the command line.
fn build(kind: Kind, args: &Args) -> Arc<dyn Strategy> {
    match kind {
        Kind::Ddfs => Arc::new(Ddfs::with_bound(args.bound)),
        Kind::Iddfs => {
            let budget = args
                .budget_ms
                .map(Duration::from_millis)
                .unwrap_or(npuzzle_search::DEFAULT_BUDGET);
            Arc::new(Iddfs::with_schedule(
                npuzzle_search::DEFAULT_INITIAL_BOUND,
                npuzzle_search::DEFAULT_INCREMENT,
                budget,
            ))
        }
        _ => kind.strategy().into(),
    }
}

/// Run one strategy, printing its section and returning the summary line.
fn run_one(kind: Kind, board: &Board, args: &Args) -> Report {
    let strategy = build(kind, args);
    let cancel_flag = Arc::new(AtomicBool::new(false));

    // The deadline lives on a watchdog thread; the search itself never
    // spawns or blocks. Ordering matters: the flag is set before the
    // request so a search that returns cancelled sees it.
    if let Some(ms) = args.cancel_after_ms {
        let strategy = Arc::clone(&strategy);
        let cancel_flag = Arc::clone(&cancel_flag);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(ms));
            cancel_flag.store(true, Ordering::Relaxed);
            strategy.request_termination();
        });
    }

    println!("{kind} search:");
    let start = Instant::now();
    let outcome = strategy.search(board.clone());
    let elapsed = start.elapsed();

    let cancelled = !outcome.found() && cancel_flag.load(Ordering::Relaxed);
    if outcome.found() {
        println!("{}", outcome.full_path());
        println!("\n{kind} search took {}ms to run.", elapsed.as_millis());
        println!("Solution:\n\t{}\n", outcome.condensed_path());
    } else if cancelled {
        println!("\tsearch cancelled after {}ms\n", elapsed.as_millis());
    } else {
        println!("\tno solution found ({}ms)\n", elapsed.as_millis());
    }

    Report {
        kind,
        condensed: outcome.found().then(|| outcome.condensed_path()),
        cancelled,
        elapsed,
    }
}

fn print_summary(reports: &[Report]) {
    println!("Solutions:");
    for report in reports {
        let line = match (&report.condensed, report.cancelled) {
            (Some(moves), _) => moves.as_str(),
            (None, true) => "cancelled",
            (None, false) => "no solution found",
        };
        println!("\t{}:\n\t\t{}", report.kind, line);
    }

    println!("\n---------------------------\n");
    println!("Execution times:");
    for report in reports {
        println!("\t{}: {}ms", report.kind, report.elapsed.as_millis());
    }
}
