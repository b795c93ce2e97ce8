//! Analyze command - Evaluate a position with the minimax search

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::parse_player_token,
        output::{format_number, print_kv, print_section},
    },
    search::{MinimaxSearch, SearchResult, SearchStats},
    tictactoe::{BoardState, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a board position")]
pub struct AnalyzeArgs {
    /// Board as 9 cells in row-major order, e.g. "X.O .X. ..O"
    pub board: String,

    /// Side to move (`x` or `o`); inferred from the piece counts if omitted
    #[arg(long)]
    pub to_move: Option<String>,

    /// Also run the unpruned search and compare results
    #[arg(long)]
    pub compare: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of analyzing one position
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub board: String,
    pub to_move: Player,
    pub outcome: Option<GameOutcome>,
    pub result: SearchResult,
    pub stats: SearchStats,
    pub exhaustive: Option<ExhaustiveComparison>,
}

/// Unpruned search run alongside the pruned one
#[derive(Debug, Clone, Serialize)]
pub struct ExhaustiveComparison {
    pub result: SearchResult,
    pub stats: SearchStats,
    pub matches: bool,
}

/// Search `board` for `to_move`, scoring from that player's side
pub fn analyze(board: &mut BoardState, to_move: Player, compare: bool) -> AnalysisReport {
    let mut search = MinimaxSearch::new(to_move);
    let result = search.best_move(board, to_move);

    let exhaustive = compare.then(|| {
        let mut full = MinimaxSearch::exhaustive(to_move);
        let full_result = full.best_move(board, to_move);
        ExhaustiveComparison {
            result: full_result,
            stats: full.stats(),
            matches: full_result == result,
        }
    });

    AnalysisReport {
        board: board.to_string().replace('\n', " "),
        to_move,
        outcome: GameOutcome::of(board),
        result,
        stats: search.stats(),
        exhaustive,
    }
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let mut board = BoardState::from_string(&args.board)
        .with_context(|| format!("could not parse board '{}'", args.board))?;
    let to_move = match &args.to_move {
        Some(token) => parse_player_token(token, "--to-move")?,
        None => board.inferred_to_move(),
    };

    let report = analyze(&mut board, to_move, args.compare);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Position");
    println!("{board}");
    print_kv("To move", &to_move.to_string());
    if let Some(outcome) = report.outcome {
        print_kv("Outcome", &format!("{outcome:?}"));
    }

    print_section("Search");
    print_kv(
        "Best move",
        &report
            .result
            .position
            .map_or_else(|| "none".to_string(), |p| p.to_string()),
    );
    print_kv("Score", &report.result.score.to_string());
    print_kv("Nodes", &format_number(report.stats.nodes));
    print_kv("Cutoffs", &format_number(report.stats.cutoffs));

    if let Some(full) = &report.exhaustive {
        print_section("Unpruned search");
        print_kv("Nodes", &format_number(full.stats.nodes));
        print_kv("Same result", if full.matches { "yes" } else { "NO" });
    }

    Ok(())
}
