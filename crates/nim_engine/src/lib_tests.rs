use super::*;
use nim_core::max_take;

#[test]
fn test_opening_pile_takes_three() {
    // Taking 3 from 7 leaves the opponent on a multiple of 4.
    let mut engine = NimEngine::new(Algorithm::AlphaBeta);
    let choice = engine.choose_move(7);
    assert_eq!(choice.take, 3);

    let mut engine = NimEngine::new(Algorithm::Minimax);
    assert_eq!(engine.choose_move(7).take, 3);
}

#[test]
fn test_opening_stats_show_pruning_savings() {
    let mut engine = NimEngine::new(Algorithm::AlphaBeta);
    let choice = engine.choose_move(7);

    let stats = choice.analysis.stats;
    assert_eq!(stats.minimax_nodes, 96);
    assert!(
        stats.alpha_beta_nodes < stats.minimax_nodes,
        "alpha-beta should visit fewer nodes at full depth"
    );
    assert!(stats.time_ms > 0.0);
}

#[test]
fn test_chosen_moves_are_always_legal() {
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        for stones in 1..=9u32 {
            let mut engine = NimEngine::new(algorithm);
            let take = engine.choose_move(stones).take;
            assert!(
                take >= 1 && take <= max_take(stones),
                "{} took {} from {}",
                algorithm,
                take,
                stones
            );
        }
    }
}

#[test]
fn test_minimax_plays_perfect_nim() {
    // On a winning pile the engine leaves a multiple of 4; on a losing
    // pile every move scores alike and the tie-break takes 1.
    for stones in 1..=7u32 {
        let mut engine = NimEngine::new(Algorithm::Minimax);
        let take = engine.choose_move(stones).take;
        let expected = if stones % 4 == 0 { 1 } else { stones % 4 };
        assert_eq!(take, expected, "wrong move from a pile of {}", stones);
    }
}

#[test]
fn test_losing_pile_falls_back_to_smallest_take() {
    let mut engine = NimEngine::new(Algorithm::AlphaBeta);
    assert_eq!(engine.choose_move(4).take, 1);
}

#[test]
fn test_analysis_tree_root_is_minimizing() {
    let mut engine = NimEngine::new(Algorithm::AlphaBeta);
    let choice = engine.choose_move(7);
    assert!(!choice.analysis.tree.is_maximizing);
    assert_eq!(choice.analysis.tree.stones, 7);
    assert_eq!(choice.analysis.rows.len(), 7);
}

#[test]
fn test_untimed_analysis_zeroes_estimates() {
    let mut engine = NimEngine::new(Algorithm::AlphaBeta);
    let analysis = engine.analyze(7, false);
    assert_eq!(analysis.stats.time_ms, 0.0);
    for row in &analysis.rows {
        assert_eq!(row.minimax_time_ms, 0.0);
        assert_eq!(row.alpha_beta_time_ms, 0.0);
    }
    assert!(analysis.tree.total_nodes() > 0);
}

#[test]
fn test_algorithm_can_be_switched() {
    let mut engine = NimEngine::new(Algorithm::AlphaBeta);
    assert_eq!(engine.algorithm(), Algorithm::AlphaBeta);
    engine.set_algorithm(Algorithm::Minimax);
    assert_eq!(engine.algorithm(), Algorithm::Minimax);

    let choice = engine.choose_move(7);
    assert_eq!(choice.analysis.algorithm, Algorithm::Minimax);
    assert_eq!(choice.analysis.tree.pruned_count(), 0);
}

#[test]
#[should_panic(expected = "empty pile")]
fn test_empty_pile_is_a_caller_bug() {
    NimEngine::new(Algorithm::AlphaBeta).choose_move(0);
}
