//! Integration test pruning minimax AI with TTT
mod common;

use xoxo_search::{
    core::{run_game, Board, GameEndStatus, PlayerMark},
    game::tictactoe::{TTTAddr, TTTBoard},
    player::{ABAi, MinMaxAi, RandomAi},
    search::{alpha_beta_root, minimax, MoveOrder, OrderPreset, SearchStats},
};

const MARKS: [PlayerMark; 2] = [PlayerMark::Cross, PlayerMark::Naught];

#[test]
fn alpha_beta_agrees_with_minimax_on_every_reachable_board() {
    let states = common::reachable_states();
    for order in [OrderPreset::Linear, OrderPreset::CenterCornersDiagonal].map(MoveOrder::from) {
        for b in states.iter().filter(|b| !b.game_is_over()) {
            for cpu in MARKS {
                let to_move = b.current_player();
                let mut stats = SearchStats::default();
                let reference = minimax(b, cpu, to_move, &order, &mut stats);
                let pruned = alpha_beta_root(b, cpu, to_move, &order, &mut stats);
                assert_eq!(reference, pruned, "cpu {cpu} order {order}\n{b}");
                assert!(reference.best_move.is_some());
            }
        }
    }
}

#[test]
fn perfect_play_from_the_empty_board_is_a_draw() {
    let b = TTTBoard::new();
    for cpu in MARKS {
        let mut stats = SearchStats::default();
        let res = alpha_beta_root(&b, cpu, PlayerMark::Cross, &MoveOrder::default(), &mut stats);
        assert_eq!(res.score, 0);
    }
    let mut stats = SearchStats::default();
    let res = minimax(&b, PlayerMark::Cross, PlayerMark::Cross, &MoveOrder::default(), &mut stats);
    assert_eq!(res.score, 0);
    // the center comes first in the default order and draws like every other opening
    assert_eq!(res.best_move, Some(TTTAddr(4)));
}

#[test]
fn minimax_visits_the_whole_game_tree() {
    let mut stats = SearchStats::default();
    minimax(
        &TTTBoard::new(),
        PlayerMark::Cross,
        PlayerMark::Cross,
        &MoveOrder::default(),
        &mut stats,
    );
    // 549946 nodes, 255168 of them finished games
    assert_eq!(stats.evaluated, 549_946);
    assert_eq!(stats.expanded, 549_946 - 255_168);
    assert_eq!(stats.cutoffs, 0);
}

#[test]
fn every_order_prunes_to_the_same_decision() {
    let b = TTTBoard::new();
    for preset in [
        OrderPreset::Linear,
        OrderPreset::CenterFirst,
        OrderPreset::CenterCorners,
        OrderPreset::CenterCornersDiagonal,
    ] {
        let order = MoveOrder::from(preset);
        let mut full = SearchStats::default();
        let mut pruned = SearchStats::default();
        let reference = minimax(&b, PlayerMark::Cross, PlayerMark::Cross, &order, &mut full);
        let res = alpha_beta_root(&b, PlayerMark::Cross, PlayerMark::Cross, &order, &mut pruned);
        assert_eq!(res, reference, "{preset:?}");
        assert_eq!(res.best_move, Some(TTTAddr(order.cells()[0])), "{preset:?}");
        assert!(pruned.evaluated < full.evaluated, "{preset:?}");
    }
}

#[test]
fn can_find_winning_move() {
    let b: TTTBoard = "   xx o o".parse().unwrap();
    let mut ai = ABAi::new(PlayerMark::Cross, MoveOrder::default());
    let (res, _) = ai.analyse(&b);
    assert_eq!(res.best_move, Some(TTTAddr(5)))
}

#[test]
fn can_block_winning_move() {
    let b: TTTBoard = "xx  o  ox".parse().unwrap();
    let mut ai = ABAi::new(PlayerMark::Naught, MoveOrder::default());
    let (res, _) = ai.analyse(&b);
    assert_eq!(res.best_move, Some(TTTAddr(2)))
}

#[test]
fn alpha_beta_never_loses_to_random() {
    for seed in 0..20 {
        let result = run_game::<TTTBoard>(
            Box::new(ABAi::new(PlayerMark::Cross, MoveOrder::default())),
            Box::new(RandomAi::new(PlayerMark::Naught, Some(seed))),
        );
        assert_ne!(result, GameEndStatus::Won(PlayerMark::Naught), "seed {seed}");
        let result = run_game::<TTTBoard>(
            Box::new(RandomAi::new(PlayerMark::Cross, Some(seed))),
            Box::new(ABAi::new(PlayerMark::Naught, MoveOrder::default())),
        );
        assert_ne!(result, GameEndStatus::Won(PlayerMark::Cross), "seed {seed}");
    }
}

#[test]
fn perfect_players_draw() {
    let result = run_game::<TTTBoard>(
        Box::new(MinMaxAi::new(PlayerMark::Cross, MoveOrder::default())),
        Box::new(ABAi::new(PlayerMark::Naught, MoveOrder::from(OrderPreset::Linear))),
    );
    assert_eq!(result, GameEndStatus::Draw);
}
