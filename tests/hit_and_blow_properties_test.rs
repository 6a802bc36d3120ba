//! Property-based tests for scoring, the hand space, and turn order.

use hit_and_blow::{
    Answer, Board, DIGITS, Guess, HAND_SPACE_SIZE, Hand, Side, all_hands, hand_by_seed,
};
use proptest::prelude::*;

// Strategy for any valid hand
fn hand_strategy() -> impl Strategy<Value = Hand> {
    (0..HAND_SPACE_SIZE).prop_map(|i| all_hands()[i])
}

// Strategy for any three-digit guess, repeats allowed
fn guess_strategy() -> impl Strategy<Value = Guess> {
    "[0-9]{3}".prop_map(|s| Guess::parse(&s).expect("regex yields three digits"))
}

proptest! {
    #[test]
    fn prop_score_is_bounded(hand in hand_strategy(), guess in guess_strategy()) {
        let answer = hand.score(&guess);
        prop_assert!(answer.hit() as usize <= DIGITS);
        prop_assert!(answer.blow() as usize <= DIGITS);
        prop_assert!((answer.hit() + answer.blow()) as usize <= DIGITS);
    }

    #[test]
    fn prop_hand_scores_all_hit_against_itself(hand in hand_strategy()) {
        let answer = hand.score(&Guess::from(hand));
        prop_assert_eq!(answer, Answer::from_wire(3, 0).unwrap());
        prop_assert!(answer.is_all_hit());
    }

    #[test]
    fn prop_all_hit_only_for_exact_guess(hand in hand_strategy(), guess in guess_strategy()) {
        let exact = guess.digits() == hand.digits();
        prop_assert_eq!(hand.score(&guess).is_all_hit(), exact);
    }

    #[test]
    fn prop_seed_selection_is_periodic(seed in any::<u64>()) {
        let wrapped = seed % HAND_SPACE_SIZE as u64;
        prop_assert_eq!(hand_by_seed(seed), hand_by_seed(wrapped));
        prop_assert_eq!(hand_by_seed(seed), all_hands()[wrapped as usize]);
    }

    #[test]
    fn prop_turn_parity(first_is_mine in any::<bool>(), rounds in 0usize..16) {
        let init = if first_is_mine { Side::Mine } else { Side::Opponent };
        let mut board = Board::new();
        board.start(Hand::parse("123").unwrap(), init).unwrap();

        for _ in 0..rounds {
            if board.is_my_turn() {
                board.commit_guess(Guess::parse("456").unwrap()).unwrap();
                board.receive_answer(Answer::from_wire(0, 0).unwrap()).unwrap();
            } else {
                board.receive_guess(Guess::parse("456").unwrap()).unwrap();
            }
        }

        let expected = if rounds % 2 == 0 { init } else { init.reverse() };
        prop_assert_eq!(board.turn(), expected);
        prop_assert_eq!(board.init_turn(), init);
    }

    #[test]
    fn prop_parse_guess_never_panics(text in ".{0,6}") {
        let _ = Guess::parse(&text);
    }
}
