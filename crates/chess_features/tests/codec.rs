//! Board codec laws over positions reached by random play

use chess_features::api::play;
use chess_features::fen::{decode, encode};
use chess_features::move_gen::legal_moves;
use chess_features::Position;
use proptest::prelude::*;

fn random_game(choices: &[usize]) -> Position {
    let mut position = Position::starting();
    for &choice in choices {
        let moves = legal_moves(&position);
        if moves.is_empty() {
            break;
        }
        position = play(&position, &moves[choice % moves.len()]);
    }
    position
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_encode_decode_round_trip(choices in prop::collection::vec(any::<usize>(), 0..60)) {
        let position = random_game(&choices);
        let text = encode(&position);
        let decoded = decode(&text).unwrap();
        prop_assert_eq!(&decoded, &position);
        prop_assert_eq!(encode(&decoded), text);
    }

    #[test]
    fn test_decode_rejects_truncated_text(choices in prop::collection::vec(any::<usize>(), 0..30), cut in 1usize..6) {
        let text = encode(&random_game(&choices));
        let fields: Vec<&str> = text.split(' ').collect();
        let truncated = fields[..6 - cut].join(" ");
        prop_assert!(decode(&truncated).is_err(), "{:?} has too few fields", truncated);
    }
}
