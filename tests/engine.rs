//! Engine integration tests.

#![allow(clippy::float_cmp)]

use chrono::DateTime;
use hilo::{
    Card, CardKind, EXPECTED_NUMBERS, EXPECTED_OPERATORS, EvalError, Game, GameOptions, GameStore,
    Generator, Hand, MemoryStore, Operator, Pool, StoreError, evaluate, format_number,
    generate_number_cards, generate_operator_cards, new_pool, parse_number,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn hand(values: &[&str]) -> Hand {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let kind = if i % 2 == 0 {
                CardKind::Number
            } else {
                CardKind::Operator
            };
            Card::new(kind, *value)
        })
        .collect()
}

#[test]
fn left_to_right_reduction() {
    let scores = hand(&["1", "+", "2", "-", "1", "*", "2"]).evaluate();
    assert_eq!(scores, Ok(vec![3.0, 2.0, 4.0]));
}

#[test]
fn no_operator_precedence() {
    // 2 + 3 * 4 is (2 + 3) * 4, not 2 + 12.
    let scores = hand(&["2", "+", "3", "*", "4", "-", "1"]).evaluate().unwrap();
    assert_eq!(scores, vec![5.0, 20.0, 19.0]);
}

#[test]
fn division_by_zero_aborts_evaluation() {
    let err = hand(&["10", "/", "0", "+", "1", "+", "1"])
        .evaluate()
        .unwrap_err();
    assert_eq!(
        err,
        EvalError::DivisionByZero {
            left: 10.0,
            right: 0.0
        }
    );
    assert_eq!(
        err.to_string(),
        "operation 10 / 0 is not valid: division by zero"
    );
}

#[test]
fn power_uses_double_precision() {
    let scores = hand(&["10", "^", "2", "+", "1", "+", "1"]).evaluate().unwrap();
    assert_eq!(scores[0], 100.0);
    assert_eq!(scores, vec![100.0, 101.0, 102.0]);
}

#[test]
fn unknown_operator_is_named() {
    for position in [1, 3, 5] {
        let mut values = vec!["1", "+", "2", "+", "3", "+", "4"];
        values[position] = "_";
        let err = hand(&values).evaluate().unwrap_err();
        assert_eq!(err, EvalError::UnknownOperator("_".to_string()));
        assert!(err.to_string().contains("\"_\""));
    }
}

#[test]
fn bad_operand_reports_conversion_error() {
    let err = hand(&["1", "+", "abc", "+", "3", "+", "4"])
        .evaluate()
        .unwrap_err();
    let EvalError::Conversion(conversion) = err else {
        panic!("expected conversion error, got {err:?}");
    };
    assert_eq!(conversion.value, "abc");
}

#[test]
fn short_hand_reports_missing_operand() {
    let err = hand(&["1", "+", "2"]).evaluate().unwrap_err();
    assert_eq!(
        err,
        EvalError::MissingOperand {
            left: "3.00".to_string(),
            operator: String::new(),
            right: String::new(),
        }
    );

    assert!(Hand::default().is_empty());
    assert!(matches!(
        Hand::default().evaluate(),
        Err(EvalError::MissingOperand { .. })
    ));
}

#[test]
fn extra_cards_are_ignored() {
    let long = hand(&["1", "+", "1", "+", "1", "+", "1", "+", "1"]);
    assert_eq!(long.len(), 9);
    let scores = long.evaluate().unwrap();
    assert_eq!(scores, vec![2.0, 3.0, 4.0]);
}

#[test]
fn configured_operator_count() {
    let options = GameOptions::default().with_operator_cards(1);
    let scores = hand(&["6", "/", "4"]).evaluate_with(&options).unwrap();
    assert_eq!(scores, vec![1.5]);
}

#[test]
fn free_function_matches_hand_method() {
    let cards = hand(&["9", "-", "4", "^", "2", "/", "5"]);
    assert_eq!(evaluate(cards.cards()), cards.evaluate());
    assert_eq!(cards.evaluate().unwrap(), vec![5.0, 25.0, 5.0]);
}

#[test]
fn dealt_hands_score_fully_or_fail() {
    let generator = Generator::new(GameOptions::default(), 99);
    for _ in 0..200 {
        let pool = generator.new_pool();
        let numbers: Vec<&Card> = pool.number_cards().collect();
        let operators: Vec<&Card> = pool.operator_cards().collect();
        let mut cards = vec![numbers[0].clone()];
        for (op, number) in operators.iter().zip(&numbers[1..]) {
            cards.push((*op).clone());
            cards.push((*number).clone());
        }
        assert_eq!(cards.len(), 7);

        match Hand::new(cards).evaluate() {
            Ok(scores) => assert_eq!(scores.len(), EXPECTED_OPERATORS),
            Err(err) => assert!(matches!(err, EvalError::DivisionByZero { .. })),
        }
    }
}

#[test]
fn operator_cards_have_requested_count() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for n in 0..20 {
        let cards = generate_operator_cards(&mut rng, n);
        assert_eq!(cards.len(), n);
        for card in &cards {
            assert_eq!(card.kind(), CardKind::Operator);
            assert!(Operator::from_symbol(card.value()).is_some());
        }
    }
}

#[test]
fn number_cards_have_requested_count_and_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for n in 0..20 {
        let cards = generate_number_cards(&mut rng, n);
        assert_eq!(cards.len(), n);
        for card in &cards {
            assert_eq!(card.kind(), CardKind::Number);
            let value = parse_number(card.value()).unwrap();
            assert!((1.0..=9.0).contains(&value));
            assert_eq!(value.fract(), 0.0);
        }
    }
}

#[test]
fn number_duplicates_remain_possible() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let duplicated = (0..1_000).any(|_| {
        let cards = generate_number_cards(&mut rng, EXPECTED_NUMBERS);
        let mut values: Vec<&str> = cards.iter().map(Card::value).collect();
        values.sort_unstable();
        values.windows(2).any(|pair| pair[0] == pair[1])
    });
    assert!(duplicated);
}

#[test]
fn redraw_lowers_duplicate_rate() {
    // Four independent draws from 1..=9 (with 1 twice as likely) repeat a
    // value about 56% of the time. One redraw per duplicate cuts that well
    // below 40%.
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let runs = 2_000;
    let duplicated = (0..runs)
        .filter(|_| {
            let cards = generate_number_cards(&mut rng, EXPECTED_NUMBERS);
            let mut values: Vec<&str> = cards.iter().map(Card::value).collect();
            values.sort_unstable();
            values.windows(2).any(|pair| pair[0] == pair[1])
        })
        .count();
    assert!(duplicated * 10 < runs * 4, "{duplicated} of {runs} pools repeated a value");
}

#[test]
fn pool_puts_numbers_before_operators() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let pool = new_pool(&mut rng, &GameOptions::default());
    assert_eq!(pool.len(), EXPECTED_NUMBERS + EXPECTED_OPERATORS);

    let kinds: Vec<CardKind> = pool.cards().iter().map(Card::kind).collect();
    let first_operator = kinds
        .iter()
        .position(|kind| *kind == CardKind::Operator)
        .unwrap();
    assert_eq!(first_operator, EXPECTED_NUMBERS);
    assert!(kinds[first_operator..]
        .iter()
        .all(|kind| *kind == CardKind::Operator));
}

#[test]
fn pool_size_follows_options() {
    let options = GameOptions::default()
        .with_number_cards(6)
        .with_operator_cards(2);
    let generator = Generator::new(options, 3);
    let pool = generator.new_pool();
    assert_eq!(pool.len(), options.pool_size());
    assert_eq!(pool.number_cards().count(), 6);
    assert_eq!(pool.operator_cards().count(), 2);
}

#[test]
fn same_seed_deals_same_pools() {
    let a = Generator::new(GameOptions::default(), 42);
    let b = Generator::new(GameOptions::default(), 42);
    for _ in 0..10 {
        assert_eq!(a.new_pool(), b.new_pool());
    }
    assert_eq!(a.number_cards(4), b.number_cards(4));
    assert_eq!(a.operator_cards(3), b.operator_cards(3));
}

#[test]
fn format_then_parse_keeps_two_places() {
    for x in [0.0_f32, 1.0, -2.5, 3.141_59, 1234.567, -0.004, 99.999] {
        let back = parse_number(&format_number(x)).unwrap();
        assert!((back - x).abs() <= 0.005 + x.abs() * f32::EPSILON, "{x} -> {back}");
    }
}

#[test]
fn game_id_is_nanos_then_uuid() {
    let now = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let game = Game::at(Pool::default(), now, &mut rng);

    let (nanos, token) = game.id().split_once('-').unwrap();
    assert_eq!(nanos, "123456789");
    assert!(uuid::Uuid::parse_str(token).is_ok());
    assert_eq!(game.timestamp(), now);
    assert!(game.pool().is_empty());
}

#[test]
fn games_get_distinct_ids() {
    let generator = Generator::new(GameOptions::default(), 6);
    let first = generator.new_game();
    let second = generator.new_game();
    assert_ne!(first.id(), second.id());
    assert_eq!(first.pool().len(), 7);
}

#[test]
fn memory_store_round_trip() {
    let store = MemoryStore::new();
    let generator = Generator::new(GameOptions::default(), 7);
    let game = generator.new_game();
    let id = game.id().to_string();

    assert_eq!(store.get(&id), Err(StoreError::NotFound(id.clone())));

    store.put(game.clone()).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&id), Ok(game.clone()));
    assert_eq!(store.put(game), Err(StoreError::Duplicate(id)));
}

#[cfg(feature = "serde")]
#[test]
fn card_wire_format() {
    let json = serde_json::to_value(Card::number(1.0)).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "Number", "value": "1.00" }));

    let card: Card =
        serde_json::from_value(serde_json::json!({ "kind": "Operator", "value": "^" })).unwrap();
    assert_eq!(card, Card::operator(Operator::Power));
}
