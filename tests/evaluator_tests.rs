//! Evaluator integration tests over the public API.

use target_x::cards::{tokens, Card, Operator};
use target_x::expr::{evaluate, evaluate_cards, try_evaluate_cards, EvalError, MAX_CARDS};

fn n(value: u8) -> Card {
    Card::number(value)
}

fn op(op: Operator) -> Card {
    Card::Operator(op)
}

fn int(cards: &[Card]) -> Option<i64> {
    evaluate_cards(cards).and_then(|v| v.as_integer())
}

// =============================================================================
// Reference Values
// =============================================================================

#[test]
fn test_five_plus_two() {
    assert_eq!(int(&[n(5), op(Operator::Plus), n(2)]), Some(7));
}

#[test]
fn test_two_to_the_third() {
    assert_eq!(int(&[n(2), op(Operator::Power), n(3)]), Some(8));
}

#[test]
fn test_sqrt_nine() {
    assert_eq!(int(&[op(Operator::Sqrt), n(9)]), Some(3));
}

#[test]
fn test_three_factorial() {
    assert_eq!(int(&[n(3), op(Operator::Factorial)]), Some(6));
}

#[test]
fn test_missing_operand_is_invalid() {
    assert_eq!(evaluate_cards(&[n(5), op(Operator::Multiply)]), None);
}

#[test]
fn test_empty_is_invalid() {
    assert_eq!(evaluate_cards(&[]), None);
    assert_eq!(try_evaluate_cards(&[]), Err(EvalError::Empty));
}

#[test]
fn test_division_by_zero_is_invalid() {
    let cards = [n(4), op(Operator::Divide), n(0)];
    assert_eq!(evaluate_cards(&cards), None);
    assert_eq!(try_evaluate_cards(&cards), Err(EvalError::DivisionByZero));
}

// =============================================================================
// Larger Expressions
// =============================================================================

#[test]
fn test_mixed_precedence() {
    // 10 - 2 × 3 ^ 2 ÷ 6 = 10 - 3 = 7
    let cards = [
        n(10),
        op(Operator::Minus),
        n(2),
        op(Operator::Multiply),
        n(3),
        op(Operator::Power),
        n(2),
        op(Operator::Divide),
        n(6),
    ];
    assert_eq!(int(&cards), Some(7));
}

#[test]
fn test_sqrt_group_and_factorial() {
    // √( 4 ! + 1 ) = √25 = 5
    let cards = [
        op(Operator::Sqrt),
        op(Operator::LParen),
        n(4),
        op(Operator::Factorial),
        op(Operator::Plus),
        n(1),
        op(Operator::RParen),
    ];
    assert_eq!(int(&cards), Some(5));
}

#[test]
fn test_fraction_rounds_to_three_places() {
    let value = evaluate_cards(&[n(2), op(Operator::Divide), n(3)]).unwrap();
    assert_eq!(value.as_f64(), 0.667);
    assert!(!value.is_integer());
    assert!(!value.matches(1));
}

#[test]
fn test_evaluate_tokens() {
    let placed = tokens([n(6), op(Operator::Multiply), n(7)]);
    assert_eq!(evaluate(&placed).and_then(|v| v.as_integer()), Some(42));
}

// =============================================================================
// Rejected Shapes
// =============================================================================

#[test]
fn test_rejected_shapes() {
    let rejected: [&[Card]; 6] = [
        &[n(1), n(2)],
        &[op(Operator::Multiply), op(Operator::Multiply), n(2)],
        &[n(2), op(Operator::Factorial), op(Operator::Factorial)],
        &[op(Operator::Sqrt)],
        &[op(Operator::LParen), n(3)],
        &[op(Operator::Minus), op(Operator::Minus), n(3)],
    ];

    for cards in rejected {
        assert_eq!(evaluate_cards(cards), None, "{cards:?}");
    }
}

#[test]
fn test_oversized_expression_is_invalid() {
    // 1 + 1 + ... + 1 with one pair more than the limit allows.
    let mut cards = vec![n(1)];
    for _ in 0..MAX_CARDS / 2 + 1 {
        cards.push(op(Operator::Plus));
        cards.push(n(1));
    }
    assert!(cards.len() > MAX_CARDS);

    assert_eq!(evaluate_cards(&cards), None);
    assert_eq!(
        try_evaluate_cards(&cards),
        Err(EvalError::TooLong { limit: MAX_CARDS })
    );

    let far_too_long: Vec<Card> = std::iter::once(n(1))
        .chain((0..200_000).flat_map(|_| [op(Operator::Plus), n(1)]))
        .collect();
    assert_eq!(evaluate_cards(&far_too_long), None);
}

#[test]
fn test_longest_accepted_expression() {
    let mut cards = vec![n(1)];
    while cards.len() + 2 <= MAX_CARDS {
        cards.push(op(Operator::Plus));
        cards.push(n(1));
    }

    let expected = (cards.len() as i64 + 1) / 2;
    assert_eq!(int(&cards), Some(expected));
}

#[test]
fn test_negative_sqrt_is_invalid() {
    let cards = [
        op(Operator::Sqrt),
        op(Operator::LParen),
        n(1),
        op(Operator::Minus),
        n(2),
        op(Operator::RParen),
    ];
    assert_eq!(try_evaluate_cards(&cards), Err(EvalError::NegativeSqrt));
}

#[test]
fn test_every_prefix_evaluates_without_panicking() {
    let cards = [
        op(Operator::LParen),
        n(9),
        op(Operator::Minus),
        op(Operator::Sqrt),
        n(4),
        op(Operator::RParen),
        op(Operator::Power),
        n(2),
        op(Operator::Divide),
        n(7),
    ];

    for end in 0..=cards.len() {
        let _ = evaluate_cards(&cards[..end]);
    }
    assert_eq!(int(&cards), Some(7));
}
