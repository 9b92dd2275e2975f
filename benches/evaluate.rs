//! Benchmarks for expression evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use target_x::cards::{Card, Operator};
use target_x::expr::evaluate_cards;

/// `1 + 2 + 3 + ...` with `terms` number cards.
fn long_sum(terms: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(terms * 2);
    for i in 0..terms {
        if i > 0 {
            cards.push(Card::Operator(Operator::Plus));
        }
        cards.push(Card::number((i % 11) as u8));
    }
    cards
}

/// `√( √( ... 4 ... ) )` nested `depth` times.
fn nested_sqrt(depth: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(depth * 3 + 1);
    for _ in 0..depth {
        cards.push(Card::Operator(Operator::Sqrt));
        cards.push(Card::Operator(Operator::LParen));
    }
    cards.push(Card::number(4));
    for _ in 0..depth {
        cards.push(Card::Operator(Operator::RParen));
    }
    cards
}

fn bench_typical_expression(c: &mut Criterion) {
    // ( 9 − √4 ) ^ 2 ÷ 7 + 3 !
    let cards = [
        Card::Operator(Operator::LParen),
        Card::number(9),
        Card::Operator(Operator::Minus),
        Card::Operator(Operator::Sqrt),
        Card::number(4),
        Card::Operator(Operator::RParen),
        Card::Operator(Operator::Power),
        Card::number(2),
        Card::Operator(Operator::Divide),
        Card::number(7),
        Card::Operator(Operator::Plus),
        Card::number(3),
        Card::Operator(Operator::Factorial),
    ];

    c.bench_function("evaluate_typical", |b| {
        b.iter(|| black_box(evaluate_cards(black_box(&cards))))
    });
}

fn bench_expression_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_length");

    for terms in [4, 16, 64] {
        let cards = long_sum(terms);
        group.bench_with_input(BenchmarkId::new("sum", terms), &cards, |b, cards| {
            b.iter(|| black_box(evaluate_cards(cards)))
        });
    }

    for depth in [4, 16, 64] {
        let cards = nested_sqrt(depth);
        group.bench_with_input(BenchmarkId::new("nested_sqrt", depth), &cards, |b, cards| {
            b.iter(|| black_box(evaluate_cards(cards)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_typical_expression, bench_expression_length);
criterion_main!(benches);
