use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cribbage_rs::agents::{BotAgent, BotProfile, Difficulty, OpponentStrategy};
use cribbage_rs::cards::{parse_cards, Card};
use cribbage_rs::hand::Hand;
use cribbage_rs::scoring::{score_counting, score_pegging, CountKind};

fn four(s: &str) -> [Card; 4] {
    parse_cards(s).unwrap().try_into().unwrap()
}

fn bench_score_counting(c: &mut Criterion) {
    let cases = [
        ("nothing", four("2c 4d 8h Ts"), "Kc".parse::<Card>().unwrap()),
        ("double_run", four("3h 4c 5d 5s"), "Kc".parse().unwrap()),
        ("twenty_nine", four("5c 5d 5h Js"), "5s".parse().unwrap()),
    ];
    let mut g = c.benchmark_group("score_counting");
    for (name, hand, up) in &cases {
        g.bench_with_input(BenchmarkId::new("hand", name), &(hand, up), |b, (hand, up)| {
            b.iter(|| score_counting(black_box(hand), black_box(**up), CountKind::Hand))
        });
    }
    g.finish();
}

fn bench_score_pegging(c: &mut Criterion) {
    let long_run = parse_cards("Ah 3c 2d 5s 4h 7c 6d").unwrap();
    let quads = parse_cards("7h 7c 7d 7s").unwrap();
    let mut g = c.benchmark_group("score_pegging");
    g.bench_with_input(BenchmarkId::new("run", "seven"), &long_run, |b, pile| {
        b.iter(|| score_pegging(black_box(pile), false))
    });
    g.bench_with_input(BenchmarkId::new("pairs", "four"), &quads, |b, pile| {
        b.iter(|| score_pegging(black_box(pile), true))
    });
    g.finish();
}

fn bench_bot_discards(c: &mut Criterion) {
    let hand = Hand::dealt(parse_cards("5c 5d Jh 6s 9c Kd").unwrap());
    let mut bot = BotAgent::new(BotProfile::for_difficulty(Difficulty::Hard).with_seed(3));
    c.bench_function("bot_hard_discards", |b| b.iter(|| bot.choose_discards(black_box(&hand))));
}

criterion_group!(benches, bench_score_counting, bench_score_pegging, bench_bot_discards);
criterion_main!(benches);
