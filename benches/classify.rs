use birdpinger::dispatch::verdict;
use birdpinger::event::{Event, Id};
use birdpinger::following::FollowingSet;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use std::convert::TryFrom;

const TWEET: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/test_data/tweet_001.json"));
const REPLY: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/test_data/reply_001.json"));
const CONTROL: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/test_data/control_001.json"));

/// Classify and filter one record the way the dispatch loop does, minus the ping.
fn classify_and_filter(record: &str, following: &FollowingSet) -> bool {
    match Event::try_from(record) {
        Ok(Event::Tweet(tweet)) => verdict(&tweet, following) == birdpinger::dispatch::Verdict::Notify,
        Ok(_) | Err(_) => false,
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let following = FollowingSet::from((0..5_000).map(Id).collect::<Vec<_>>());

    let mut group = c.benchmark_group("classify stream records");
    group.bench_function("tweet", |b| {
        b.iter(|| classify_and_filter(black_box(TWEET), &following))
    });
    group.bench_function("reply", |b| {
        b.iter(|| classify_and_filter(black_box(REPLY), &following))
    });
    group.bench_function("control event", |b| {
        b.iter(|| classify_and_filter(black_box(CONTROL), &following))
    });
    group.bench_function("garbage", |b| {
        b.iter(|| classify_and_filter(black_box(r#"{"bogus":true}"#), &following))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
