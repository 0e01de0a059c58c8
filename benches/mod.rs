use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    shell::bench_feed_line,
    shell::bench_tokenize,
    shell::bench_dispatch_unknown,
    shell::bench_help
);
criterion_main!(benches);
