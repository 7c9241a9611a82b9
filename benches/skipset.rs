use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skipset::SkipSet;

fn keys(n: usize) -> Vec<u64> {
    let mut num = 0u64;
    (0..n)
        .map(|_| {
            num = num.wrapping_mul(17).wrapping_add(255);
            num
        })
        .collect()
}

fn filled(n: usize) -> SkipSet<u64> {
    let set = SkipSet::new(u64::cmp);
    for k in keys(n) {
        set.insert(k);
    }
    set
}

fn insert(c: &mut Criterion) {
    c.bench_function("insert_1k", |b| {
        b.iter(|| {
            let set = SkipSet::new(u64::cmp);
            for k in keys(1_000) {
                set.insert(k);
            }
            set
        })
    });
}

fn lookup(c: &mut Criterion) {
    let set = filled(1_000);
    c.bench_function("lookup_1k", |b| {
        b.iter(|| {
            for k in keys(1_000) {
                black_box(set.contains(&k));
            }
        })
    });
}

fn iter(c: &mut Criterion) {
    let set = filled(1_000);
    c.bench_function("iter_1k", |b| {
        b.iter(|| {
            for x in set.iter() {
                black_box(x);
            }
        })
    });
}

fn insert_remove(c: &mut Criterion) {
    c.bench_function("insert_remove_1k", |b| {
        b.iter(|| {
            let set = SkipSet::new(u64::cmp);
            for k in keys(1_000) {
                set.insert(k);
            }
            for k in keys(1_000) {
                assert!(set.remove(&k));
            }
        })
    });
}

criterion_group!(benches, insert, lookup, iter, insert_remove);
criterion_main!(benches);
