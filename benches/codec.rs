use criterion::{criterion_group, criterion_main, Criterion};
use rpgme_core::{decode, encode, Character, QueryParams, ShareLink, TraitVector};

fn bench_codec(c: &mut Criterion) {
    let traits = TraitVector::from_values([1, 0, 2, 0, 3, 0, 4, 0, 5]);

    c.bench_function("encode_seed", |b| b.iter(|| encode(&traits)));

    c.bench_function("from_seed", |b| {
        b.iter(|| TraitVector::from_seed("102030405"))
    });

    let params = QueryParams::parse("?seed=102030405&hat=pirate&fire=true&walking=false");
    let prior = Character::default();
    c.bench_function("decode_query", |b| b.iter(|| decode(&prior, &params)));

    c.bench_function("parse_query", |b| {
        b.iter(|| QueryParams::parse("?seed=102030405&hat=pirate&fire=true&walking=false"))
    });

    let character = decode(&prior, &params).character;
    c.bench_function("share_link", |b| {
        b.iter(|| ShareLink::build("/rpg-me/", &character))
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
