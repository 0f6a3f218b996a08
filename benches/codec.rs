use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use tlwire::encode;
use tlwire::schema::{
    EntityBold, InputChannel, InputChannelRef, MessageData, MessageEntity, Peer, PeerUser, ReplyTo,
};
use tlwire::wire::{self, OutputStream};

fn sample_message(entity_count: usize) -> MessageData {
    MessageData {
        outgoing: true,
        mentioned: false,
        silent: false,
        id: 42,
        from_id: Some(1234),
        peer: Peer::User(PeerUser { user_id: 99 }),
        reply_to: Some(ReplyTo {
            reply_to_msg_id: 41,
            reply_to_top_id: 1,
        }),
        date: 1_700_000_000,
        text: "the quick brown fox jumps over the lazy dog".into(),
        entities: Some(
            (0..entity_count)
                .map(|i| {
                    MessageEntity::Bold(EntityBold {
                        offset: i as i32,
                        length: 1,
                    })
                })
                .collect(),
        ),
        views: Some(7),
        edit_date: None,
    }
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    let channel = InputChannel::Channel(InputChannelRef {
        channel_id: 1001,
        access_hash: 777,
    });
    group.throughput(Throughput::Bytes(20));
    group.bench_function("flagless_constructor", |b| {
        b.iter(|| {
            black_box(encode(&channel).unwrap());
        });
    });

    let small = sample_message(0);
    let small_len = encode(&small).unwrap().len() as u64;
    group.throughput(Throughput::Bytes(small_len));
    group.bench_function("message_no_entities", |b| {
        b.iter(|| {
            black_box(encode(&small).unwrap());
        });
    });

    let large = sample_message(64);
    let large_len = encode(&large).unwrap().len() as u64;
    group.throughput(Throughput::Bytes(large_len));
    group.bench_function("message_64_entities", |b| {
        b.iter(|| {
            black_box(encode(&large).unwrap());
        });
    });

    group.finish();
}

fn bench_vectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("vectors");

    let longs: Vec<i64> = (0..1024).collect();
    group.throughput(Throughput::Bytes(8 + 1024 * 8));
    group.bench_function("long_vector_1k", |b| {
        b.iter(|| {
            let mut out = OutputStream::with_capacity(8 + 1024 * 8);
            wire::write_long_vector(&mut out, &longs).unwrap();
            black_box(out.freeze());
        });
    });

    let strings: Vec<String> = (0..256).map(|i| format!("item-{i}")).collect();
    group.bench_function("string_vector_256", |b| {
        b.iter(|| {
            let mut out = OutputStream::new();
            wire::write_string_vector(&mut out, &strings).unwrap();
            black_box(out.freeze());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_vectors);
criterion_main!(benches);
