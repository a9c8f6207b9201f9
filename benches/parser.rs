//! Criterion benchmarks for the streaming parser and serializer.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rmproto::packets::{
    GameStatus, PowerHeatData, RefereeDeserializer, RefereeParser, RefereeSerializer, RobotStatus,
};

fn sample_burst() -> Vec<u8> {
    let mut serializer = RefereeSerializer::new();
    let mut wire = [0u8; 256];

    let status = GameStatus {
        game_type_progress: (4 << 4) | 1,
        stage_remain_time: 293,
        sync_timestamp: 1_700_000_000,
    };
    let robot = RobotStatus {
        robot_id: 3,
        robot_level: 2,
        current_hp: 180,
        maximum_hp: 200,
        shooter_barrel_cooling_value: 40,
        shooter_barrel_heat_limit: 240,
        chassis_power_limit: 80,
        power_management_output: 0b111,
    };
    let heat = PowerHeatData {
        reserved_0: 0,
        reserved_1: 0,
        reserved_2: 0.0,
        buffer_energy: 60,
        shooter_17mm_1_barrel_heat: 30,
        shooter_42mm_barrel_heat: 0,
    };

    let len = serializer
        .serialize(&mut wire, &[&status, &robot, &heat])
        .unwrap();
    wire[..len].to_vec()
}

fn bench_parse_clean_stream(c: &mut Criterion) {
    let burst = sample_burst();

    let mut group = c.benchmark_group("parse_clean_stream");
    group.throughput(Throughput::Bytes(burst.len() as u64));
    group.bench_function("three_frame_burst", |b| {
        let mut storage = RefereeDeserializer::new();
        let mut parser = RefereeParser::new(&mut storage);
        b.iter(|| {
            parser.push_data(black_box(&burst)).unwrap();
            black_box(parser.available_data());
        });
    });
    group.finish();
}

fn bench_parse_noisy_stream(c: &mut Criterion) {
    let burst = sample_burst();
    let mut noisy = Vec::with_capacity(burst.len() + 64);
    noisy.extend(std::iter::repeat(0x5Au8).take(32));
    noisy.extend_from_slice(&burst);
    noisy.extend(std::iter::repeat(0x5Au8).take(32));

    let mut group = c.benchmark_group("parse_noisy_stream");
    group.throughput(Throughput::Bytes(noisy.len() as u64));
    group.bench_function("junk_wrapped_burst", |b| {
        let mut storage = RefereeDeserializer::new();
        let mut parser = RefereeParser::new(&mut storage);
        b.iter(|| {
            parser.push_data(black_box(&noisy)).unwrap();
            black_box(parser.available_data());
        });
    });
    group.finish();
}

fn bench_fragmented_delivery(c: &mut Criterion) {
    let burst = sample_burst();

    let mut group = c.benchmark_group("parse_fragmented");
    group.throughput(Throughput::Bytes(burst.len() as u64));
    group.bench_function("four_byte_chunks", |b| {
        let mut storage = RefereeDeserializer::new();
        let mut parser = RefereeParser::new(&mut storage);
        b.iter(|| {
            for chunk in burst.chunks(4) {
                parser.push_data(black_box(chunk)).unwrap();
            }
            black_box(parser.available_data());
        });
    });
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let status = GameStatus {
        game_type_progress: (4 << 4) | 1,
        stage_remain_time: 293,
        sync_timestamp: 1_700_000_000,
    };

    c.bench_function("serialize_game_status", |b| {
        let mut serializer = RefereeSerializer::new();
        let mut wire = [0u8; 64];
        b.iter(|| {
            let len = serializer
                .serialize(black_box(&mut wire), &[&status])
                .unwrap();
            black_box(len);
        });
    });
}

criterion_group!(
    benches,
    bench_parse_clean_stream,
    bench_parse_noisy_stream,
    bench_fragmented_delivery,
    bench_serialize,
);
criterion_main!(benches);
