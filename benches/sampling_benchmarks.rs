use criterion::{criterion_group, criterion_main, Criterion};
use sensorscope::{parse_rpm_output, Statistics};
use std::hint::black_box;

fn synthetic_sensors_output(fans: usize) -> String {
    let mut output = String::from("nct6795-isa-0a20\nAdapter: ISA adapter\n");
    for i in 0..fans {
        output.push_str(&format!(
            "fan{}:                 {} RPM  (min =    0 RPM)\n",
            i + 1,
            600 + (i * 37) % 1400
        ));
        output.push_str(&format!("temp{}:              +{}.0\u{b0}C\n", i + 1, 40 + i % 30));
    }
    output
}

fn bench_parse_rpm_output(c: &mut Criterion) {
    let output = synthetic_sensors_output(64);

    c.bench_function("parse_rpm_output_64_fans", |b| {
        b.iter(|| parse_rpm_output(black_box(&output)))
    });
}

fn bench_statistics(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000).map(|i| 600.0 + (i % 997) as f64).collect();

    c.bench_function("statistics_10k_values", |b| {
        b.iter(|| Statistics::from_values(black_box(&values)))
    });
}

criterion_group!(benches, bench_parse_rpm_output, bench_statistics);
criterion_main!(benches);
