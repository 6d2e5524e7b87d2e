//! Micro-benchmarks for connection string handling
//!
//! Run with: cargo bench --bench micro_benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mssql_conn::{ConnectionConfig, OdbcConnectionString};
use std::collections::HashMap;

fn config_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("config");

    let env = HashMap::from([
        ("DB_HOST", "db1.internal.example.com"),
        ("DB_PORT", "1433"),
        ("DB_NAME", "Sales"),
        ("DB_USER", "admin"),
        ("DB_PASSWORD", "secret"),
    ]);

    group.bench_function("from_source", |b| {
        b.iter(|| ConnectionConfig::from_source(black_box(&env)))
    });

    let config = ConnectionConfig::from_source(&env).unwrap();
    group.bench_function("render", |b| b.iter(|| black_box(&config).connection_string()));

    group.finish();
}

fn parse_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let plain = "DRIVER={ODBC Driver 17 for SQL Server};SERVER=db1,1433;DATABASE=Sales;UID=admin;PWD=secret;TrustServerCertificate=yes;";
    let braced = "DRIVER={ODBC Driver 17 for SQL Server};SERVER=tcp:db1,1433;DATABASE={Sales;Archive};UID=admin;PWD={p}}a;ss};Encrypt=yes;";

    group.bench_function("plain", |b| {
        b.iter(|| OdbcConnectionString::parse(black_box(plain)))
    });
    group.bench_function("braced", |b| {
        b.iter(|| OdbcConnectionString::parse(black_box(braced)))
    });
    group.bench_function("to_tds_config", |b| {
        let parsed = OdbcConnectionString::parse(plain).unwrap();
        b.iter(|| black_box(&parsed).to_tds_config())
    });

    group.finish();
}

criterion_group!(benches, config_benchmarks, parse_benchmarks);
criterion_main!(benches);
