use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sqlpretty::options::FormatOptions;
use sqlpretty::tokenizer::Tokenizer;
use sqlpretty::{format, Dialect};

const SMALL: &str = "SELECT a, b, c FROM my_table WHERE x = 1 AND y > 2 ORDER BY a";

fn medium_query() -> String {
    let mut sql = String::from("SELECT o.id, o.created_at, c.name, sum(i.amount) AS total\n");
    sql.push_str("FROM orders o\n");
    sql.push_str("JOIN customers c ON c.id = o.customer_id\n");
    sql.push_str("LEFT JOIN items i ON i.order_id = o.id\n");
    sql.push_str("WHERE o.created_at BETWEEN '2024-01-01' AND '2024-12-31'\n");
    sql.push_str("AND c.region IN ('north', 'south', 'east', 'west')\n");
    sql.push_str("GROUP BY o.id, o.created_at, c.name\n");
    sql.push_str("HAVING sum(i.amount) > 100\n");
    sql.push_str("ORDER BY total DESC LIMIT 50;\n");
    sql
}

fn large_query() -> String {
    // Many unions of the medium query exercise the full dispatch table.
    let medium = medium_query().replace(';', "");
    let mut sql = String::new();
    for i in 0..50 {
        if i > 0 {
            sql.push_str("UNION ALL\n");
        }
        sql.push_str(&medium);
    }
    sql
}

fn bench_format_small(c: &mut Criterion) {
    let options = FormatOptions::default();
    c.bench_function("format_small", |b| {
        b.iter(|| format(black_box(SMALL), black_box(&options)).unwrap())
    });
}

fn bench_format_medium(c: &mut Criterion) {
    let sql = medium_query();
    let options = FormatOptions::default();
    c.bench_function("format_medium", |b| {
        b.iter(|| format(black_box(&sql), black_box(&options)).unwrap())
    });
}

fn bench_format_large(c: &mut Criterion) {
    let sql = large_query();
    let options = FormatOptions::default();
    c.bench_function("format_large", |b| {
        b.iter(|| format(black_box(&sql), black_box(&options)).unwrap())
    });
}

fn bench_tokenize_only(c: &mut Criterion) {
    let sql = large_query();
    c.bench_function("tokenize_only", |b| {
        b.iter(|| {
            Tokenizer::new(Dialect::Sql)
                .tokenize(black_box(&sql))
                .unwrap()
        })
    });
}

fn bench_format_idempotent(c: &mut Criterion) {
    let options = FormatOptions::default();
    let formatted = format(&large_query(), &options).unwrap();
    c.bench_function("format_idempotent", |b| {
        b.iter(|| format(black_box(&formatted), black_box(&options)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_format_small,
    bench_format_medium,
    bench_format_large,
    bench_tokenize_only,
    bench_format_idempotent
);
criterion_main!(benches);
