//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package beanc-lex`

use beanc_lex::{tokenize, Lexer};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const PROGRAM: &str = r#"
;; Bubble sort over a fixed array
DECLARE data : ARRAY[1:8] OF INTEGER
DECLARE swapped : BOOLEAN
data <- [5, 3, 8, 1, 9, 2, 7, 4]

REPEAT
    swapped <- FALSE
    FOR i <- 1 TO 7
        IF data[i] > data[i + 1] THEN
            temp <- data[i]
            data[i] <- data[i + 1]
            data[i + 1] <- temp
            swapped <- TRUE
        ENDIF
    NEXT i
UNTIL swapped = FALSE

FUNCTION Average(total, count)
    RETURN total / count
ENDFUNCTION

OUTPUT "sorted: ", data
"#;

fn lexer_token_count(source: &str) -> usize {
    // Lexer implements Iterator, so we can use it directly
    Lexer::new(source).count()
}

fn bench_lexer_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "DECLARE x <- 42\nOUTPUT x + 1";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("declare", |b| {
        b.iter(|| lexer_token_count(black_box("DECLARE x <- 42")))
    });

    group.bench_function("two_statements", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");
    group.throughput(Throughput::Bytes(PROGRAM.len() as u64));

    group.bench_function("iterator", |b| {
        b.iter(|| lexer_token_count(black_box(PROGRAM)))
    });

    group.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(PROGRAM)).len()));

    let large = PROGRAM.repeat(64);
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("tokenize_large", |b| {
        b.iter(|| tokenize(black_box(&large)).len())
    });

    group.finish();
}

fn bench_lexer_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_operators");

    group.bench_function("arrows", |b| {
        b.iter(|| lexer_token_count(black_box("a <-// b **-> c <-+ d --> e <- f -> g")))
    });

    group.bench_function("comparisons", |b| {
        b.iter(|| lexer_token_count(black_box("a == b >= c <= d <> e >> f << g")))
    });

    group.finish();
}

fn bench_lexer_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("OUTPUT \"hello\"")))
    });

    group.bench_function("long_string", |b| {
        let source = "OUTPUT \"This is a longer string that contains some text for benchmarking purposes.\"";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("numerals", |b| {
        b.iter(|| lexer_token_count(black_box("x <- 123456 + 3.14159 - 1_000_000")))
    });

    group.finish();
}

fn bench_lexer_comments(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_comments");

    let source = ";; a comment line that the lexer skips entirely\n".repeat(32);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("comment_lines", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statements,
    bench_lexer_program,
    bench_lexer_operators,
    bench_lexer_literals,
    bench_lexer_comments
);
criterion_main!(benches);
