use criterion::{Criterion, black_box, criterion_group, criterion_main};
use plurule::{Operands, Predicate, compile, parse};

/// Rules of increasing size, taken from the CLDR cardinal rule sets.
const RULES: &[(&str, &str)] = &[
    ("en_one", "i = 1 and v = 0 @integer 1"),
    (
        "ru_few",
        "v = 0 and i % 10 = 2..4 and i % 100 != 12..14 \
         @integer 2~4, 22~24, 32~34, 42~44, 52~54, 62, 102, 1002, …",
    ),
    (
        "pl_many",
        "v = 0 and i != 1 and i % 10 = 0..1 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 12..14 \
         @integer 0, 5~19, 100, 1000, 10000, 100000, 1000000, …",
    ),
    (
        "lv_one",
        "n % 10 = 1 and n % 100 != 11 or v = 2 and f % 10 = 1 and f % 100 != 11 or v != 2 and f % 10 = 1 \
         @integer 1, 21, 31, 41, 51, 61, 71, 81, 101, 1001, … \
         @decimal 0.1, 1.0, 1.1, 2.1, 3.1, 4.1, 5.1, 6.1, 7.1, 10.1, 100.1, 1000.1, …",
    ),
];

const INPUTS: &[&str] = &["1", "3", "12", "22", "105", "1.0", "0.21", "1000.1"];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for &(name, rule) in RULES {
        group.bench_function(name, |b| {
            b.iter(|| parse(black_box(rule)).unwrap());
        });
    }

    group.finish();
}

fn bench_compilation(c: &mut Criterion) {
    let mut group = c.benchmark_group("compilation");

    for &(name, rule) in RULES {
        let condition = parse(rule).unwrap().condition;
        group.bench_function(name, |b| {
            b.iter(|| compile(black_box(condition.clone())));
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_eval");
    let operands: Vec<Operands> = INPUTS.iter().map(|n| n.parse().unwrap()).collect();

    for &(name, rule) in RULES {
        let predicate = Predicate::from_rule(rule).unwrap();

        group.bench_function(format!("{name}_operands"), |b| {
            b.iter(|| {
                operands
                    .iter()
                    .filter(|n| predicate.matches(black_box(n)))
                    .count()
            });
        });

        group.bench_function(format!("{name}_text"), |b| {
            b.iter(|| {
                INPUTS
                    .iter()
                    .filter(|&&n| predicate.evaluate(black_box(n)).unwrap())
                    .count()
            });
        });
    }

    group.finish();
}

fn bench_operand_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("operand_construction");

    group.bench_function("integer", |b| {
        b.iter(|| Operands::from(black_box(1_000_000_u64)));
    });
    group.bench_function("float", |b| {
        b.iter(|| Operands::try_from(black_box(1234.5_f64)).unwrap());
    });
    group.bench_function("text", |b| {
        b.iter(|| black_box("1234.50").parse::<Operands>().unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_compilation,
    bench_evaluate,
    bench_operand_construction
);
criterion_main!(benches);
