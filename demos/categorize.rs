use plurule::{Operands, Predicate};

const POLISH: &[(&str, &str)] = &[
    ("one", "i = 1 and v = 0"),
    ("few", "v = 0 and i % 10 = 2..4 and i % 100 != 12..14"),
    (
        "many",
        "v = 0 and i != 1 and i % 10 = 0..1 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 12..14",
    ),
];

fn main() {
    let categories: Vec<(&str, Predicate)> = POLISH
        .iter()
        .map(|&(name, rule)| (name, Predicate::from_rule(rule).expect("failed to parse rule")))
        .collect();

    for text in ["1", "2", "5", "12", "22", "1.5"] {
        let n: Operands = text.parse().expect("valid number");
        let category = categories
            .iter()
            .find(|(_, predicate)| predicate.matches(&n))
            .map_or("other", |(name, _)| *name);
        println!("{text:>4} -> {category}");
    }
}
