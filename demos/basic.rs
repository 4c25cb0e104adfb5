use plurule::{Predicate, parse};

fn main() {
    // Russian cardinal "few"
    let parsed = parse("v = 0 and i % 10 = 2..4 and i % 100 != 12..14 @integer 2~4, 22~24, 102, …")
        .expect("failed to parse rule");

    println!("rule:    {}", parsed.condition);
    for sample in &parsed.samples {
        println!("sample:  {sample}");
    }

    let few = plurule::compile(parsed.condition);
    for n in ["2", "5", "12", "22", "2.0"] {
        println!("few({n}) = {}", few.evaluate(n).expect("valid number"));
    }

    let one = Predicate::from_rule("i = 1 and v = 0").expect("failed to parse rule");
    println!("{}", one.to_source());
}
