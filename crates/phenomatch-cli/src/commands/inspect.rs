use anyhow::Result;
use phenomatch_matcher::Matcher;

pub fn run(matcher: &Matcher) -> Result<()> {
    let index = matcher.index();

    let mut total_fingerprints: u64 = 0;
    let mut empty_signatures: usize = 0;
    let mut longest: Option<(&str, u32)> = None;

    for alias in index.aliases() {
        let len = alias.signature.len();
        total_fingerprints += u64::from(len);
        if alias.signature.is_empty() {
            empty_signatures += 1;
        }
        if longest.map_or(true, |(_, max)| len > max) {
            longest = Some((alias.name.as_str(), len));
        }
    }

    let avg = if index.alias_count() > 0 {
        total_fingerprints as f64 / index.alias_count() as f64
    } else {
        0.0
    };

    println!("Aliases: {}", index.alias_count());
    println!("Concepts: {}", index.concept_count());
    println!("Fingerprints: {total_fingerprints}");
    println!("Avg fingerprints per alias: {avg:.1}");
    println!("Empty signatures: {empty_signatures}");
    if let Some((name, len)) = longest {
        println!("Longest signature: {name:?} ({len} fingerprints)");
    }

    Ok(())
}
