use anyhow::Result;
use phenomatch_matcher::Matcher;

pub fn run(
    matcher: &Matcher,
    text: &str,
    threshold: f64,
    json: bool,
    top: Option<usize>,
) -> Result<()> {
    let mut matches = matcher.get_matches_with_threshold(text, threshold);
    if let Some(n) = top {
        matches.truncate(n);
    }

    if json {
        for m in &matches {
            println!("{}", serde_json::to_string(m)?);
        }
        return Ok(());
    }

    if matches.is_empty() {
        println!("no matches above {threshold:.0}% for {text:?}");
        return Ok(());
    }

    println!("{:<14} {:>7}  DESCRIPTOR", "CODE", "SCORE");
    for m in &matches {
        println!("{:<14} {:>6.1}%  {}", m.code, m.score, m.descriptor);
    }
    Ok(())
}
