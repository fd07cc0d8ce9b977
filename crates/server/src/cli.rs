//! CLI argument parsing and subcommand dispatch.

use std::collections::BTreeMap;
use std::path::PathBuf;

use reviewlens_core::{canonical_location, Config};
use reviewlens_ingest::CsvImporter;

use crate::startup::build_scorer;

/// Parse CLI arguments and dispatch to the appropriate subcommand.
///
/// Returns `Ok(true)` if a subcommand was handled, `Ok(false)` if `serve`
/// should be started (handled by the caller). No arguments means `serve`.
pub fn dispatch(config: &Config, args: &[String]) -> anyhow::Result<bool> {
    match args.get(1).map(|s| s.as_str()) {
        None | Some("serve") => Ok(false),
        Some("score") => {
            let text = args[2..].join(" ");
            if text.trim().is_empty() {
                anyhow::bail!("Usage: reviewlens-server score <text...>");
            }
            score(config, &text)?;
            Ok(true)
        }
        Some("check") => {
            let path = args
                .get(2)
                .map(PathBuf::from)
                .unwrap_or_else(|| config.storage.reviews_csv.clone());
            check(&path)?;
            Ok(true)
        }
        _ => {
            print_usage();
            Ok(true)
        }
    }
}

/// Print the polarity scores for one piece of text as JSON.
fn score(config: &Config, text: &str) -> anyhow::Result<()> {
    let scorer = build_scorer(&config.sentiment)?;
    let sentiment = scorer.polarity_scores(text);
    println!("{}", serde_json::to_string_pretty(&sentiment)?);
    Ok(())
}

/// Validate a review CSV the same way startup does and summarize it.
fn check(path: &std::path::Path) -> anyhow::Result<()> {
    let reviews = CsvImporter::import(path)?;

    let mut by_location: BTreeMap<&str, usize> = BTreeMap::new();
    for review in &reviews {
        *by_location.entry(review.location.as_str()).or_default() += 1;
    }

    println!("{}: {} reviews", path.display(), reviews.len());
    for (location, count) in &by_location {
        let marker = if canonical_location(location).is_some() { "" } else { "  (not on allow-list)" };
        println!("  {:<28} {}{}", location, count, marker);
    }
    if let (Some(first), Some(last)) = (
        reviews.iter().map(|r| r.timestamp).min(),
        reviews.iter().map(|r| r.timestamp).max(),
    ) {
        println!("  timestamps: {} .. {}", first, last);
    }
    Ok(())
}

fn print_usage() {
    println!("reviewlens v{}", env!("CARGO_PKG_VERSION"));
    println!("Usage: reviewlens-server <command>");
    println!("  serve                Start HTTP server (default)");
    println!("  score <text...>      Print sentiment scores for text");
    println!("  check [csv_path]     Validate a review CSV (default: REVIEWS_CSV)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_and_serve_start_server() {
        let config = Config::for_profile("");
        assert!(!dispatch(&config, &args(&["reviewlens-server"])).unwrap());
        assert!(!dispatch(&config, &args(&["reviewlens-server", "serve"])).unwrap());
    }

    #[test]
    fn test_score_requires_text() {
        let config = Config::for_profile("");
        assert!(dispatch(&config, &args(&["reviewlens-server", "score"])).is_err());
        assert!(dispatch(&config, &args(&["reviewlens-server", "score", "great", "food"])).unwrap());
    }

    #[test]
    fn test_check_reports_bad_csv() {
        let tmp = tempfile::tempdir().unwrap();
        let good = tmp.path().join("good.csv");
        std::fs::write(&good, "ReviewBody,Location,Timestamp\nok,\"Denver, Colorado\",2023-03-01 10:00:00\n").unwrap();
        let bad = tmp.path().join("bad.csv");
        std::fs::write(&bad, "ReviewBody,Location,Timestamp\nok,\"Denver, Colorado\",March\n").unwrap();

        let config = Config::for_profile("");
        assert!(dispatch(&config, &args(&["reviewlens-server", "check", good.to_str().unwrap()])).unwrap());
        assert!(dispatch(&config, &args(&["reviewlens-server", "check", bad.to_str().unwrap()])).is_err());
    }

    #[test]
    fn test_unknown_command_prints_usage() {
        let config = Config::for_profile("");
        assert!(dispatch(&config, &args(&["reviewlens-server", "frobnicate"])).unwrap());
    }
}
