use anyhow::Context;
use regex::Regex;
use std::fs;

/// Marker printed by the simulator ahead of each reported rate. The capture
/// requires digits on both sides of the dot, matching what the simulator
/// actually emits.
const HIT_RATE_PATTERN: &str = r"TLB hit rate: (\d+\.\d+)";

/// Read the results log and return every reported hit rate, in file order.
///
/// Expected occurrences (anywhere in the surrounding text):
/// TLB hit rate: 0.9273
///
/// A log with no matches is not an error: a WARN is printed and the empty
/// sequence is returned, leaving every group average undefined downstream.
pub fn parse_results_file(path: &str) -> anyhow::Result<Vec<f64>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read results file {}", path))?;

    let rates = extract_hit_rates(&text)?;
    if rates.is_empty() {
        eprintln!("WARN: no TLB hit rate entries found in {}", path);
    }

    Ok(rates)
}

/// Scan raw log text for hit-rate matches. Split out from the file read so
/// tests can feed text directly.
pub fn extract_hit_rates(text: &str) -> anyhow::Result<Vec<f64>> {
    let re = Regex::new(HIT_RATE_PATTERN)?;

    let mut out = Vec::new();
    for caps in re.captures_iter(text) {
        let value = caps[1]
            .parse::<f64>()
            .with_context(|| format!("bad hit rate value: {}", &caps[1]))?;
        out.push(value);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_all_matches_in_file_order() {
        let text = "run 1 done\nTLB hit rate: 0.25\nnoise line\n\
                    stats: TLB hit rate: 0.50 (warm)\nTLB hit rate: 0.75\n";
        let rates = extract_hit_rates(text).unwrap();
        assert_eq!(rates, vec![0.25, 0.50, 0.75]);
    }

    #[test]
    fn round_trips_a_formatted_value() {
        let value = 0.9273_f64;
        let text = format!("TLB hit rate: {}", value);
        let rates = extract_hit_rates(&text).unwrap();
        assert_eq!(rates.len(), 1);
        assert!((rates[0] - value).abs() < 1e-12);
    }

    #[test]
    fn ignores_near_misses() {
        // No dot, wrong marker, trailing dot: none of these should match.
        let text = "TLB hit rate: 42\nTLB miss rate: 0.5\nTLB hit rate: 3.\n";
        let rates = extract_hit_rates(text).unwrap();
        assert_eq!(rates, Vec::<f64>::new());
    }

    #[test]
    fn empty_text_yields_empty_sequence() {
        assert_eq!(extract_hit_rates("").unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = parse_results_file("/nonexistent/results.txt").unwrap_err();
        assert!(err.to_string().contains("read results file"));
    }
}
