use gate::Gate;
use regex::Regex;

#[test]
fn length_boundary_is_inclusive() {
    let gate = Gate::default();
    assert!(gate.is_acceptable(&"a".repeat(2000)));
    assert!(!gate.is_acceptable(&"a".repeat(2001)));
}

#[test]
fn url_schemes_are_rejected() {
    let gate = Gate::default();
    assert!(!gate.is_acceptable("check out http://example.com"));
    assert!(!gate.is_acceptable("https://example.com at the start"));
    assert!(!gate.is_acceptable("shouting HTTPS://EXAMPLE.COM"));
}

#[test]
fn bare_domains_pass() {
    let gate = Gate::default();
    assert!(gate.is_acceptable("check out example.com"));
}

#[test]
fn empty_text_passes() {
    assert!(Gate::default().is_acceptable(""));
}

#[test]
fn custom_patterns_replace_the_defaults() {
    let gate = Gate::new(100, vec![Regex::new(r"(?i)forbidden").unwrap()]);
    assert!(!gate.is_acceptable("that word is FORBIDDEN here"));
    // The stock URL pattern is gone once operators supply their own list.
    assert!(gate.is_acceptable("http://example.com"));
}

#[test]
fn repeated_calls_agree() {
    let gate = Gate::default();
    let text = "hello there";
    assert_eq!(gate.is_acceptable(text), gate.is_acceptable(text));
}

#[test]
fn length_counts_chars_not_bytes() {
    let gate = Gate::new(4, Vec::new());
    // Four umlauts are eight bytes but four chars.
    assert!(gate.is_acceptable("üüüü"));
    assert!(!gate.is_acceptable("üüüüü"));
}
