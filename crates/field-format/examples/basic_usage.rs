//! Validates a handful of form fields and prints the verdicts.
//!
//! Run with `RUST_LOG=field_format=trace` to see each evaluation.

use field_format::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), MatcherError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let matcher = TypeMatcher::global();
    let fields = [
        ("NAME", r"O\'Brien"),
        ("POST_CODE", "75001!"),
        ("PHONE_NUMBER", "+33 (0)1-23-45"),
        ("MESSAGE", "HI <B>"),
        ("URL", "https://пример.рф/страница"),
    ];

    for (type_name, value) in fields {
        let outcome = matcher.validate_named(type_name, value)?;
        println!(
            "{type_name:<14} {:<30} {}",
            outcome.normalized_value,
            if outcome.valid { "ok" } else { "invalid" }
        );
    }

    match matcher.validate_named("SHOE_SIZE", "42") {
        Err(err) => println!("{}: {err}", err.code()),
        Ok(_) => unreachable!("SHOE_SIZE is not a field type"),
    }

    Ok(())
}
