//! Console reports, rendered as plain text for `println!`.

pub mod dump;
pub mod migrate;
pub mod seed;

const RULE_WIDTH: usize = 60;

/// A full-width line of `c`.
fn rule(c: char) -> String {
    c.to_string().repeat(RULE_WIDTH)
}
