/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Balance color:
/// \>0 → yellow (still owed)
/// 0 → green (settled)
/// \<0 → red
pub fn color_for_balance(cents: i64) -> &'static str {
    if cents > 0 {
        YELLOW
    } else if cents == 0 {
        GREEN
    } else {
        RED
    }
}

/// Paid rows are greyed out, unpaid rows keep the default color.
pub fn color_for_paid(paid: bool) -> &'static str {
    if paid { GREY } else { RESET }
}
