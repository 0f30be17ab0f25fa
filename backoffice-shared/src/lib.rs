pub mod money;
pub mod pii;

pub use money::{format_amount, parse_amount, parse_amount_or_zero, percent_of, round_half_up};
pub use pii::Masked;
