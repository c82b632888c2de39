//! Terminal output helpers for the CLI
//!
//! Styled symbols on a terminal, bracketed plain-text markers in CI or when
//! output is piped.

mod context;
mod output;

pub use context::UiContext;
pub use output::{
    intro, key_value, key_value_status, step_error, step_info, step_ok_detail, step_warn_hint,
};
