//! Advice classification for scorecast forecasts.
//!
//! Turns the growth rates and distraction factor derived by one engine run
//! into a short natural-language verdict. Pure, total, deterministic: no
//! state survives between calls and the same inputs always produce the
//! same message.

pub mod classifier;

pub use classifier::{AdviceMessage, classify};
