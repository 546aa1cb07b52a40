//! Social network clients used by Pulse.
//!
//! Currently only the Twitter/X recent-search client is implemented.
pub mod twitter;
