// crates/sharedex-cli/src/cmd/mod.rs

pub mod catalog;
pub mod decode;
pub mod encode;
pub mod inspect;
