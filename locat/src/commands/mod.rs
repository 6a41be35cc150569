// locat/src/commands/mod.rs

pub mod locat;
