#![deny(clippy::pedantic)]
pub mod runner;
