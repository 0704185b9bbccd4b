mod common;

mod boosts;
mod ranking;
