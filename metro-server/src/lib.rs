//! Metro route planner server.
//!
//! Builds an undirected station graph from a table of metro lines and
//! answers: "what is the fewest-stops way from here to there, and where
//! do I change lines?"

pub mod config;
pub mod domain;
pub mod lines;
pub mod network;
pub mod planner;
pub mod stats;
pub mod web;
