//! CLI infrastructure for the Tic-Tac-Total toolkit
//!
//! This module provides the command-line interface for choosing moves,
//! playing games between agents, and analyzing the game tree.

pub mod commands;
pub mod output;
