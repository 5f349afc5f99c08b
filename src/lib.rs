//! Pokedex TUI - a reference viewer over the public PokeAPI
//!
//! This library exposes the application's modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod matchup;
pub mod reducer;
pub mod sprite;
pub mod sprite_backend;
pub mod state;
