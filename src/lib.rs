//! Core integration layer for the EMOFIND sentiment screen.
//!
//! Covers the contract between the input form and the Gemini
//! text-generation API: prompt construction, the network call, response
//! cleaning and parsing, and the state machine the presentation layer
//! renders. Rendering itself lives elsewhere.

pub mod clients;
pub mod config;
pub mod controller;
pub mod error;
pub mod prompts;
pub mod schemas;

// Loads .env if present and silently ignores if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
