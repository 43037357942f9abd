//! Backend API
//!
//! HTTP client functions and wire types for the EmotionAI REST API.

pub mod client;

pub use client::*;
