// Household Reuse Platform - API Core
//
// This crate provides the backend API for rehoming household items:
// free giveaways, barter offers, and disposal guidance for items that
// are past reuse.

pub mod common;
pub mod config;
pub mod db;
pub mod domains;
pub mod server;

pub use config::*;
