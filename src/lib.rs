// ReelForge Core Library
// Copyright (c) 2026 Xing_The_Creator | ReelForge

pub mod catalog;
pub mod config;
pub mod content_engine;
pub mod error;
pub mod logging;
pub mod queue;
pub mod server;
pub mod state;
