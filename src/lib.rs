// VideoGen Studio Library
// Copyright (c) 2026 Xing_The_Creator | VideoGen AI

pub mod config;
pub mod error;
pub mod state;
pub mod studio;
pub mod window;
