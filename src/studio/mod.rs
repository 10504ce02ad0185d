// VideoGen Studio Modules
// Copyright (c) 2026 Xing_The_Creator | VideoGen AI

pub mod controller;
pub mod dropzone;
pub mod input;
pub mod metadata;
pub mod schedule;
pub mod selection;
pub mod showcase;
pub mod steps;
pub mod tracker;

pub use controller::StudioController;
