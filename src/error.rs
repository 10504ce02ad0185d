// VideoGen Error Types
// Copyright (c) 2026 Xing_The_Creator | VideoGen AI

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudioError {
    #[error("a generation run is already in progress")]
    AlreadyRunning,

    #[error("no generation run is in progress")]
    NotRunning,

    #[error("unknown step: {0}")]
    UnknownStep(String),

    #[error("step '{step_id}' cannot move from {from} to {to}")]
    InvalidTransition {
        step_id: String,
        from: &'static str,
        to: &'static str,
    },

    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("input is locked while a generation run is in progress")]
    InputLocked,

    #[error("unknown {kind} style: '{value}'")]
    UnknownStyle { kind: &'static str, value: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type StudioResult<T> = Result<T, StudioError>;
