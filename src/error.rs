//! Error types for the depth chart library

use crate::models::JerseyNumber;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("position list cannot be empty")]
    EmptyPositionList,

    #[error("position list contains a blank name")]
    BlankPositionName,

    #[error("position '{position}' appears more than once in the position list")]
    DuplicatePosition { position: String },

    #[error("max depth must be greater than zero")]
    InvalidMaxDepth,

    #[error("position cannot be blank")]
    BlankPosition,

    #[error("position '{position}' does not exist in the depth chart")]
    UnknownPosition { position: String },

    #[error("cannot add player to position '{position}': it has reached the maximum depth of {max_depth}")]
    CapacityExceeded { position: String, max_depth: usize },

    #[error("player #{number} ({name}) already exists at position {position}")]
    DuplicatePlayer {
        number: JerseyNumber,
        name: String,
        position: String,
    },

    #[error("depth {depth} is out of range for a maximum depth of {max_depth}")]
    InvalidDepth { depth: usize, max_depth: usize },
}
