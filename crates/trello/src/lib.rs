//! Trello Integration
//!
//! REST client and card-to-task import.

#![warn(missing_docs)]

pub mod client;
pub mod import;

pub use client::{Board, BoardList, Card, TrelloClient};
pub use import::{extract_complexity, import_tasks, CardSource};
