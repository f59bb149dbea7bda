use thiserror::Error;

use crate::rules::Phase;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot draw from an empty collection")]
    EmptyCollection,
    #[error("Hand already holds the maximum of {capacity} cards")]
    HandFull { capacity: usize },
    #[error("Slot {index} is out of range for a collection of {len} cards")]
    SlotOutOfRange { index: usize, len: usize },
    #[error("Seat {seat} is not at this table")]
    NoSuchSeat { seat: usize },
    #[error("A table needs between {min} and {max} players, got {count}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },
    #[error("Player in seat {seat} carries label {label}")]
    SeatMismatch { seat: usize, label: usize },
    #[error("No valid target under the pointer")]
    InvalidTarget,
    #[error("{action} is not allowed while {phase}")]
    IllegalTransition { action: &'static str, phase: Phase },
    #[error("Seat {seat} is not a computer player")]
    NotComputerTurn { seat: usize },
}
