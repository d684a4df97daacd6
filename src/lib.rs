//! A day-keyed to-do list with a terminal UI.
//!
//! Tasks live in memory for the lifetime of the process, grouped by
//! category (personal / professional) and by calendar date. The
//! [`model`] and [`ops`] modules are the state core; [`tui`] is the
//! interactive shell over them.

pub mod cli;
pub mod model;
pub mod ops;
pub mod tui;
