//! Utility modules for the Portalist application.
//!
//! This module contains common utility functions and helpers that are used
//! throughout the application. These utilities provide functionality for
//! date/time handling and other cross-cutting concerns.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date and time formatting, parsing, and manipulation functions

pub mod datetime;
