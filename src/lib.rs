//! Portalist - A Terminal User Interface (TUI) for a student portal
//!
//! This library provides a terminal-based client for a student-portal
//! REST API: a social feed with posts, a folder/module content browser,
//! static lab-information pages, and a persisted light/dark theme that
//! is reflected into the terminal chrome. The UI is built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - Portal REST API client and data models
//! * [`config`] - Application configuration management
//! * [`router`] - Route parsing and navigation rules
//! * [`session`] - Current user and edit capability
//! * [`theme`] - Theme preference store and terminal chrome sync
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Portal API client, data models and the data-provider seam
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Route parsing and the navigation/redirect rules
pub mod router;

/// Session state: current user and edit capability
pub mod session;

/// Theme preference store and terminal chrome synchronization
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

// Re-export the portal data models for convenient access
pub use api::models::{Folder, Module, Post, User};
