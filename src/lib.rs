//! cursor-deploy library
//!
//! Core functionality for deploying a Cursor rules/skills template into a
//! project: template tree discovery, copy planning, and git initialization.

pub mod template;
