//! Mobot Library
//!
//! A Telegram bot that helps site owners with review pre-moderation by
//! answering a fixed set of commands.
//!
//! This crate provides the core functionality for:
//! - Routing inbound text to templated replies (commands, menu buttons, keywords)
//! - Loading the bot token and runtime settings from the environment
//! - Long-polling Telegram and sending replies one message at a time

pub mod commands;
pub mod config;
pub mod telegram;
