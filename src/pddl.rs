//! Main module for pddl-reader library functionality
//!
//! Data flow: raw text -> [`lexing`] -> token stream -> [`parsing`] -> nested
//! [`ast::Node`] lists. [`loader`], [`formats`] and [`config`] sit around that core for
//! the command-line tool.

pub mod ast;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
