//! Common types and utilities for the jsscope resolver.
//!
//! This crate provides the foundational types shared by the AST and the
//! resolver:
//! - Binding marks (`Mark`, `MarkAllocator`)
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, message templates)
//! - Centralized limits

// Marks - opaque binding contexts
pub mod mark;
pub use mark::{Mark, MarkAllocator};

// Diagnostic types and message lookup
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes, format_message,
};

// Centralized limits and thresholds
pub mod limits;
