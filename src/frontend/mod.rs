//! Language front end
//!
//! This module contains the lexical analyzer. Scanning is the first
//! stage of the pipeline: raw source text in, a flat token sequence out.

pub mod lexer;
