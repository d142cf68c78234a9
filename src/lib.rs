//! # The `clausecheck` library
//! Rule-based grammar-feature classification for English sentences.
//! Consumes dependency-parsed, morphologically annotated token sequences and
//! classifies tense, voice, clause structure, subject-verb agreement and
//! article usage.

#![deny(
  missing_docs,
  trivial_casts,
  trivial_numeric_casts,
  unused_import_braces,
  unused_qualifications
)]

#[macro_use]
extern crate lazy_static;
extern crate log;
extern crate regex;
extern crate serde;
extern crate thiserror;

pub mod grammar;
pub mod parser;
pub mod token;
pub mod wordlists;
