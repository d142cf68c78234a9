//! The grammar-feature classifier: a deterministic decision procedure mapping
//! a parsed sentence's token-level annotations to five linguistic facets.
//! The facets are computed by independent passes over the same token
//! sequence; none of them mutates the sentence and none of them can fail.

mod checks;
mod tense;

use crate::parser::{Parse, ParserError};
use crate::token::Sentence;
use serde::Serialize;
use std::fmt;

/// Tense category of a sentence. `Unknown` is the fallthrough when no
/// classification rule matches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Tense {
  /// "She has been running."
  #[serde(rename = "present perfect progressive")]
  PresentPerfectProgressive,
  /// "She had been running."
  #[serde(rename = "past perfect progressive")]
  PastPerfectProgressive,
  /// "She is running."
  #[serde(rename = "present progressive")]
  PresentProgressive,
  /// "She was running."
  #[serde(rename = "past progressive")]
  PastProgressive,
  /// "She has finished."
  #[serde(rename = "present perfect")]
  PresentPerfect,
  /// "She had finished."
  #[serde(rename = "past perfect")]
  PastPerfect,
  /// "It is written."
  #[serde(rename = "present passive")]
  PresentPassive,
  /// "It was written."
  #[serde(rename = "past passive")]
  PastPassive,
  /// "She finished."
  #[serde(rename = "simple past")]
  SimplePast,
  /// "She finishes."
  #[serde(rename = "simple present")]
  SimplePresent,
  /// no rule matched
  #[serde(rename = "unknown")]
  Unknown,
}

impl fmt::Display for Tense {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    use Tense::*;
    let val = match self {
      PresentPerfectProgressive => "present perfect progressive",
      PastPerfectProgressive => "past perfect progressive",
      PresentProgressive => "present progressive",
      PastProgressive => "past progressive",
      PresentPerfect => "present perfect",
      PastPerfect => "past perfect",
      PresentPassive => "present passive",
      PastPassive => "past passive",
      SimplePast => "simple past",
      SimplePresent => "simple present",
      Unknown => "unknown",
    };
    write!(fmt, "{}", val)
  }
}

/// Voice of a sentence. Computed independently of tense; the two facets may
/// disagree on passives expressed with a perfect auxiliary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Voice {
  Active,
  Passive,
}

impl fmt::Display for Voice {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Voice::Active => write!(fmt, "active"),
      Voice::Passive => write!(fmt, "passive"),
    }
  }
}

/// Coarse clause pattern, from the presence of subject, verb and object
/// relations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Structure {
  /// subject, verb and object present
  #[serde(rename = "SVO")]
  Svo,
  /// subject and verb, no object
  #[serde(rename = "SV")]
  Sv,
  /// no recognizable subject-verb core
  #[serde(rename = "other")]
  Other,
}

impl fmt::Display for Structure {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Structure::Svo => write!(fmt, "SVO"),
      Structure::Sv => write!(fmt, "SV"),
      Structure::Other => write!(fmt, "other"),
    }
  }
}

/// The fixed-shape classification result for one sentence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GrammarAnalysis {
  /// tense category, `Unknown` when no rule matched
  pub tense: Tense,
  /// active or passive voice
  pub voice: Voice,
  /// coarse clause pattern
  pub structure: Structure,
  /// false iff an `nsubj` token and its verbal head carry conflicting
  /// number annotations
  pub agreement_ok: bool,
  /// false iff a non-exempt common noun lacks a qualifying preceding token
  pub article_ok: bool,
}

impl fmt::Display for GrammarAnalysis {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    writeln!(fmt, "  tense:      {}", self.tense)?;
    writeln!(fmt, "  voice:      {}", self.voice)?;
    writeln!(fmt, "  structure:  {}", self.structure)?;
    writeln!(
      fmt,
      "  agreement:  {}",
      if self.agreement_ok { "ok" } else { "violation" }
    )?;
    write!(
      fmt,
      "  articles:   {}",
      if self.article_ok { "ok" } else { "violation" }
    )
  }
}

/// Classifies the grammar features of an already-parsed sentence. Pure and
/// total: identical input yields identical output, and every facet has a
/// defined fallthrough, so no well-formed sentence can make this fail.
pub fn analyze(sentence: &Sentence) -> GrammarAnalysis {
  GrammarAnalysis {
    tense: tense::classify(sentence),
    voice: checks::voice(sentence),
    structure: checks::structure(sentence),
    agreement_ok: checks::subject_verb_agreement(sentence),
    article_ok: checks::article_usage(sentence),
  }
}

/// Pairs the classifier with a parser backend, so callers can go straight
/// from raw text to a `GrammarAnalysis`. The backend is injected at
/// construction; a missing backend surfaces there, never here.
pub struct GrammarAnalyzer<P: Parse> {
  parser: P,
}

impl<P: Parse> GrammarAnalyzer<P> {
  /// Wraps a ready parser backend.
  pub fn new(parser: P) -> GrammarAnalyzer<P> { GrammarAnalyzer { parser } }

  /// Parses `text` with the injected backend and classifies the result.
  pub fn analyze_text(&self, text: &str) -> Result<GrammarAnalysis, ParserError> {
    let sentence = self.parser.parse(text)?;
    log::debug!("parsed {} tokens for classification", sentence.len());
    Ok(analyze(&sentence))
  }

  /// the injected parser backend
  pub fn parser(&self) -> &P { &self.parser }
}
