//! Tense classification, re-architected from a cascade of conditionals into
//! an explicit ordered rule table: signals are collected in a single scan of
//! the verbal tokens, then the rules are tried top-to-bottom and the first
//! match wins. The ordering encodes specificity: perfect progressive needs
//! both the "been" participle and a gerund, so it is tried before plain
//! progressive and plain perfect; the passive readings come after perfect so
//! that have/has/had combinations are already claimed.

use super::Tense;
use crate::token::{Sentence, VerbTag};

// auxiliary sets matched per rule; contracted forms stay in the sets because
// a contraction with deprel `aux` keeps its surface text
const PERFECT_PRESENT_AUX: &[&str] = &["have", "has", "'ve", "'s"];
const PERFECT_PAST_AUX: &[&str] = &["had"];
const PROGRESSIVE_PRESENT_AUX: &[&str] = &["am", "is", "are", "'m", "'s", "'re"];
const PROGRESSIVE_PAST_AUX: &[&str] = &["was", "were"];
const PASSIVE_PRESENT_AUX: &[&str] = &["am", "is", "are"];

/// Everything the tense rules look at, gathered in one pass.
#[derive(Debug, Default)]
pub(crate) struct TenseSignals {
  /// lowercased auxiliary texts, with contractions resolved to full forms
  auxiliaries: Vec<String>,
  /// any VBG token, or a `'s` contraction followed by one
  has_gerund: bool,
  /// any VBN token
  has_past_participle: bool,
  /// a VBN token whose surface text is exactly "been"
  has_been_participle: bool,
  /// any VBD token
  has_simple_past: bool,
  /// any VBP or VBZ token
  has_finite_present: bool,
}

impl TenseSignals {
  pub(crate) fn collect(sentence: &Sentence) -> TenseSignals {
    let mut signals = TenseSignals::default();
    for token in sentence.tokens().iter().filter(|t| t.is_verbal()) {
      match token.verb_tag {
        Some(VerbTag::Vbg) => signals.has_gerund = true,
        Some(VerbTag::Vbn) => {
          signals.has_past_participle = true;
          if token.lower() == "been" {
            signals.has_been_participle = true;
          }
        },
        Some(VerbTag::Vbd) => signals.has_simple_past = true,
        Some(VerbTag::Vbp) | Some(VerbTag::Vbz) => signals.has_finite_present = true,
        _ => {},
      }
      let lower = token.lower();
      match lower.as_str() {
        "'s" => match sentence.following(token) {
          Some(next) if next.verb_tag == Some(VerbTag::Vbg) => {
            // "she's running": the clitic is a progressive "is"
            signals.auxiliaries.push("is".to_string());
            signals.has_gerund = true;
          },
          // a following "been" and the bare default both read as
          // perfect "has"
          _ => signals.auxiliaries.push("has".to_string()),
        },
        "'ve" => signals.auxiliaries.push("have".to_string()),
        "'m" => signals.auxiliaries.push("am".to_string()),
        "'re" => signals.auxiliaries.push("are".to_string()),
        _ if token.deprel == "aux" => signals.auxiliaries.push(lower),
        // a main verb; only its form tag matters
        _ => {},
      }
    }
    signals
  }

  fn any_auxiliary(&self, forms: &[&str]) -> bool {
    self.auxiliaries.iter().any(|a| forms.contains(&a.as_str()))
  }
}

fn present_perfect_progressive(s: &TenseSignals) -> bool {
  s.has_been_participle && s.has_gerund && s.any_auxiliary(PERFECT_PRESENT_AUX)
}

fn past_perfect_progressive(s: &TenseSignals) -> bool {
  s.has_been_participle && s.has_gerund && s.any_auxiliary(PERFECT_PAST_AUX)
}

fn present_progressive(s: &TenseSignals) -> bool {
  s.has_gerund && s.any_auxiliary(PROGRESSIVE_PRESENT_AUX)
}

fn past_progressive(s: &TenseSignals) -> bool {
  s.has_gerund && s.any_auxiliary(PROGRESSIVE_PAST_AUX)
}

fn present_perfect(s: &TenseSignals) -> bool {
  s.has_past_participle && s.any_auxiliary(PERFECT_PRESENT_AUX)
}

fn past_perfect(s: &TenseSignals) -> bool {
  s.has_past_participle && s.any_auxiliary(PERFECT_PAST_AUX)
}

// The `!has_been_participle` guard keeps the passive readings away from
// perfect constructions, which also means a perfect passive like "has been
// written" never reaches these rules and classifies as plain perfect.
fn present_passive(s: &TenseSignals) -> bool {
  s.has_past_participle && !s.has_been_participle && s.any_auxiliary(PASSIVE_PRESENT_AUX)
}

fn past_passive(s: &TenseSignals) -> bool {
  s.has_past_participle && !s.has_been_participle && s.any_auxiliary(PROGRESSIVE_PAST_AUX)
}

fn simple_past(s: &TenseSignals) -> bool { s.has_simple_past }

fn simple_present(s: &TenseSignals) -> bool { s.has_finite_present }

/// The ordered decision table. First match wins; reordering entries changes
/// the classifier's semantics.
const TENSE_RULES: &[(Tense, fn(&TenseSignals) -> bool)] = &[
  (Tense::PresentPerfectProgressive, present_perfect_progressive),
  (Tense::PastPerfectProgressive, past_perfect_progressive),
  (Tense::PresentProgressive, present_progressive),
  (Tense::PastProgressive, past_progressive),
  (Tense::PresentPerfect, present_perfect),
  (Tense::PastPerfect, past_perfect),
  (Tense::PresentPassive, present_passive),
  (Tense::PastPassive, past_passive),
  (Tense::SimplePast, simple_past),
  (Tense::SimplePresent, simple_present),
];

/// Classifies the tense of a sentence, `Tense::Unknown` when no rule fires.
pub(crate) fn classify(sentence: &Sentence) -> Tense {
  let signals = TenseSignals::collect(sentence);
  for (tense, applies) in TENSE_RULES {
    if applies(&signals) {
      return *tense;
    }
  }
  Tense::Unknown
}
