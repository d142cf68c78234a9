//! The non-tense facets: voice, clause structure, subject-verb agreement and
//! article usage. Each is an independent pass over the token sequence with a
//! defined fallthrough, so none of them can fail.

use super::{Structure, Voice};
use crate::token::{Pos, Sentence, VerbTag};
use crate::wordlists;

/// A sentence is passive iff a copular form and a past participle are both
/// present and no perfect auxiliary is. Independent of the tense result.
pub(crate) fn voice(sentence: &Sentence) -> Voice {
  let mut has_copula = false;
  let mut has_participle = false;
  let mut has_perfect_auxiliary = false;
  for token in sentence.tokens().iter().filter(|t| t.is_verbal()) {
    let lower = token.lower();
    if wordlists::COPULAR_FORMS.contains(lower.as_str()) {
      has_copula = true;
    }
    if wordlists::PERFECT_AUXILIARIES.contains(lower.as_str()) {
      has_perfect_auxiliary = true;
    }
    if token.verb_tag == Some(VerbTag::Vbn) {
      has_participle = true;
    }
  }
  if has_copula && has_participle && !has_perfect_auxiliary {
    Voice::Passive
  } else {
    Voice::Active
  }
}

/// Coarse clause pattern from the presence of subject, verb and object
/// relations anywhere in the sentence.
pub(crate) fn structure(sentence: &Sentence) -> Structure {
  let has_subject = sentence.tokens().iter().any(|t| t.deprel.contains("subj"));
  let has_verb = sentence.tokens().iter().any(|t| t.is_verbal());
  let has_object = sentence.tokens().iter().any(|t| t.deprel.contains("obj"));
  if has_subject && has_verb {
    if has_object {
      Structure::Svo
    } else {
      Structure::Sv
    }
  } else {
    Structure::Other
  }
}

/// Checks every `nsubj` token against its verbal head: conflicting number
/// annotations fail the sentence. A missing annotation on either side is
/// insufficient evidence, not a disagreement.
pub(crate) fn subject_verb_agreement(sentence: &Sentence) -> bool {
  for token in sentence.tokens().iter().filter(|t| t.deprel == "nsubj") {
    let head = match sentence.get(token.head) {
      Some(head) if head.pos == Pos::Verb => head,
      _ => continue,
    };
    if let (Some(subject_number), Some(head_number)) = (token.number, head.number) {
      if subject_number != head_number {
        return false;
      }
    }
  }
  true
}

/// Every common noun must be preceded by a determiner-like token unless it
/// is conventionally article-less, counted or possessed, or a preposition
/// object. The first bare noun fails the whole sentence.
pub(crate) fn article_usage(sentence: &Sentence) -> bool {
  for token in sentence.tokens().iter().filter(|t| t.pos == Pos::Noun) {
    if wordlists::ARTICLE_EXEMPT_NOUNS.contains(token.lower().as_str()) {
      continue;
    }
    if sentence
      .dependents(token.index)
      .any(|d| d.deprel == "poss" || d.deprel == "nummod")
    {
      continue;
    }
    if token.deprel == "pobj" {
      continue;
    }
    let preceded = match sentence.preceding(token) {
      Some(prev) => matches!(prev.pos, Pos::Det | Pos::Pron | Pos::Adj | Pos::Propn),
      None => false,
    };
    if !preceded {
      return false;
    }
  }
  true
}
