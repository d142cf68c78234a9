//! One test per tense rule, plus the contraction resolutions and the
//! documented perfect-passive behavior.

extern crate clausecheck;

use clausecheck::grammar::{self, Tense, Voice};
use clausecheck::token::{AnnotatedToken, Pos, Sentence, VerbTag};

fn verbal(index: usize, text: &str, pos: Pos, tag: Option<VerbTag>, deprel: &str) -> AnnotatedToken {
  AnnotatedToken {
    text: text.to_string(),
    pos,
    verb_tag: tag,
    deprel: deprel.to_string(),
    head: index,
    number: None,
    index,
  }
}

fn word(index: usize, text: &str, pos: Pos, deprel: &str) -> AnnotatedToken {
  verbal(index, text, pos, None, deprel)
}

#[test]
fn present_perfect_progressive() {
  // She has been running.
  let sentence = Sentence::new(vec![
    word(0, "She", Pos::Pron, "nsubj"),
    verbal(1, "has", Pos::Aux, Some(VerbTag::Vbz), "aux"),
    verbal(2, "been", Pos::Aux, Some(VerbTag::Vbn), "aux"),
    verbal(3, "running", Pos::Verb, Some(VerbTag::Vbg), "root"),
  ]);
  assert_eq!(grammar::analyze(&sentence).tense, Tense::PresentPerfectProgressive);
}

#[test]
fn past_perfect_progressive() {
  // She had been running.
  let sentence = Sentence::new(vec![
    word(0, "She", Pos::Pron, "nsubj"),
    verbal(1, "had", Pos::Aux, Some(VerbTag::Vbd), "aux"),
    verbal(2, "been", Pos::Aux, Some(VerbTag::Vbn), "aux"),
    verbal(3, "running", Pos::Verb, Some(VerbTag::Vbg), "root"),
  ]);
  assert_eq!(grammar::analyze(&sentence).tense, Tense::PastPerfectProgressive);
}

#[test]
fn clitic_s_before_gerund_reads_as_is() {
  // She's running.
  let sentence = Sentence::new(vec![
    word(0, "She", Pos::Pron, "nsubj"),
    verbal(1, "'s", Pos::Aux, Some(VerbTag::Vbz), "aux"),
    verbal(2, "running", Pos::Verb, Some(VerbTag::Vbg), "root"),
  ]);
  assert_eq!(grammar::analyze(&sentence).tense, Tense::PresentProgressive);
}

#[test]
fn clitic_s_before_been_reads_as_has() {
  // She's been busy.
  let sentence = Sentence::new(vec![
    word(0, "She", Pos::Pron, "nsubj"),
    verbal(1, "'s", Pos::Aux, Some(VerbTag::Vbz), "aux"),
    verbal(2, "been", Pos::Aux, Some(VerbTag::Vbn), "root"),
    word(3, "busy", Pos::Adj, "acomp"),
  ]);
  assert_eq!(grammar::analyze(&sentence).tense, Tense::PresentPerfect);
}

#[test]
fn clitic_m_reads_as_am() {
  // I'm leaving.
  let sentence = Sentence::new(vec![
    word(0, "I", Pos::Pron, "nsubj"),
    verbal(1, "'m", Pos::Aux, Some(VerbTag::Vbp), "aux"),
    verbal(2, "leaving", Pos::Verb, Some(VerbTag::Vbg), "root"),
  ]);
  assert_eq!(grammar::analyze(&sentence).tense, Tense::PresentProgressive);
}

#[test]
fn clitic_re_reads_as_are() {
  // They're working.
  let sentence = Sentence::new(vec![
    word(0, "They", Pos::Pron, "nsubj"),
    verbal(1, "'re", Pos::Aux, Some(VerbTag::Vbp), "aux"),
    verbal(2, "working", Pos::Verb, Some(VerbTag::Vbg), "root"),
  ]);
  assert_eq!(grammar::analyze(&sentence).tense, Tense::PresentProgressive);
}

#[test]
fn past_progressive() {
  // They were working.
  let sentence = Sentence::new(vec![
    word(0, "They", Pos::Pron, "nsubj"),
    verbal(1, "were", Pos::Aux, Some(VerbTag::Vbd), "aux"),
    verbal(2, "working", Pos::Verb, Some(VerbTag::Vbg), "root"),
  ]);
  assert_eq!(grammar::analyze(&sentence).tense, Tense::PastProgressive);
}

#[test]
fn past_perfect() {
  // She had finished.
  let sentence = Sentence::new(vec![
    word(0, "She", Pos::Pron, "nsubj"),
    verbal(1, "had", Pos::Aux, Some(VerbTag::Vbd), "aux"),
    verbal(2, "finished", Pos::Verb, Some(VerbTag::Vbn), "root"),
  ]);
  assert_eq!(grammar::analyze(&sentence).tense, Tense::PastPerfect);
}

#[test]
fn present_passive() {
  // It is written.
  let sentence = Sentence::new(vec![
    word(0, "It", Pos::Pron, "nsubjpass"),
    verbal(1, "is", Pos::Aux, Some(VerbTag::Vbz), "aux"),
    verbal(2, "written", Pos::Verb, Some(VerbTag::Vbn), "root"),
  ]);
  let analysis = grammar::analyze(&sentence);
  assert_eq!(analysis.tense, Tense::PresentPassive);
  assert_eq!(analysis.voice, Voice::Passive);
}

#[test]
fn past_passive() {
  // It was written.
  let sentence = Sentence::new(vec![
    word(0, "It", Pos::Pron, "nsubjpass"),
    verbal(1, "was", Pos::Aux, Some(VerbTag::Vbd), "aux"),
    verbal(2, "written", Pos::Verb, Some(VerbTag::Vbn), "root"),
  ]);
  let analysis = grammar::analyze(&sentence);
  assert_eq!(analysis.tense, Tense::PastPassive);
  assert_eq!(analysis.voice, Voice::Passive);
}

#[test]
fn simple_present() {
  // She writes.
  let sentence = Sentence::new(vec![
    word(0, "She", Pos::Pron, "nsubj"),
    verbal(1, "writes", Pos::Verb, Some(VerbTag::Vbz), "root"),
  ]);
  assert_eq!(grammar::analyze(&sentence).tense, Tense::SimplePresent);
}

#[test]
fn verbless_sentence_is_unknown() {
  let sentence = Sentence::new(vec![
    word(0, "What", Pos::Pron, "root"),
    word(1, "a", Pos::Det, "det"),
    word(2, "day", Pos::Noun, "npadvmod"),
  ]);
  assert_eq!(grammar::analyze(&sentence).tense, Tense::Unknown);
}

// The "been" guard keeps perfect passives away from the passive rules, so
// "has been written" classifies as plain present perfect, and the perfect
// auxiliary simultaneously vetoes the passive voice reading.
#[test]
fn perfect_passive_reads_as_present_perfect_active() {
  let sentence = Sentence::new(vec![
    word(0, "The", Pos::Det, "det"),
    word(1, "letter", Pos::Noun, "nsubjpass"),
    verbal(2, "has", Pos::Aux, Some(VerbTag::Vbz), "aux"),
    verbal(3, "been", Pos::Aux, Some(VerbTag::Vbn), "aux"),
    verbal(4, "written", Pos::Verb, Some(VerbTag::Vbn), "root"),
  ]);
  let analysis = grammar::analyze(&sentence);
  assert_eq!(analysis.tense, Tense::PresentPerfect);
  assert_eq!(analysis.voice, Voice::Active);
}
