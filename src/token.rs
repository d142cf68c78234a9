//! Token-level representation of a dependency-parsed sentence, the input
//! consumed by the grammar classifier. Tokens carry a coarse part-of-speech
//! tag, an optional fine-grained verb-form tag, a dependency relation to a
//! governing token, and an optional morphological number feature.

use std::fmt;

/// Coarse part-of-speech category, following the Universal Dependencies UPOS
/// vocabulary. Only the variants the grammar rules inspect get their own
/// entry; everything else collapses into `Other`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Pos {
  Verb,
  Aux,
  Noun,
  Propn,
  Det,
  Pron,
  Adj,
  Other,
}

impl From<&str> for Pos {
  fn from(tag: &str) -> Pos {
    use Pos::*;
    match tag {
      "VERB" => Verb,
      "AUX" => Aux,
      "NOUN" => Noun,
      "PROPN" => Propn,
      "DET" => Det,
      "PRON" => Pron,
      "ADJ" => Adj,
      _ => Other,
    }
  }
}

impl fmt::Display for Pos {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    use Pos::*;
    let val = match self {
      Verb => "VERB",
      Aux => "AUX",
      Noun => "NOUN",
      Propn => "PROPN",
      Det => "DET",
      Pron => "PRON",
      Adj => "ADJ",
      Other => "X",
    };
    write!(fmt, "{}", val)
  }
}

/// Fine-grained verb-form tag (Penn Treebank vocabulary, restricted to the
/// forms the tense rules distinguish).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VerbTag {
  /// present participle / gerund ("writing")
  Vbg,
  /// past participle ("written")
  Vbn,
  /// simple past ("wrote")
  Vbd,
  /// present, non-3rd-singular ("write")
  Vbp,
  /// present, 3rd-singular ("writes")
  Vbz,
}

impl VerbTag {
  /// Maps a Penn Treebank XPOS tag onto a verb-form tag; non-verb tags
  /// (and the bare infinitive "VB") yield `None`.
  pub fn from_tag(tag: &str) -> Option<VerbTag> {
    match tag {
      "VBG" => Some(VerbTag::Vbg),
      "VBN" => Some(VerbTag::Vbn),
      "VBD" => Some(VerbTag::Vbd),
      "VBP" => Some(VerbTag::Vbp),
      "VBZ" => Some(VerbTag::Vbz),
      _ => None,
    }
  }
}

/// Morphological number feature, from the UD `Number=Sing|Plur` annotation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Number {
  Singular,
  Plural,
}

/// A single annotated token of a parsed sentence.
#[derive(Clone, Debug)]
pub struct AnnotatedToken {
  /// surface string
  pub text: String,
  /// coarse part-of-speech category
  pub pos: Pos,
  /// fine-grained verb-form tag, when the token is a verb form
  pub verb_tag: Option<VerbTag>,
  /// dependency relation to the governing token (open vocabulary,
  /// e.g. "nsubj", "aux", "pobj")
  pub deprel: String,
  /// position of the governing token; a root token points at itself
  pub head: usize,
  /// morphological number, when annotated
  pub number: Option<Number>,
  /// 0-based position in the sentence
  pub index: usize,
}

impl AnnotatedToken {
  /// lowercased surface form, for lexical matching
  pub fn lower(&self) -> String { self.text.to_lowercase() }

  /// whether the token is a verb or auxiliary
  pub fn is_verbal(&self) -> bool { self.pos == Pos::Verb || self.pos == Pos::Aux }
}

/// An ordered, immutable sequence of annotated tokens. Token `index` values
/// are contiguous and equal to sequence position, so neighbor lookups are
/// plain array accesses.
#[derive(Clone, Debug, Default)]
pub struct Sentence {
  tokens: Vec<AnnotatedToken>,
}

impl Sentence {
  /// Wraps a token sequence. The caller (normally a parser backend) is
  /// responsible for the index-contiguity contract.
  pub fn new(tokens: Vec<AnnotatedToken>) -> Sentence {
    debug_assert!(tokens.iter().enumerate().all(|(i, t)| t.index == i));
    Sentence { tokens }
  }

  /// the underlying token slice
  pub fn tokens(&self) -> &[AnnotatedToken] { &self.tokens }

  /// token at the given position, if in range
  pub fn get(&self, index: usize) -> Option<&AnnotatedToken> { self.tokens.get(index) }

  /// the token immediately before the given one, `None` at the left boundary
  pub fn preceding(&self, token: &AnnotatedToken) -> Option<&AnnotatedToken> {
    if token.index == 0 {
      None
    } else {
      self.tokens.get(token.index - 1)
    }
  }

  /// the token immediately after the given one, `None` at the right boundary
  pub fn following(&self, token: &AnnotatedToken) -> Option<&AnnotatedToken> {
    self.tokens.get(token.index + 1)
  }

  /// the tokens governed by the token at `head`, excluding the head itself
  /// (a root token formally governs itself)
  pub fn dependents(&self, head: usize) -> impl Iterator<Item = &AnnotatedToken> + '_ {
    self
      .tokens
      .iter()
      .filter(move |t| t.head == head && t.index != head)
  }

  /// number of tokens
  pub fn len(&self) -> usize { self.tokens.len() }

  /// whether the sentence has no tokens
  pub fn is_empty(&self) -> bool { self.tokens.is_empty() }

  /// the surface text, reassembled with single spaces
  pub fn plaintext(&self) -> String {
    self
      .tokens
      .iter()
      .map(|t| t.text.as_str())
      .collect::<Vec<_>>()
      .join(" ")
  }
}
