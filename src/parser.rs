//! Parser backends supplying annotated sentences to the classifier.
//!
//! The classifier itself only ever sees a `Sentence`; everything about how
//! that sentence was obtained lives behind the [`Parse`] trait so that a
//! missing language model surfaces at construction time and tests can inject
//! a double. Two backends are provided: a reader for already-annotated
//! CoNLL-U text, and a wrapper around an external tagging command that emits
//! CoNLL-U for raw text.

use crate::token::{AnnotatedToken, Number, Pos, Sentence, VerbTag};
use regex::Regex;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

/// Failures of a parser backend. Classification of an already-built
/// `Sentence` never produces these.
#[derive(Debug, Error)]
pub enum ParserError {
  /// the backend cannot be initialized or reached; fatal to the analysis
  /// session, callers must not continue with a degraded setup
  #[error("parser backend unavailable: {0}")]
  Unavailable(String),
  /// the backend emitted output that violates the token contract
  #[error("malformed parser output at line {line}: {message}")]
  Malformed {
    /// 1-based input line
    line: usize,
    /// what was wrong with it
    message: String,
  },
}

/// The single capability the classifier depends on: turn text into an
/// annotated sentence.
pub trait Parse {
  /// Parses `text` into a `Sentence` honoring the index-contiguity contract.
  fn parse(&self, text: &str) -> Result<Sentence, ParserError>;
}

lazy_static! {
  // multiword-token ranges ("3-4") and empty nodes ("5.1") carry no parse
  static ref UNPARSED_ROW_ID: Regex = Regex::new(r"^\d+[-.]\d+$").unwrap();
  static ref NUMBER_FEATURE: Regex = Regex::new(r"(?:^|\|)Number=(Sing|Plur)(?:\||$)").unwrap();
}

/// Reads one sentence of CoNLL-U formatted annotated text. Comment lines and
/// rows without a parse are skipped, and the remaining word rows are
/// re-numbered so that token indices stay contiguous.
#[derive(Copy, Clone, Debug, Default)]
pub struct ConlluReader;

impl Parse for ConlluReader {
  fn parse(&self, text: &str) -> Result<Sentence, ParserError> {
    let mut rows: Vec<(usize, Vec<&str>)> = Vec::new();
    for (line_index, line) in text.lines().enumerate() {
      let line = line.trim_end();
      if line.is_empty() || line.starts_with('#') {
        continue;
      }
      let fields: Vec<&str> = line.split('\t').collect();
      if fields.len() < 8 {
        return Err(ParserError::Malformed {
          line: line_index + 1,
          message: format!(
            "expected at least 8 tab-separated fields, found {}",
            fields.len()
          ),
        });
      }
      if UNPARSED_ROW_ID.is_match(fields[0]) {
        continue;
      }
      rows.push((line_index + 1, fields));
    }

    let mut tokens = Vec::with_capacity(rows.len());
    for (position, (line, fields)) in rows.iter().enumerate() {
      let head_id: usize = fields[6].parse().map_err(|_| ParserError::Malformed {
        line: *line,
        message: format!("head field \"{}\" is not a token id", fields[6]),
      })?;
      if head_id > rows.len() {
        return Err(ParserError::Malformed {
          line: *line,
          message: format!("head id {} points past the sentence", head_id),
        });
      }
      // CoNLL-U heads are 1-based with 0 marking the root; the root token
      // governs itself in our representation
      let head = if head_id == 0 { position } else { head_id - 1 };
      tokens.push(AnnotatedToken {
        text: fields[1].to_string(),
        pos: Pos::from(fields[3]),
        verb_tag: VerbTag::from_tag(fields[4]),
        deprel: fields[7].to_string(),
        head,
        number: NUMBER_FEATURE.captures(fields[5]).map(|c| {
          if &c[1] == "Sing" {
            Number::Singular
          } else {
            Number::Plural
          }
        }),
        index: position,
      });
    }
    Ok(Sentence::new(tokens))
  }
}

/// Tags raw text by piping it through an external UDPipe-style command that
/// writes CoNLL-U on stdout. The executable is probed at construction;
/// a missing backend is surfaced there and never masked.
pub struct ExternalTagger {
  command: PathBuf,
  args: Vec<String>,
  reader: ConlluReader,
}

impl ExternalTagger {
  /// Probes the tagger executable.
  pub fn new<P: AsRef<Path>>(command: P) -> Result<ExternalTagger, ParserError> {
    let command = command.as_ref().to_path_buf();
    if !command.is_file() {
      return Err(ParserError::Unavailable(format!(
        "tagger executable not found at {}",
        command.display()
      )));
    }
    log::info!("tagger backend ready at {}", command.display());
    Ok(ExternalTagger {
      command,
      args: Vec::new(),
      reader: ConlluReader,
    })
  }

  /// Sets extra command-line arguments passed to the tagger.
  pub fn with_args<S: AsRef<str>>(mut self, args: &[S]) -> ExternalTagger {
    self.args = args.iter().map(|a| a.as_ref().to_string()).collect();
    self
  }
}

impl Parse for ExternalTagger {
  fn parse(&self, text: &str) -> Result<Sentence, ParserError> {
    let launch_failure =
      |err: &dyn std::fmt::Display| ParserError::Unavailable(format!("{}: {}", self.command.display(), err));
    let mut child = Command::new(&self.command)
      .args(&self.args)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::null())
      .spawn()
      .map_err(|e| launch_failure(&e))?;
    {
      let stdin = child
        .stdin
        .as_mut()
        .ok_or_else(|| launch_failure(&"stdin not captured"))?;
      stdin
        .write_all(text.as_bytes())
        .map_err(|e| launch_failure(&e))?;
    }
    drop(child.stdin.take());
    let output = child.wait_with_output().map_err(|e| launch_failure(&e))?;
    if !output.status.success() {
      return Err(ParserError::Unavailable(format!(
        "tagger exited with {}",
        output.status
      )));
    }
    let conllu = String::from_utf8_lossy(&output.stdout);
    self.reader.parse(&conllu)
  }
}
