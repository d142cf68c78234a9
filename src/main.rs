extern crate clausecheck;
extern crate env_logger;

use clausecheck::grammar;
use clausecheck::parser::{ConlluReader, Parse};
use std::fs;
use std::io::{self, Read};
use std::process;

/// Reads CoNLL-U from the given files (or stdin when none are given),
/// splits it into sentences on blank lines and prints the grammar
/// classification for each.
fn main() {
  env_logger::init();

  let paths: Vec<String> = std::env::args().skip(1).collect();
  let input = match read_input(&paths) {
    Ok(input) => input,
    Err(e) => {
      eprintln!("clausecheck: {}", e);
      process::exit(1);
    },
  };

  let reader = ConlluReader;
  for block in input.split("\n\n").filter(|b| !b.trim().is_empty()) {
    let sentence = match reader.parse(block) {
      Ok(sentence) => sentence,
      Err(e) => {
        eprintln!("clausecheck: {}", e);
        process::exit(1);
      },
    };
    if sentence.is_empty() {
      continue;
    }
    // prefer the annotated surface text when the block carries one
    let text = block
      .lines()
      .find_map(|l| l.strip_prefix("# text = "))
      .map(|t| t.to_string())
      .unwrap_or_else(|| sentence.plaintext());
    println!("{}", text);
    println!("{}", grammar::analyze(&sentence));
    println!();
  }
}

fn read_input(paths: &[String]) -> io::Result<String> {
  if paths.is_empty() {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    return Ok(buffer);
  }
  let mut buffer = String::new();
  for path in paths {
    buffer.push_str(&fs::read_to_string(path)?);
    buffer.push('\n');
  }
  Ok(buffer)
}
