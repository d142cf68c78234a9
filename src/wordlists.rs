//! Closed word lists shared by the grammar rules, initialized once.

use std::collections::HashSet;

lazy_static! {
  /// forms of "be" acting as copula or passive/progressive auxiliary
  pub static ref COPULAR_FORMS: HashSet<&'static str> =
    ["am", "is", "are", "was", "were", "be", "been"]
      .iter()
      .cloned()
      .collect();

  /// perfect auxiliaries; their presence vetoes the plain-passive reading
  pub static ref PERFECT_AUXILIARIES: HashSet<&'static str> =
    ["have", "has", "had"].iter().cloned().collect();

  /// nouns conventionally used without an article ("go to school",
  /// "watch TV"), exempt from the article-usage check
  pub static ref ARTICLE_EXEMPT_NOUNS: HashSet<&'static str> = [
    "school",
    "home",
    "work",
    "breakfast",
    "lunch",
    "dinner",
    "yesterday",
    "today",
    "tomorrow",
    "tv",
    "television",
  ]
  .iter()
  .cloned()
  .collect();
}
