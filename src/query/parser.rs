// Keyword query parser.
//
// The analyst types a short boolean query into a single text box:
//
//   word              required term
//   "exact phrase"    required verbatim substring
//   -word  -(a b)     forbidden term(s)
//   (a OR b)          at least one alternative required
//
// Clauses separated by whitespace are ANDed. Parsing never fails: anything
// the grammar does not recognise (a stray quote, an unclosed paren) becomes
// an ordinary required term containing that character.

use serde::{Deserialize, Serialize};

/// A parsed keyword query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Groups are ANDed together; terms within a group are ORed.
    pub include_groups: Vec<Vec<String>>,
    /// Every phrase must appear verbatim.
    pub exact_phrases: Vec<String>,
    /// None of these may appear.
    pub excludes: Vec<String>,
}

impl Query {
    /// An empty query places no constraint and matches every record.
    pub fn is_empty(&self) -> bool {
        self.include_groups.is_empty() && self.exact_phrases.is_empty() && self.excludes.is_empty()
    }
}

/// Separator between alternatives inside a parenthesized group.
const OR_SEPARATOR: &str = "OR";

/// Parse a query string. Total: every input produces a `Query`.
pub fn parse(query: &str) -> Query {
    let mut parsed = Query::default();

    for token in tokenize(query.trim()) {
        if let Some(phrase) = wrapped(token, '"', '"') {
            let phrase = phrase.trim_matches('"');
            if !phrase.is_empty() {
                parsed.exact_phrases.push(phrase.to_string());
            }
        } else if let Some(inner) = token.strip_prefix('-') {
            let inner = inner.trim().trim_matches(|c: char| c == '(' || c == ')');
            parsed
                .excludes
                .extend(inner.split_whitespace().map(str::to_string));
        } else if let Some(group) = wrapped(token, '(', ')') {
            let alternatives: Vec<String> = group
                .trim_matches(|c: char| c == '(' || c == ')')
                .split(OR_SEPARATOR)
                .map(str::trim)
                .filter(|alt| !alt.is_empty())
                .map(str::to_string)
                .collect();
            // A group left with no alternatives can never be satisfied.
            parsed.include_groups.push(alternatives);
        } else {
            parsed.include_groups.push(vec![token.trim().to_string()]);
        }
    }

    parsed
}

/// Inner text of `token` if it both starts with `open` and ends with `close`.
fn wrapped(token: &str, open: char, close: char) -> Option<&str> {
    if token.chars().count() < 2 {
        return None;
    }
    token.strip_prefix(open)?.strip_suffix(close)
}

/// Split a query into clause tokens.
///
/// Quoted spans, parenthesized spans and negated parenthesized spans are
/// taken whole even when they contain spaces; everything else splits on
/// whitespace.
pub fn tokenize(query: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = query;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        let len = token_len(rest);
        tokens.push(&rest[..len]);
        rest = &rest[len..];
    }

    tokens
}

/// Byte length of the token at the start of `s` (which has no leading space).
fn token_len(s: &str) -> usize {
    if let Some(len) = delimited_len(s, '"', '"') {
        return len;
    }
    if let Some(len) = delimited_len(s, '(', ')') {
        return len;
    }
    if let Some(len) = s.strip_prefix('-').and_then(|r| delimited_len(r, '(', ')')) {
        return len + 1;
    }
    s.find(char::is_whitespace).unwrap_or(s.len())
}

/// Length of a non-empty `open ... close` span at the start of `s`.
fn delimited_len(s: &str, open: char, close: char) -> Option<usize> {
    let body = s.strip_prefix(open)?;
    let end = body.find(close)?;
    if end == 0 {
        return None;
    }
    Some(open.len_utf8() + end + close.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_tokenize_keeps_spans_whole() {
        assert_eq!(
            tokenize(r#"banjir "curah hujan" (jakarta OR bekasi) -(hoaks iklan) x"#),
            vec![
                "banjir",
                r#""curah hujan""#,
                "(jakarta OR bekasi)",
                "-(hoaks iklan)",
                "x"
            ]
        );
    }

    #[test]
    fn test_tokenize_unbalanced_falls_back_to_whitespace() {
        assert_eq!(tokenize(r#""open phrase"#), vec![r#""open"#, "phrase"]);
        assert_eq!(tokenize("(a OR b"), vec!["(a", "OR", "b"]);
        assert_eq!(tokenize(r#""""#), vec![r#""""#]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").is_empty());
        assert!(parse("   \t ").is_empty());
    }

    #[test]
    fn test_parse_all_clause_kinds() {
        let q = parse(r#"banjir "curah hujan" (jakarta OR bekasi) -(hoaks iklan) -spam"#);
        assert_eq!(
            q.include_groups,
            vec![strings(&["banjir"]), strings(&["jakarta", "bekasi"])]
        );
        assert_eq!(q.exact_phrases, strings(&["curah hujan"]));
        assert_eq!(q.excludes, strings(&["hoaks", "iklan", "spam"]));
    }

    #[test]
    fn test_parse_or_group_discards_empty_alternatives() {
        let q = parse("(a OR  OR b OR)");
        assert_eq!(q.include_groups, vec![strings(&["a", "b"])]);
    }

    #[test]
    fn test_parse_stray_characters_become_terms() {
        let q = parse(r#""unclosed (open"#);
        assert_eq!(
            q.include_groups,
            vec![strings(&["\"unclosed"]), strings(&["(open"])]
        );
        let q = parse("\"");
        assert_eq!(q.include_groups, vec![strings(&["\""])]);
    }

    #[test]
    fn test_parse_bare_dash_excludes_nothing() {
        let q = parse("-");
        assert!(q.is_empty());
    }

    #[test]
    fn test_parse_empty_group_is_kept() {
        assert_eq!(parse("()").include_groups, vec![Vec::<String>::new()]);
        assert_eq!(parse("(OR)").include_groups, vec![Vec::<String>::new()]);
        assert_eq!(parse("( OR )").include_groups, vec![Vec::<String>::new()]);
        assert!(!parse("(OR)").is_empty());
    }

    #[test]
    fn test_parse_empty_phrase_is_dropped() {
        assert!(parse(r#""""#).is_empty());
    }
}
