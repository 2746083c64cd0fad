//! Inline accent markup.
//!
//! Text fields may wrap spans in `*asterisks*` to mark them for accent
//! coloring. `"Scale *without* limits"` splits into three runs with the
//! middle one accented. A `*` with no non-empty closing partner is literal.

/// A contiguous span of text with a single accent state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccentRun {
    pub text: String,
    pub accent: bool,
}

impl AccentRun {
    fn plain(text: &str) -> Self {
        Self { text: text.to_string(), accent: false }
    }

    fn accented(text: &str) -> Self {
        Self { text: text.to_string(), accent: true }
    }
}

/// Split a text field into accent and non-accent runs.
///
/// Text containing no delimiter comes back as exactly one unaccented run,
/// so parsing is idempotent on plain text. Empty spans (`**`) never match.
pub fn parse_accent_runs(text: &str) -> Vec<AccentRun> {
    if !text.contains('*') {
        return vec![AccentRun::plain(text)];
    }

    let mut runs = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(rel) = text[cursor..].find('*') {
        let open = cursor + rel;
        match text[open + 1..].find('*') {
            // Adjacent `**` or unterminated `*`: keep scanning past it.
            Some(0) | None => cursor = open + 1,
            Some(len) => {
                let close = open + 1 + len;
                if open > plain_start {
                    runs.push(AccentRun::plain(&text[plain_start..open]));
                }
                runs.push(AccentRun::accented(&text[open + 1..close]));
                plain_start = close + 1;
                cursor = plain_start;
            }
        }
    }

    if plain_start < text.len() {
        runs.push(AccentRun::plain(&text[plain_start..]));
    }
    if runs.is_empty() {
        runs.push(AccentRun::plain(text));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_one_unaccented_run() {
        let runs = parse_accent_runs("Hello world");
        assert_eq!(runs, vec![AccentRun::plain("Hello world")]);
    }

    #[test]
    fn empty_text_is_one_unaccented_run() {
        assert_eq!(parse_accent_runs(""), vec![AccentRun::plain("")]);
    }

    #[test]
    fn splits_around_accent_span() {
        let runs = parse_accent_runs("Hello *world* today");
        assert_eq!(
            runs,
            vec![
                AccentRun::plain("Hello "),
                AccentRun::accented("world"),
                AccentRun::plain(" today"),
            ]
        );
    }

    #[test]
    fn leading_and_trailing_spans() {
        let runs = parse_accent_runs("*a* mid *b*");
        assert_eq!(
            runs,
            vec![
                AccentRun::accented("a"),
                AccentRun::plain(" mid "),
                AccentRun::accented("b"),
            ]
        );
    }

    #[test]
    fn unterminated_delimiter_stays_literal() {
        let runs = parse_accent_runs("50% *faster");
        assert_eq!(runs, vec![AccentRun::plain("50% *faster")]);
    }

    #[test]
    fn empty_span_stays_literal() {
        let runs = parse_accent_runs("a ** b");
        assert_eq!(runs, vec![AccentRun::plain("a ** b")]);
    }

    #[test]
    fn double_star_then_real_span() {
        let runs = parse_accent_runs("**a*");
        assert_eq!(
            runs,
            vec![AccentRun::plain("*"), AccentRun::accented("a")]
        );
    }
}
