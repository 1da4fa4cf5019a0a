//! Answer normalization and lenient matching
//!
//! Free-text answers are compared in a canonical form so that punctuation,
//! casing and hyphenation differences never cost the player a point, and a
//! small edit-distance tolerance absorbs ordinary typos.

/// Maximum Levenshtein distance still accepted as a near-match.
///
/// Fixed regardless of answer length. Very short answers are therefore more
/// forgiving than they probably should be ("cat" matches "bat"), which is an
/// accepted tradeoff for a friendlier game.
pub const CLOSE_ENOUGH_DISTANCE: usize = 2;

/// Outcome of comparing a player's answer against the canonical one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMatch {
    /// Equal after normalization
    Exact,
    /// Within the edit-distance tolerance
    Close,
    /// Not an acceptable answer
    Miss,
}

impl AnswerMatch {
    /// Whether this outcome counts as a correct answer
    pub fn is_hit(self) -> bool {
        matches!(self, AnswerMatch::Exact | AnswerMatch::Close)
    }
}

/// Reduce free text to its canonical comparable form.
///
/// Lowercases, turns `-` and `_` into spaces, strips `.` and `,`, spells out
/// `&` as "and", and collapses all whitespace runs to single spaces with no
/// leading or trailing space. Idempotent.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '-' | '_' => out.push(' '),
            '.' | ',' => {}
            '&' => out.push_str("and"),
            c => out.extend(c.to_lowercase()),
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Compare a raw player answer against the canonical answer.
pub fn match_answer(input: &str, canonical: &str) -> AnswerMatch {
    let input = normalize(input);
    let canonical = normalize(canonical);

    if input == canonical {
        return AnswerMatch::Exact;
    }
    if levenshtein_distance(&input, &canonical) <= CLOSE_ENOUGH_DISTANCE {
        return AnswerMatch::Close;
    }
    AnswerMatch::Miss
}

/// Levenshtein distance between two strings (chars, not bytes)
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0usize; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b_len {
        matrix[0][j] = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}
