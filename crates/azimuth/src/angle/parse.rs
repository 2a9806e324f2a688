//! Recognizers for the supported angle notations.

/// Combine a degrees/minutes/seconds triple into decimal degrees.
///
/// The association is fixed: seconds fold into minutes before minutes fold
/// into degrees. The result table is an interchange format downstream
/// tooling compares bit-for-bit, so keep the order exactly as written.
#[inline]
pub fn dms_to_degrees(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    ((seconds / 60.0) + minutes) / 60.0 + degrees
}

/// Parse a free-form angle string into decimal degrees.
///
/// Returns `None` for anything that does not resolve to a finite value.
/// `0.0` is a valid angle; callers must not conflate it with failure.
pub fn parse_angle(text: &str) -> Option<f64> {
    // Locale tolerance: any comma is a decimal separator.
    let normalized = text.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    symbol_dms(&normalized)
        .or_else(|| whitespace_triple(&normalized))
        .or_else(|| separated_triple(&normalized, '-'))
        .or_else(|| separated_triple(&normalized, ':'))
        .or_else(|| separated_triple(&normalized, '_'))
        .map(|(d, m, s)| dms_to_degrees(d, m, s))
        .or_else(|| normalized.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Search for `D°M'S"` anywhere in the string: degree marker `°`/`d`,
/// minute marker `'`/`m`, seconds marker `"`/`'`/`s` (the seconds marker
/// may be omitted, the seconds value may not). First match wins.
fn symbol_dms(s: &str) -> Option<(f64, f64, f64)> {
    for (idx, c) in s.char_indices() {
        if !(c.is_ascii_digit() || c == '.') {
            continue;
        }
        // Only start at the beginning of a numeric run.
        if idx > 0 {
            let prev = s[..idx].chars().next_back().expect("non-empty prefix");
            if prev.is_ascii_digit() || prev == '.' {
                continue;
            }
        }
        if let Some(triple) = symbol_dms_at(&s[idx..]) {
            return Some(triple);
        }
    }
    None
}

fn symbol_dms_at(s: &str) -> Option<(f64, f64, f64)> {
    let mut cur = Cursor { rest: s };
    let degrees = cur.number()?;
    cur.skip_ws();
    if !cur.marker(&['°', 'd']) {
        return None;
    }
    cur.skip_ws();
    let minutes = cur.number()?;
    cur.skip_ws();
    if !cur.marker(&['\'', 'm']) {
        return None;
    }
    cur.skip_ws();
    let seconds = cur.number()?;
    cur.skip_ws();
    cur.marker(&['"', '\'', 's']);
    Some((degrees, minutes, seconds))
}

/// `D M S` anchored to the whole string: exactly three numeric tokens.
fn whitespace_triple(s: &str) -> Option<(f64, f64, f64)> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    triple_of(&parts)
}

/// `D<sep>M<sep>S` anchored to the whole string.
fn separated_triple(s: &str, sep: char) -> Option<(f64, f64, f64)> {
    let parts: Vec<&str> = s.split(sep).map(str::trim).collect();
    triple_of(&parts)
}

fn triple_of(parts: &[&str]) -> Option<(f64, f64, f64)> {
    if parts.len() != 3 {
        return None;
    }
    Some((
        plain_number(parts[0])?,
        plain_number(parts[1])?,
        plain_number(parts[2])?,
    ))
}

/// Unsigned decimal literal covering the entire token: digits with at most
/// one `.`. Signs and exponents fall through to the fallback branch.
fn plain_number(tok: &str) -> Option<f64> {
    let mut seen_dot = false;
    let mut seen_digit = false;
    for c in tok.chars() {
        if c.is_ascii_digit() {
            seen_digit = true;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
        } else {
            return None;
        }
    }
    if !seen_digit {
        return None;
    }
    tok.parse::<f64>().ok()
}

struct Cursor<'a> {
    rest: &'a str,
}

impl Cursor<'_> {
    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Consume an unsigned decimal literal prefix, if any.
    fn number(&mut self) -> Option<f64> {
        let mut len = 0;
        let mut seen_dot = false;
        let mut seen_digit = false;
        for c in self.rest.chars() {
            if c.is_ascii_digit() {
                seen_digit = true;
                len += 1;
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                len += 1;
            } else {
                break;
            }
        }
        if !seen_digit {
            return None;
        }
        let (tok, rest) = self.rest.split_at(len);
        let value = tok.parse::<f64>().ok()?;
        self.rest = rest;
        Some(value)
    }

    /// Consume one marker character (letters matched case-insensitively).
    fn marker(&mut self, accepted: &[char]) -> bool {
        match self.rest.chars().next() {
            Some(c) if accepted.iter().any(|a| a.eq_ignore_ascii_case(&c)) => {
                self.rest = &self.rest[c.len_utf8()..];
                true
            }
            _ => false,
        }
    }
}
