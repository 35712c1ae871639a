//! Greedy word wrapping against a pixel-width measure.

/// Extra space between paragraphs, as a fraction of the line height.
pub const PARAGRAPH_GAP_RATIO: f64 = 0.35;

/// Wrap `text` into lines no wider than `max_width`.
///
/// Paragraphs are split on `'\n'` and words on single spaces, so runs of
/// spaces (indentation) survive as empty words. Words are added to the
/// current line while `measure(line + word + " ")` fits; a word that does not
/// fit starts the next line. A word that is wider than `max_width` on its own
/// is emitted unbroken on its own line.
///
/// Each line is passed to `emit` with its trailing whitespace removed and the
/// Y cursor it starts at. Consecutive paragraphs are separated by an extra
/// `floor(0.35 * line_height)`. Returns the cursor below the last line.
pub fn wrap_text<M, E>(
    text: &str,
    max_width: f64,
    line_height: f64,
    start_y: f64,
    mut measure: M,
    mut emit: E,
) -> f64
where
    M: FnMut(&str) -> f64,
    E: FnMut(&str, f64),
{
    let paragraph_gap = (line_height * PARAGRAPH_GAP_RATIO).floor();
    let mut y = start_y;

    for (i, paragraph) in text.split('\n').enumerate() {
        if i > 0 {
            y += paragraph_gap;
        }

        let mut line = String::new();
        for (n, word) in paragraph.split(' ').enumerate() {
            let candidate = format!("{}{} ", line, word);
            if n > 0 && measure(&candidate) > max_width {
                emit(line.trim_end(), y);
                y += line_height;
                line = format!("{} ", word);
            } else {
                line = candidate;
            }
        }

        if !line.is_empty() {
            emit(line.trim_end(), y);
            y += line_height;
        }
    }

    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Monospace measure: 10px per character.
    fn mono(s: &str) -> f64 {
        s.chars().count() as f64 * 10.0
    }

    fn collect(text: &str, max_width: f64, line_height: f64) -> (Vec<(String, f64)>, f64) {
        let mut lines = Vec::new();
        let end = wrap_text(text, max_width, line_height, 100.0, mono, |line, y| {
            lines.push((line.to_string(), y))
        });
        (lines, end)
    }

    #[test]
    fn test_single_line_fits() {
        let (lines, end) = collect("hello world", 200.0, 20.0);
        assert_eq!(lines, vec![("hello world".to_string(), 100.0)]);
        assert_eq!(end, 120.0);
    }

    #[test]
    fn test_greedy_break() {
        // "the quick " is 100px, "the quick brown " is 160px.
        let (lines, end) = collect("the quick brown fox jumps", 120.0, 20.0);
        let text: Vec<&str> = lines.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(text, vec!["the quick", "brown fox", "jumps"]);
        assert_eq!(lines[1].1, 120.0);
        assert_eq!(end, 160.0);
    }

    #[test]
    fn test_overlong_word_is_not_broken() {
        let (lines, _) = collect("a supercalifragilistic b", 80.0, 20.0);
        let text: Vec<&str> = lines.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(text, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_overlong_first_word() {
        let (lines, _) = collect("extraordinarily long", 50.0, 20.0);
        let text: Vec<&str> = lines.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(text, vec!["extraordinarily", "long"]);
    }

    #[test]
    fn test_paragraph_gap() {
        // floor(0.35 * 22) = 7
        let (lines, end) = collect("one\ntwo\nthree", 500.0, 22.0);
        let ys: Vec<f64> = lines.iter().map(|(_, y)| *y).collect();
        assert_eq!(ys, vec![100.0, 129.0, 158.0]);
        assert_eq!(end, 180.0);
    }

    #[test]
    fn test_indentation_is_kept() {
        let (lines, _) = collect("first\n     indented line", 500.0, 20.0);
        assert_eq!(lines[1].0, "     indented line");
    }

    #[test]
    fn test_empty_paragraph_advances() {
        let (lines, end) = collect("a\n\nb", 500.0, 20.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].0, "");
        // three lines plus two gaps of 7
        assert_eq!(end, 100.0 + 60.0 + 14.0);
    }

    #[test]
    fn test_lines_never_exceed_width() {
        let text = "Even youths shall faint and be weary, and young men shall fall \
                    exhausted; but they who wait for the Lord shall renew their strength, \
                    they shall mount up with wings like eagles, they shall run and not be \
                    weary, they shall walk and not faint.";

        for max_width in [60.0, 90.0, 130.0, 250.0, 400.0] {
            let (lines, _) = collect(text, max_width, 20.0);
            for (line, _) in &lines {
                let single_word = !line.trim().contains(' ');
                assert!(
                    mono(line) <= max_width || single_word,
                    "{:?} exceeds {}",
                    line,
                    max_width
                );
            }

            let rejoined: Vec<String> = lines.iter().map(|(l, _)| l.clone()).collect();
            assert_eq!(rejoined.join(" "), text);
        }
    }
}
