// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Word wrapping for plain text mail bodies.

/// Wrap `text` to lines of at most `width` characters, breaking only at spaces.
///
/// Breaks are made by turning a space into a newline, so the output has the same number of
/// characters as the input. Existing newlines start a new line. A word longer than `width` is
/// never split; its line runs past `width` and breaks at the next space.
///
/// # Examples
///
/// ```
/// use logmail::wrap::wordwrap;
///
/// assert_eq!(
///     wordwrap("The quick brown fox sat over the lazy dog", 15),
///     "The quick brown\nfox sat over\nthe lazy dog"
/// );
/// assert_eq!(wordwrap("A very long woooooooooord.", 8), "A very\nlong\nwoooooooooord.");
/// ```
pub fn wordwrap(text: &str, width: usize) -> String {
    let mut chars = text.chars().collect::<Vec<_>>();

    // index of the first character of the current line
    let mut line_start = 0;
    // index of the last space seen on the current line
    let mut last_space = 0;

    for current in 0..chars.len() {
        match chars[current] {
            '\n' => {
                line_start = current + 1;
                last_space = current + 1;
            }
            ' ' => {
                if current - line_start >= width {
                    chars[current] = '\n';
                    line_start = current + 1;
                }
                last_space = current;
            }
            _ => {
                if current - line_start >= width && line_start != last_space {
                    chars[last_space] = '\n';
                    line_start = last_space + 1;
                }
            }
        }
    }

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(wordwrap("short line\nanother", 70), "short line\nanother");
        assert_eq!(wordwrap("", 70), "");
    }

    #[test]
    fn test_break_before_word_crossing_width() {
        let word = "x".repeat(68);
        let text = format!("{word} more text here");
        assert_eq!(wordwrap(&text, 70), format!("{word}\nmore text here"));

        let text = format!("a {} c", "b".repeat(68));
        assert_eq!(wordwrap(&text, 70), format!("a {}\nc", "b".repeat(68)));
    }

    #[test]
    fn test_long_word_is_never_split() {
        let word = "x".repeat(80);
        let text = format!("{word} tail");
        assert_eq!(wordwrap(&text, 70), format!("{word}\ntail"));
        assert_eq!(wordwrap(&word, 70), word);
    }

    #[test]
    fn test_wrap_many_lines() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(3);
        assert_eq!(
            wordwrap(&text, 20),
            "the quick brown fox\njumps over the lazy\ndog the quick brown\n\
             fox jumps over the\nlazy dog the quick\nbrown fox jumps over\nthe lazy dog "
        );
    }

    #[test]
    fn test_width_counts_characters() {
        let text = "ééééé ééééé";
        assert_eq!(wordwrap(text, 5), "ééééé\nééééé");
        assert_eq!(wordwrap(text, 11), text);
    }
}
