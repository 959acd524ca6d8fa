//! Greedy word wrapping by character columns

/// Points to millimetres
const PT_TO_MM: f32 = 0.3528;

/// Average glyph advance of a proportional sans face, as a fraction of the em
const AVG_GLYPH_EM: f32 = 0.5;

/// Number of character columns that fit in `width_mm` at `font_size_pt`.
/// Always at least one.
pub fn columns_for(width_mm: f32, font_size_pt: f32) -> usize {
    let glyph_mm = font_size_pt * PT_TO_MM * AVG_GLYPH_EM;
    if glyph_mm <= 0.0 || width_mm <= 0.0 {
        return 1;
    }
    ((width_mm / glyph_mm).floor() as usize).max(1)
}

/// Wrap `text` into lines of at most `columns` characters.
///
/// Newlines in the input are hard breaks and blank input lines are kept.
/// Words longer than a line are split across lines.
pub fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        if raw_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0usize;

        for word in raw_line.split_whitespace() {
            let word_len = word.chars().count();

            if word_len > columns {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let chars: Vec<char> = word.chars().collect();
                for chunk in chars.chunks(columns) {
                    if chunk.len() == columns {
                        lines.push(chunk.iter().collect());
                    } else {
                        current = chunk.iter().collect();
                        current_len = chunk.len();
                    }
                }
                continue;
            }

            let needed = if current_len == 0 {
                word_len
            } else {
                current_len + 1 + word_len
            };

            if needed > columns {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_len = word_len;
            } else {
                if current_len > 0 {
                    current.push(' ');
                }
                current.push_str(word);
                current_len = needed;
            }
        }

        if current_len > 0 {
            lines.push(current);
        }
    }

    lines
}
