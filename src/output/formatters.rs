//! Formatting utilities for terminal output

/// Format letters as spaced uppercase, e.g. `O W Q N D T A E Y`
#[must_use]
pub fn format_letters(letters: &[char]) -> String {
    let mut result = String::with_capacity(letters.len() * 2);
    for (i, letter) in letters.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(letter.to_ascii_uppercase());
    }
    result
}

/// Format words as a comma-separated uppercase list
#[must_use]
pub fn format_word_list(words: &[String]) -> String {
    words
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_formatted_spaced_uppercase() {
        let letters = ['o', 'w', 'n'];
        assert_eq!(format_letters(&letters), "O W N");
    }

    #[test]
    fn empty_letters_format_to_empty_string() {
        assert_eq!(format_letters(&[]), "");
    }

    #[test]
    fn word_list_formatted_comma_separated() {
        let words = vec!["down".to_string(), "town".to_string()];
        assert_eq!(format_word_list(&words), "DOWN, TOWN");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
