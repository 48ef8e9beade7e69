/// Flesch reading ease of plain text, rounded to two decimals. The score is
/// unbounded on both sides: degenerate input (single words, initialisms) can
/// land well outside the textbook 0..100 range and is reported as-is.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let sentences = count_sentences(text).max(1) as f64;
    let words = count_words(text).max(1) as f64;
    let syllables = count_syllables(text).max(1) as f64;

    let score = 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words);
    (score * 100.0).round() / 100.0
}

fn count_sentences(text: &str) -> usize {
    text.chars()
        .filter(|c| matches!(c, '.' | '!' | '?'))
        .count()
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

fn count_syllables(text: &str) -> usize {
    text.split_whitespace().map(count_word_syllables).sum()
}

/// Vowel-group heuristic: consecutive vowels count once, a trailing silent
/// `e` is dropped, and every word gets at least one syllable.
fn count_word_syllables(word: &str) -> usize {
    let word: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();
    if word.is_empty() {
        return 0;
    }
    if word.len() <= 3 {
        return 1;
    }

    let mut count = 0;
    let mut previous_was_vowel = false;
    for c in word.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if word.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}
