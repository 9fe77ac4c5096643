//! Excerpts and reading time derived from rendered post bodies

use crate::helpers::{decode_entities, html_escape, prune, strip_html};

/// Plain-text excerpt of rendered HTML, pruned to `length` characters and
/// escaped so it can be inserted as trusted HTML.
pub fn excerpt(html: &str, length: usize) -> String {
    html_escape(&prune(&plain_text(html), length))
}

/// Text content of rendered HTML, with block boundaries kept as spaces
pub fn plain_text(html: &str) -> String {
    let mut spaced = html.to_string();
    for tag in BLOCK_CLOSERS {
        spaced = spaced.replace(tag, &format!("{} ", tag));
    }
    decode_entities(&strip_html(&spaced))
}

/// Block-level endings that separate words in the plain-text excerpt
const BLOCK_CLOSERS: [&str; 11] = [
    "</p>", "</h1>", "</h2>", "</h3>", "</h4>", "</h5>", "</h6>", "</li>", "</pre>",
    "</blockquote>", "<br>",
];

/// Count words in HTML content (strips tags first)
pub fn count_words(html: &str) -> usize {
    let text = plain_text(html);
    let mut count = 0;
    let mut in_word = false;

    for c in text.chars() {
        if is_cjk(c) {
            count += 1;
            in_word = false;
        } else if c.is_alphanumeric() || (in_word && c == '\'') {
            if !in_word {
                in_word = true;
                count += 1;
            }
        } else {
            in_word = false;
        }
    }

    count
}

/// Estimated minutes to read `words`, never less than one
pub fn reading_time(words: usize, words_per_minute: usize) -> u32 {
    let wpm = words_per_minute.max(1) as f64;
    let minutes = (words as f64 / wpm).round() as u32;
    minutes.max(1)
}

fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3040}'..='\u{30FF}').contains(&c)
        || ('\u{AC00}'..='\u{D7AF}').contains(&c)
}
