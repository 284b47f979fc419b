/// Trim a summary to whole sentences fitting within `limit` words.
///
/// Sentences are the fragments between literal `.` characters. They are
/// accepted greedily in order until the first one that would push the running
/// word count past the limit; nothing after that point is considered.
/// Empty fragments count zero words and contribute no text, but still count
/// as accepted.
///
/// With no limit, a zero limit, or when not a single fragment fits, the
/// summary is returned untouched.
pub fn trim(summary: &str, limit: Option<usize>) -> String {
    let limit = match limit {
        Some(limit) if limit > 0 => limit,
        _ => return summary.to_string(),
    };

    let mut accepted = Vec::new();
    let mut accepted_any = false;
    let mut word_count = 0;
    for sentence in summary.split('.') {
        let words = sentence.split_whitespace().count();
        if word_count + words > limit {
            break;
        }
        word_count += words;
        accepted_any = true;
        let sentence = sentence.trim();
        if !sentence.is_empty() {
            accepted.push(sentence);
        }
    }

    if !accepted_any {
        return summary.to_string();
    }
    format!("{}.", accepted.join(". "))
}
