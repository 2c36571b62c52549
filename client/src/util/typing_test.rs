use super::*;

#[test]
fn typed_prefix_counts_characters_not_bytes() {
    let text = "Hi \u{2014} there";
    assert_eq!(typed_prefix(text, 0), "");
    assert_eq!(typed_prefix(text, 3), "Hi ");
    assert_eq!(typed_prefix(text, 4), "Hi \u{2014}");
}

#[test]
fn typed_prefix_past_end_returns_whole_text() {
    assert_eq!(typed_prefix("abc", 3), "abc");
    assert_eq!(typed_prefix("abc", 10), "abc");
}

#[test]
fn next_count_stops_at_char_length() {
    let text = "a\u{2014}b";
    assert_eq!(next_count(text, 0), Some(1));
    assert_eq!(next_count(text, 2), Some(3));
    assert_eq!(next_count(text, 3), None);
}

#[test]
fn typing_walks_every_prefix_once() {
    let text = "Hey";
    let mut count = 0;
    let mut seen = vec![typed_prefix(text, count).to_owned()];
    while let Some(next) = next_count(text, count) {
        count = next;
        seen.push(typed_prefix(text, count).to_owned());
    }
    assert_eq!(seen, ["", "H", "He", "Hey"]);
}
