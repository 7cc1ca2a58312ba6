use std::borrow::Cow;

/// Replaces the first character of `word` with its uppercase form.
///
/// Empty words and words whose first character has no uppercase mapping are
/// returned borrowed.
pub fn uppercase_first_cow(word: &str) -> Cow<'_, str> {
    map_first_char(word, |c| c.to_uppercase().collect())
}

/// Replaces the first character of `word` with its lowercase form.
pub fn lowercase_first_cow(word: &str) -> Cow<'_, str> {
    map_first_char(word, |c| c.to_lowercase().collect())
}

fn map_first_char<M>(word: &str, map: M) -> Cow<'_, str>
where
    M: Fn(char) -> String,
{
    let Some(first) = word.chars().next() else {
        return Cow::Borrowed(word);
    };
    let (head, rest) = word.split_at(first.len_utf8());
    let mapped = map(first);

    if mapped == head {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(mapped + rest)
    }
}
