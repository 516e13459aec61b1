//! Text sanitization applied to every submitted field.

/// Clean a single raw text field.
///
/// Missing input becomes the empty string. The markup characters `<` and
/// `>` are dropped, then whitespace runs collapse to one space with no
/// leading or trailing blanks.
///
/// # Example
///
/// ```
/// use contact_intake::domain::sanitize::clean;
///
/// assert_eq!(clean(Some("  <b>Ada</b>   Lovelace ")), "bAda/b Lovelace");
/// assert_eq!(clean(None), "");
/// ```
pub fn clean(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    // split_whitespace also drops leading/trailing whitespace, including
    // whitespace exposed by removing the markup characters.
    raw.chars()
        .filter(|c| *c != '<' && *c != '>')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean an eircode and normalize it for matching.
///
/// On top of [`clean`], all whitespace is removed and the result is
/// upper-cased, so `" a1b 2c3 "` becomes `"A1B2C3"`.
pub fn normalize_eircode(raw: Option<&str>) -> String {
    clean(raw)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}
