use crate::models::ParsedFilename;

/// Number of digits in the problem number prefix
const NUMBER_DIGITS: usize = 4;

/// Parse a solution filename of the form `NNNN-slug.ext`
///
/// `extension` is given without the leading dot. Returns `None` for any other
/// shape: missing or short digit prefix, missing hyphen, empty slug, or a
/// different extension. Dots inside the slug are kept as part of it.
///
/// # Examples
///
/// ```
/// use solutions_readme::parse_filename;
///
/// let parsed = parse_filename("0001-two-sum.js", "js").unwrap();
/// assert_eq!(parsed.number, 1);
/// assert_eq!(parsed.title, "Two Sum");
///
/// assert!(parse_filename("readme.txt", "js").is_none());
/// ```
pub fn parse_filename(file_name: &str, extension: &str) -> Option<ParsedFilename> {
    let stem = file_name.strip_suffix(extension)?.strip_suffix('.')?;

    let prefix = stem.get(..NUMBER_DIGITS)?;
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let slug = stem[NUMBER_DIGITS..].strip_prefix('-')?;
    if slug.is_empty() {
        return None;
    }

    let number = prefix.parse().ok()?;

    Some(ParsedFilename {
        number,
        title: title_from_slug(slug),
        slug: slug.to_string(),
        file_name: file_name.to_string(),
    })
}

/// Turn `two-sum` into `Two Sum`
///
/// Only the first character of each hyphen-separated segment is uppercased;
/// the rest of the segment is left as written.
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-').map(capitalize_first).collect::<Vec<_>>().join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
