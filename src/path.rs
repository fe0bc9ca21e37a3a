use std::borrow::Cow;

const SLASH: char = '/';
const QUERY: char = '?';

/// Turns a raw request target into the path routes are matched against.
///
/// The query component is dropped, `sub_dir` is stripped when the path
/// starts with it, and a leading `/` is ensured.
///
/// ```
/// use waypoint_router::normalize_path;
///
/// assert_eq!(normalize_path("/blog/posts/1?page=2", "/blog/"), "/posts/1");
/// assert_eq!(normalize_path("about", ""), "/about");
/// ```
pub fn normalize_path<'a>(raw: &'a str, sub_dir: &str) -> Cow<'a, str> {
    let path = match raw.find(QUERY) {
        Some(pos) => &raw[..pos],
        None => raw,
    };

    let path = if sub_dir.is_empty() {
        path
    } else {
        path.strip_prefix(sub_dir).unwrap_or(path)
    };

    if path.starts_with(SLASH) {
        Cow::Borrowed(path)
    } else {
        let mut owned = String::with_capacity(path.len() + 1);
        owned.push(SLASH);
        owned.push_str(path);
        Cow::Owned(owned)
    }
}

/// Percent-decodes a captured value. `+` decodes to a space and invalid
/// UTF-8 is replaced rather than rejected.
pub(crate) fn decode_component(raw: &str) -> String {
    if !raw.contains(&['%', '+'][..]) {
        return raw.to_owned();
    }
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
