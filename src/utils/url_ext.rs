//! File extension lookup for image URLs.

use url::Url;

/// Returns the extension of the last path segment of `url`, including the
/// leading dot (`".jpg"`), or an empty string when there is none.
///
/// The path is percent-decoded first, and the query string and fragment are
/// ignored. URLs that fail to parse are treated as having no extension.
///
/// # Examples
///
/// - `"https://x.com/a/b%20c.JPG?x=1"` → `".JPG"`
/// - `"https://x.com/a/archive"` → `""`
pub fn file_extension_from_url(url: &str) -> String {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return String::new(),
    };

    let path = percent_decode(parsed.path());
    let file_name = path.rsplit('/').next().unwrap_or_default();
    split_extension(file_name).to_string()
}

/// Splits off the extension the way path libraries do: dots leading the
/// name do not start an extension, so `.bashrc` has none.
fn split_extension(file_name: &str) -> &str {
    let Some(dot) = file_name.rfind('.') else {
        return "";
    };
    if file_name[..dot].chars().all(|c| c == '.') {
        return "";
    }
    &file_name[dot..]
}

fn percent_decode(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.bytes();
    while let Some(b) = bytes.next() {
        if b != b'%' {
            out.push(b);
            continue;
        }
        let mut lookahead = bytes.clone();
        match (
            lookahead.next().and_then(hex_digit),
            lookahead.next().and_then(hex_digit),
        ) {
            (Some(high), Some(low)) => {
                out.push(high << 4 | low);
                bytes = lookahead;
            }
            // malformed escapes are kept verbatim
            _ => out.push(b'%'),
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
