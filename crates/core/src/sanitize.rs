//! HTML sanitization for user-supplied text.
//!
//! Two policies are provided:
//!
//! - [`escape_text`] for plain-text fields (folder and note names): every `<`
//!   and `>` is escaped, so no markup survives.
//! - [`filter_markup`] for rich note content: tags on the allow-list below
//!   are kept with only their allow-listed attributes, everything else is
//!   escaped as text. Event-handler attributes (`onerror`, `onclick`, ...)
//!   are never allowed, and `href`/`src`/`cite` must point at a safe URL.
//!
//! Both functions are idempotent, so sanitizing already sanitized data on the
//! read path leaves it unchanged.

use std::sync::LazyLock;

use regex::Regex;

/// A tag that may appear in rich content, with the attributes it may keep.
struct AllowedTag {
    name: &'static str,
    attributes: &'static [&'static str],
}

const fn tag(name: &'static str, attributes: &'static [&'static str]) -> AllowedTag {
    AllowedTag { name, attributes }
}

/// Markup allowed in note content.
const ALLOWED_TAGS: &[AllowedTag] = &[
    tag("a", &["href", "title", "target"]),
    tag("abbr", &["title"]),
    tag("b", &[]),
    tag("blockquote", &["cite"]),
    tag("br", &[]),
    tag("code", &[]),
    tag("del", &["datetime"]),
    tag("em", &[]),
    tag("h1", &[]),
    tag("h2", &[]),
    tag("h3", &[]),
    tag("h4", &[]),
    tag("h5", &[]),
    tag("h6", &[]),
    tag("hr", &[]),
    tag("i", &[]),
    tag("img", &["src", "alt", "title", "width", "height"]),
    tag("ins", &["datetime"]),
    tag("li", &[]),
    tag("mark", &[]),
    tag("ol", &[]),
    tag("p", &[]),
    tag("pre", &[]),
    tag("s", &[]),
    tag("small", &[]),
    tag("span", &[]),
    tag("strong", &[]),
    tag("sub", &[]),
    tag("sup", &[]),
    tag("table", &[]),
    tag("tbody", &[]),
    tag("td", &["colspan", "rowspan"]),
    tag("th", &["colspan", "rowspan"]),
    tag("thead", &[]),
    tag("tr", &[]),
    tag("u", &[]),
    tag("ul", &[]),
];

/// Attributes whose value is a URL.
const URL_ATTRIBUTES: &[&str] = &["href", "src", "cite"];

/// URL prefixes accepted in [`URL_ATTRIBUTES`].
const SAFE_URL_PREFIXES: &[&str] = &["http://", "https://", "mailto:", "#", "/", "./", "../"];

static CHAR_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#[xX]([0-9A-Fa-f]+)|#([0-9]+)|([A-Za-z]+));?")
        .expect("character reference pattern is valid")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("tag pattern is valid"));

static TAG_PARTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^<\s*(/)?\s*([A-Za-z][A-Za-z0-9]*)(\s[^>]*?)?\s*(/)?\s*>$")
        .expect("tag parts pattern is valid")
});

static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("attribute pattern is valid")
});

/// Escapes `<` and `>` so the text renders literally.
///
/// Quotes are left as-is; the result is only ever placed in element content.
pub fn escape_text(input: &str) -> String {
    input.replace('<', "&lt;").replace('>', "&gt;")
}

/// Keeps allow-listed markup and escapes everything else.
pub fn filter_markup(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut last = 0;

    for found in TAG_RE.find_iter(input) {
        output.push_str(&escape_text(&input[last..found.start()]));
        match rebuild_tag(found.as_str()) {
            Some(tag) => output.push_str(&tag),
            None => output.push_str(&escape_text(found.as_str())),
        }
        last = found.end();
    }
    output.push_str(&escape_text(&input[last..]));

    output
}

/// Returns true for inline event-handler attributes such as `onerror`.
pub fn is_event_handler(attribute: &str) -> bool {
    attribute.len() > 2
        && attribute
            .get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("on"))
}

/// Re-emits an allow-listed tag with only its permitted attributes.
///
/// Returns `None` when the tag is not allowed and must be escaped.
fn rebuild_tag(raw: &str) -> Option<String> {
    let parts = TAG_PARTS_RE.captures(raw)?;
    let name = parts.get(2)?.as_str().to_ascii_lowercase();
    let allowed = ALLOWED_TAGS.iter().find(|t| t.name == name)?;

    if parts.get(1).is_some() {
        return Some(format!("</{name}>"));
    }

    let mut rebuilt = format!("<{name}");
    if let Some(attributes) = parts.get(3) {
        for attribute in ATTRIBUTE_RE.captures_iter(attributes.as_str()) {
            let attr_name = attribute[1].to_ascii_lowercase();
            if is_event_handler(&attr_name) || !allowed.attributes.contains(&attr_name.as_str()) {
                continue;
            }

            let value = attribute
                .get(2)
                .or_else(|| attribute.get(3))
                .or_else(|| attribute.get(4))
                .map(|m| m.as_str());

            match value {
                Some(value) => {
                    if URL_ATTRIBUTES.contains(&attr_name.as_str()) && !is_safe_url(value) {
                        continue;
                    }
                    rebuilt.push_str(&format!(" {attr_name}=\"{}\"", value.replace('"', "&quot;")));
                }
                None => rebuilt.push_str(&format!(" {attr_name}")),
            }
        }
    }

    if parts.get(4).is_some() {
        rebuilt.push_str(" />");
    } else {
        rebuilt.push('>');
    }

    Some(rebuilt)
}

/// Accepts absolute http(s)/mailto URLs, fragments and relative paths.
///
/// The value is checked the way a browser reads it: character references are
/// decoded and whitespace and control characters are dropped first. A value
/// without a safe prefix counts as relative only when no `:` or `&` is left.
fn is_safe_url(value: &str) -> bool {
    let normalized: String = decode_char_refs(value)
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    if SAFE_URL_PREFIXES
        .iter()
        .any(|prefix| normalized.starts_with(prefix))
    {
        return true;
    }

    !normalized.is_empty() && !normalized.contains([':', '&'])
}

/// Decodes numeric character references and the named ones that can spell
/// out a URL scheme. Unknown names are left as-is.
fn decode_char_refs(value: &str) -> String {
    CHAR_REF_RE
        .replace_all(value, |caps: &regex::Captures| {
            let decoded = if let Some(hex) = caps.get(1) {
                u32::from_str_radix(hex.as_str(), 16)
                    .ok()
                    .and_then(char::from_u32)
            } else if let Some(dec) = caps.get(2) {
                dec.as_str().parse::<u32>().ok().and_then(char::from_u32)
            } else {
                caps.get(3).and_then(|name| named_char_ref(name.as_str()))
            };

            match decoded {
                Some(c) => c.to_string(),
                // Out-of-range numbers decode to U+FFFD in browsers.
                None if caps.get(3).is_none() => char::REPLACEMENT_CHARACTER.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn named_char_ref(name: &str) -> Option<char> {
    let c = match name {
        "colon" => ':',
        "Tab" => '\t',
        "NewLine" => '\n',
        "amp" | "AMP" => '&',
        "quot" | "QUOT" => '"',
        "apos" => '\'',
        "lt" | "LT" => '<',
        "gt" | "GT" => '>',
        "sol" => '/',
        "num" => '#',
        "period" => '.',
        "lpar" => '(',
        "rpar" => ')',
        _ => return None,
    };
    Some(c)
}
