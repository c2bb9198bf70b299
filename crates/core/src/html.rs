//! Decoding for the HTML entities the remote API embeds in question text.

/// Named entities the remote service is known to emit.
const ENTITIES: &[(&str, char)] = &[
    ("quot", '"'),
    ("apos", '\''),
    ("#039", '\''),
    ("lt", '<'),
    ("gt", '>'),
    ("amp", '&'),
    ("ndash", '–'),
    ("mdash", '—'),
    ("hellip", '…'),
    ("pound", '£'),
    ("euro", '€'),
    ("copy", '©'),
    ("reg", '®'),
    ("prime", '′'),
];

/// Replace known HTML entities with their literal characters.
///
/// Unknown entities pass through unchanged. The scan is single-pass, so text
/// like `&amp;quot;` decodes to `&quot;` rather than being decoded twice.
///
/// This is a display-only transform: stored model data stays encoded, and
/// answer comparison happens on the encoded text.
#[must_use]
pub fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest[1..].find(';').and_then(|semi| {
            let name = &rest[1..=semi];
            ENTITIES
                .iter()
                .find(|(entity, _)| *entity == name)
                .map(|(_, ch)| (*ch, semi + 2))
        });

        match decoded {
            Some((ch, next)) => {
                out.push(ch);
                rest = &rest[next..];
            }
            None => {
                // not a known entity; keep the ampersand and rescan after it
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_entities_decode() {
        assert_eq!(
            decode_entities("&quot;Thriller&quot; &ndash; 10&euro;"),
            "\"Thriller\" – 10€"
        );
        assert_eq!(decode_entities("&lt;b&gt; &amp; &lt;/b&gt;"), "<b> & </b>");
        assert_eq!(decode_entities("&copy;&reg;&prime;&mdash;&hellip;&pound;"), "©®′—…£");
    }

    #[test]
    fn both_apostrophe_forms_decode() {
        assert_eq!(decode_entities("it&apos;s"), "it's");
        assert_eq!(decode_entities("it&#039;s"), "it's");
    }

    #[test]
    fn unknown_entities_pass_through() {
        assert_eq!(
            decode_entities("Bj&ouml;rk &amp; friends"),
            "Bj&ouml;rk & friends"
        );
    }

    #[test]
    fn decoding_is_single_pass() {
        assert_eq!(decode_entities("&amp;quot;"), "&quot;");
    }

    #[test]
    fn stray_ampersands_survive() {
        assert_eq!(decode_entities("fish & chips"), "fish & chips");
        assert_eq!(decode_entities("trailing &"), "trailing &");
        assert_eq!(decode_entities("&"), "&");
        assert_eq!(decode_entities(""), "");
    }

    #[test]
    fn entity_directly_after_stray_ampersand_still_decodes() {
        assert_eq!(decode_entities("&&amp; b"), "&& b");
        assert_eq!(decode_entities("&x &amp; y;"), "&x & y;");
    }
}
