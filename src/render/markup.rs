/// Escape text for use in element content or a quoted attribute value.
pub fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// ` name="value"` with the value escaped.
pub(crate) fn attr(name: &str, value: &str) -> String {
    format!(" {}=\"{}\"", name, escape(value))
}

/// Class name under the configured prefix: `("ct", "cell")` → `ct-cell`.
pub(crate) fn class(prefix: &str, suffix: &str) -> String {
    if prefix.is_empty() {
        suffix.to_string()
    } else {
        format!("{}-{}", prefix, suffix)
    }
}

/// ` class="..."` for one or more prefixed class names.
pub(crate) fn class_attr(prefix: &str, suffixes: &[&str]) -> String {
    let names = suffixes
        .iter()
        .map(|suffix| class(prefix, suffix))
        .collect::<Vec<String>>()
        .join(" ");
    attr("class", &names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn ampersand_is_escaped_once() {
        assert_eq!(escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn class_names_follow_prefix() {
        assert_eq!(class_attr("ct", &["cell", "yes"]), r#" class="ct-cell ct-yes""#);
        assert_eq!(class_attr("", &["cell"]), r#" class="cell""#);
    }
}
