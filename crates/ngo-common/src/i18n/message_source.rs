//! Message bundles keyed by message id
//!
//! Bundles are `.properties` files compiled into the binary. Lookups fall
//! back to English, then to the key itself, so a missing translation never
//! fails a request.

use std::collections::HashMap;

use super::Locale;

const MESSAGES_EN: &str = include_str!("../../resources/messages_en.properties");
const MESSAGES_ES: &str = include_str!("../../resources/messages_es.properties");

/// Localized message catalog
#[derive(Debug, Clone)]
pub struct MessageSource {
    bundles: HashMap<Locale, HashMap<String, String>>,
    default_locale: Locale,
}

impl MessageSource {
    /// Load the embedded bundles
    pub fn new(default_locale: Locale) -> Self {
        let bundles = [(Locale::En, MESSAGES_EN), (Locale::Es, MESSAGES_ES)]
            .into_iter()
            .map(|(locale, source)| (locale, parse_properties(source)))
            .collect();

        Self {
            bundles,
            default_locale,
        }
    }

    /// Locale used when a request names none
    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Resolve a message and substitute `{0}`, `{1}`, ... with `args`
    pub fn get(&self, key: &str, args: &[&str], locale: Locale) -> String {
        let template = [locale, Locale::En]
            .iter()
            .find_map(|l| self.bundles.get(l).and_then(|b| b.get(key)))
            .map_or(key, String::as_str);

        substitute(template, args)
    }
}

/// Replace `{n}` placeholders in one left-to-right pass
///
/// Argument text is copied verbatim, so braces inside an argument are never
/// expanded. Placeholders without a matching argument stay as written.
fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let arg = tail.find('}').and_then(|end| {
            let index: usize = tail[1..end].parse().ok()?;
            args.get(index).map(|arg| (*arg, end))
        });

        match arg {
            Some((arg, end)) => {
                out.push_str(arg);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

impl Default for MessageSource {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

/// Parse `key=value` lines; `#` and `!` start comments
fn parse_properties(source: &str) -> HashMap<String, String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .filter_map(|line| {
            let (key, value) = line.split_once(['=', ':'])?;
            Some((key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_message_with_argument() {
        let messages = MessageSource::default();
        assert_eq!(
            messages.get("testimonial.created.successfully", &["Jane"], Locale::En),
            "Testimonial Jane created successfully"
        );
    }

    #[test]
    fn test_spanish_message() {
        let messages = MessageSource::default();
        assert_eq!(
            messages.get("member.delete.ok", &["7"], Locale::Es),
            "Miembro 7 eliminado exitosamente"
        );
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let messages = MessageSource::default();
        assert_eq!(messages.get("no.such.key", &[], Locale::Es), "no.such.key");
    }

    #[test]
    fn test_every_english_key_is_translated() {
        let messages = MessageSource::default();
        let en = &messages.bundles[&Locale::En];
        let es = &messages.bundles[&Locale::Es];
        for key in en.keys() {
            assert!(es.contains_key(key), "missing es translation for {key}");
        }
    }

    #[test]
    fn test_arguments_are_not_re_expanded() {
        assert_eq!(substitute("{0} and {1}", &["{1}", "x"]), "{1} and x");
        assert_eq!(substitute("{1}{0}", &["a", "b"]), "ba");
        assert_eq!(substitute("{2} {oops} {", &["a"]), "{2} {oops} {");

        let messages = MessageSource::default();
        assert_eq!(
            messages.get("testimonial.created.successfully", &["{0}"], Locale::En),
            "Testimonial {0} created successfully"
        );
    }

    #[test]
    fn test_parse_properties() {
        let parsed = parse_properties("# comment\n\n! also comment\na.b = one\nc.d:two=2\n");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["a.b"], "one");
        assert_eq!(parsed["c.d"], "two=2");
    }
}
