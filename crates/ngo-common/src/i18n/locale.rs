//! Supported locales

use serde::Deserialize;

/// A locale with an embedded message bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// All locales with a bundle
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    /// Language tag, e.g. `es`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Match a language tag on its primary subtag (`es-AR` -> `Es`)
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        Self::ALL.into_iter().find(|l| l.as_str() == primary)
    }

    /// Pick the first supported language of an `Accept-Language` header
    ///
    /// Entries are taken in header order; quality weights of zero are skipped.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        header.split(',').find_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?;
            let refused = parts.any(|p| {
                p.trim()
                    .strip_prefix("q=")
                    .and_then(|q| q.trim().parse::<f32>().ok())
                    .is_some_and(|q| q <= 0.0)
            });
            if refused {
                None
            } else {
                Self::from_tag(tag)
            }
        })
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
