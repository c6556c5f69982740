use std::sync::OnceLock;

use regex::Regex;

/// Image span `![alt](url)`.
///
/// Alt text may not contain `[` or `]`; the URL may not contain `(` or `)`.
pub struct Image;

impl Image {
    pub const BANG: &'static str = "!";

    fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
        })
    }

    /// Returns `(alt, url)` for every image in `text`, left to right.
    pub fn extract(text: &str) -> Vec<(&str, &str)> {
        Self::regex()
            .captures_iter(text)
            .filter_map(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
            .collect()
    }

    /// The literal source text of an image span.
    pub fn markdown(alt: &str, url: &str) -> String {
        format!("{}{}", Self::BANG, Link::markdown(alt, url))
    }
}

/// Link span `[text](url)` not preceded by `!`.
pub struct Link;

impl Link {
    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
        })
    }

    /// Returns `(text, url)` for every link in `text`, left to right.
    ///
    /// Images are not reported as links. A `[` right after `!` never opens a
    /// link, but a link may still start inside the rejected span.
    pub fn extract(text: &str) -> Vec<(&str, &str)> {
        let mut links = Vec::new();
        let mut from = 0;
        // `regex` has no lookbehind, so check the byte before each match.
        while let Some(caps) = Self::regex().captures_at(text, from) {
            let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                break;
            };
            if text[..whole.start()].ends_with(Image::BANG) {
                from = whole.start() + 1;
                continue;
            }
            links.push((label.as_str(), url.as_str()));
            from = whole.end();
        }
        links
    }

    /// The literal source text of a link span.
    pub fn markdown(text: &str, url: &str) -> String {
        format!("[{text}]({url})")
    }
}
