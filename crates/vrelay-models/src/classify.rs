//! URL classification and alias normalization.
//!
//! Classification decides which handling policy a requested URL gets:
//! YouTube-family URLs are resolved through a remote node, every other
//! recognized URL is passed back to the client to fetch directly, and
//! unrecognized input produces no classification at all.
//!
//! Matching is explicit ordered string tables, first match wins. URLs are
//! untrusted input; nothing here executes or fetches anything.

use url::Url;

use crate::request::{UrlType, VideoInfo};

/// Domain alias rewrites applied before classification:
/// (host, path segment, canonical segment).
const ALIAS_REWRITES: &[(&str, &str, &str)] = &[
    // dmn.moe fronts the YouTube relay service under two path prefixes
    ("dmn.moe", "/sr/", "/yt/"),
];

/// Hosts belonging to the YouTube family.
const YOUTUBE_HOSTS: &[&str] = &[
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
    "youtu.be",
    "www.youtube-nocookie.com",
    "youtube-nocookie.com",
];

/// Mirror hosts that resolve through the YouTube path when the URL points
/// at the canonical relay segment.
const YOUTUBE_MIRRORS: &[(&str, &str)] = &[("dmn.moe", "/yt/")];

/// Rewrite known domain aliases to their canonical form.
///
/// Only the first matching alias rule applies; a URL is rewritten at most
/// once.
pub fn normalize_aliases(url: &str) -> String {
    for (host, from_seg, to_seg) in ALIAS_REWRITES {
        if host_of(url).is_some_and(|h| h == *host) && url.contains(from_seg) {
            return url.replacen(from_seg, to_seg, 1);
        }
    }
    url.to_string()
}

/// Classify a URL, normalizing aliases first.
///
/// Returns `None` when no handler recognizes the input (non-http(s) scheme
/// or unparseable URL). The caller treats `None` as a pass-through, not an
/// error.
pub fn classify(url: &str) -> Option<VideoInfo> {
    let canonical_url = normalize_aliases(url);

    let parsed = Url::parse(&canonical_url).ok()?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return None;
    }
    let host = parsed.host_str()?;

    let url_type = if YOUTUBE_HOSTS.contains(&host) {
        UrlType::YouTube
    } else if YOUTUBE_MIRRORS
        .iter()
        .any(|(h, prefix)| host == *h && parsed.path().starts_with(prefix))
    {
        UrlType::YouTube
    } else {
        UrlType::Other
    };

    Some(VideoInfo {
        url_type,
        canonical_url,
    })
}

fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_hosts_classify_as_youtube() {
        for url in [
            "https://youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://music.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ",
        ] {
            let info = classify(url).expect(url);
            assert_eq!(info.url_type, UrlType::YouTube, "{url}");
        }
    }

    #[test]
    fn test_other_hosts_classify_as_other() {
        for url in [
            "https://example.com/video.mp4",
            "https://na2.vrdancing.club/clip.mp4",
            "http://jd.pypy.moe/api/v1/videos/x.mp4",
        ] {
            let info = classify(url).expect(url);
            assert_eq!(info.url_type, UrlType::Other, "{url}");
            assert_eq!(info.canonical_url, url);
        }
    }

    #[test]
    fn test_unrecognized_input_yields_none() {
        assert!(classify("not a url").is_none());
        assert!(classify("rtspt://stream.example.com/live").is_none());
        assert!(classify("file:///etc/passwd").is_none());
        assert!(classify("").is_none());
    }

    #[test]
    fn test_mirror_alias_is_normalized_and_classified_youtube() {
        let info = classify("https://dmn.moe/sr/dQw4w9WgXcQ").unwrap();
        assert_eq!(info.canonical_url, "https://dmn.moe/yt/dQw4w9WgXcQ");
        assert_eq!(info.url_type, UrlType::YouTube);
    }

    #[test]
    fn test_alias_rewrite_applies_once() {
        // Only the first occurrence of the alias segment moves.
        let out = normalize_aliases("https://dmn.moe/sr/abc/sr/def");
        assert_eq!(out, "https://dmn.moe/yt/abc/sr/def");
    }

    #[test]
    fn test_alias_rewrite_is_host_scoped() {
        let url = "https://example.com/sr/abc";
        assert_eq!(normalize_aliases(url), url);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let first = classify("https://dmn.moe/sr/abc").unwrap();
        let second = classify(&first.canonical_url).unwrap();
        assert_eq!(first, second);
    }
}
