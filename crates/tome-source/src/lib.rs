//! Document fetching, caching, and boilerplate stripping.

mod boilerplate;
mod cache;

pub use boilerplate::{BoilerplateStripper, GUTENBERG_END, GUTENBERG_START};
pub use cache::{CachedHttpSource, DEFAULT_CACHE_DIR, TextSource};

/// Fetch a document and cut it down to its body text.
pub fn body_text(
    source: &dyn TextSource,
    stripper: &BoilerplateStripper,
    locator: &str,
    cache_key: &str,
) -> tome_core::Result<String> {
    let raw = source.raw_text(locator, cache_key)?;
    stripper.strip(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tome_core::TomeError;

    struct FixedSource(&'static str);

    impl TextSource for FixedSource {
        fn raw_text(&self, _locator: &str, _cache_key: &str) -> tome_core::Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSource;

    impl TextSource for FailingSource {
        fn raw_text(&self, locator: &str, _cache_key: &str) -> tome_core::Result<String> {
            Err(TomeError::SourceUnavailable(locator.to_string()))
        }
    }

    #[test]
    fn body_text_strips_fetched_document() {
        let source = FixedSource(
            "head\nSTART OF THIS PROJECT GUTENBERG EBOOK\nbody\nx\ny\nz\nEND OF THIS PROJECT GUTENBERG EBOOK\n",
        );
        let body = body_text(&source, &BoilerplateStripper::gutenberg(), "url", "key").unwrap();
        assert_eq!(body, "body\n");
    }

    #[test]
    fn body_text_propagates_fetch_failure() {
        let err = body_text(&FailingSource, &BoilerplateStripper::gutenberg(), "url", "key")
            .unwrap_err();
        assert!(matches!(err, TomeError::SourceUnavailable(_)));
    }

    #[test]
    fn body_text_reports_malformed_document() {
        let err = body_text(
            &FixedSource("no markers"),
            &BoilerplateStripper::gutenberg(),
            "url",
            "key",
        )
        .unwrap_err();
        assert!(matches!(err, TomeError::MalformedDocument(_)));
    }
}
