use tome_core::{Result, TomeError};

/// Marker line opening the body of a Project Gutenberg text.
pub const GUTENBERG_START: &str = "START OF THIS PROJECT GUTENBERG EBOOK";
/// Marker line closing the body of a Project Gutenberg text.
pub const GUTENBERG_END: &str = "END OF THIS PROJECT GUTENBERG EBOOK";

/// Lines before the end marker treated as trailing license text.
const TRAILING_LINES: usize = 3;

/// Cuts front and back matter off a raw document.
///
/// Keeps the lines after the start-marker line and before the end-marker line,
/// minus the three lines right before the end marker. Kept lines are joined
/// with a single space and retain their own line terminators.
///
/// The three-line rule matches one publisher's layout and is kept literally.
pub struct BoilerplateStripper {
    start_marker: String,
    end_marker: String,
}

impl BoilerplateStripper {
    pub fn new(start_marker: &str, end_marker: &str) -> Self {
        Self {
            start_marker: start_marker.to_string(),
            end_marker: end_marker.to_string(),
        }
    }

    pub fn gutenberg() -> Self {
        Self::new(GUTENBERG_START, GUTENBERG_END)
    }

    pub fn strip(&self, raw: &str) -> Result<String> {
        let lines: Vec<&str> = raw.split_inclusive('\n').collect();

        let start = lines
            .iter()
            .position(|l| l.contains(&self.start_marker))
            .ok_or_else(|| {
                TomeError::MalformedDocument(format!("missing start marker {:?}", self.start_marker))
            })?;
        let after_start = &lines[start + 1..];

        let end = after_start
            .iter()
            .position(|l| l.contains(&self.end_marker))
            .ok_or_else(|| {
                TomeError::MalformedDocument(format!("missing end marker {:?}", self.end_marker))
            })?;

        let body = &after_start[..end.saturating_sub(TRAILING_LINES)];
        Ok(body.join(" "))
    }
}

impl Default for BoilerplateStripper {
    fn default() -> Self {
        Self::gutenberg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(body: &str) -> String {
        format!(
            "Title: Sample\nHeader junk\n*** START OF THIS PROJECT GUTENBERG EBOOK SAMPLE ***\n{body}End of the Project Gutenberg EBook\nlicense one\nlicense two\n*** END OF THIS PROJECT GUTENBERG EBOOK SAMPLE ***\nfooter\n"
        )
    }

    #[test]
    fn strip_keeps_body_only() {
        let raw = book("first line\nsecond line\n");
        let body = BoilerplateStripper::gutenberg().strip(&raw).unwrap();
        assert_eq!(body, "first line\n second line\n");
    }

    #[test]
    fn strip_drops_three_lines_before_end() {
        let raw = book("");
        let body = BoilerplateStripper::gutenberg().strip(&raw).unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn strip_fewer_than_three_lines_yields_empty() {
        let raw = "START OF THIS PROJECT GUTENBERG EBOOK\nonly\nEND OF THIS PROJECT GUTENBERG EBOOK\n";
        let body = BoilerplateStripper::gutenberg().strip(raw).unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn strip_missing_start_marker() {
        let err = BoilerplateStripper::gutenberg()
            .strip("no markers here\nEND OF THIS PROJECT GUTENBERG EBOOK\n")
            .unwrap_err();
        assert!(matches!(err, TomeError::MalformedDocument(_)));
        assert!(err.to_string().contains("start"));
    }

    #[test]
    fn strip_missing_end_marker() {
        let err = BoilerplateStripper::gutenberg()
            .strip("START OF THIS PROJECT GUTENBERG EBOOK\nbody\nmore body\n")
            .unwrap_err();
        assert!(matches!(err, TomeError::MalformedDocument(_)));
        assert!(err.to_string().contains("end"));
    }

    #[test]
    fn strip_end_marker_before_start_is_missing() {
        let raw = "END OF THIS PROJECT GUTENBERG EBOOK\nSTART OF THIS PROJECT GUTENBERG EBOOK\nbody\n";
        let err = BoilerplateStripper::gutenberg().strip(raw).unwrap_err();
        assert!(matches!(err, TomeError::MalformedDocument(_)));
    }

    #[test]
    fn strip_empty_input() {
        assert!(BoilerplateStripper::gutenberg().strip("").is_err());
    }

    #[test]
    fn strip_custom_markers() {
        let raw = "<<begin>>\na\nb\nc\nd\ne\n<<end>>\n";
        let body = BoilerplateStripper::new("<<begin>>", "<<end>>")
            .strip(raw)
            .unwrap();
        assert_eq!(body, "a\n b\n");
    }
}
