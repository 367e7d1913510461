use anyhow::Context;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use wcloud::{WordCloud, WordCloudSize};

/// Renders a frequency-weighted word cloud from a word list.
pub trait CloudRenderer {
    /// Render `words` under `name` and return where the artifact was written.
    fn render(&self, words: &[String], name: &str) -> anyhow::Result<PathBuf>;
}

/// Default canvas size for PNG clouds.
pub const DEFAULT_WIDTH: u32 = 400;
pub const DEFAULT_HEIGHT: u32 = 200;

/// Draws the cloud and saves it as `<name>.png`.
///
/// Words are laid out by frequency in the joined text, so a word repeated
/// by resampling is drawn larger.
pub struct ImageRenderer {
    out_dir: PathBuf,
    width: u32,
    height: u32,
}

impl ImageRenderer {
    pub fn new(out_dir: &Path) -> Self {
        Self {
            out_dir: out_dir.to_path_buf(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl CloudRenderer for ImageRenderer {
    fn render(&self, words: &[String], name: &str) -> anyhow::Result<PathBuf> {
        if words.is_empty() {
            anyhow::bail!("no words to draw for {name}");
        }
        let size = WordCloudSize::FromDimensions {
            width: self.width,
            height: self.height,
        };
        let image = WordCloud::default().generate_from_text(&words.join(" "), size, 1.0);

        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(format!("{name}.png"));
        image
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}

/// Persists word-cloud weights as `<name>.json` for an external renderer.
///
/// Each distinct word gets its count and a weight relative to the most
/// frequent word (1.0). Words are listed by count descending, ties in
/// first-seen order.
pub struct WeightFileRenderer {
    out_dir: PathBuf,
}

#[derive(Serialize)]
struct CloudFile<'a> {
    name: &'a str,
    words: Vec<CloudWord<'a>>,
}

#[derive(Serialize)]
struct CloudWord<'a> {
    word: &'a str,
    count: u32,
    weight: f64,
}

impl WeightFileRenderer {
    pub fn new(out_dir: &Path) -> Self {
        Self {
            out_dir: out_dir.to_path_buf(),
        }
    }
}

impl CloudRenderer for WeightFileRenderer {
    fn render(&self, words: &[String], name: &str) -> anyhow::Result<PathBuf> {
        let mut counts: Vec<(&str, u32)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for word in words {
            match index.get(word.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(word.as_str(), counts.len());
                    counts.push((word.as_str(), 1));
                }
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let max = counts.first().map(|(_, c)| *c).unwrap_or(1) as f64;
        let file = CloudFile {
            name,
            words: counts
                .into_iter()
                .map(|(word, count)| CloudWord {
                    word,
                    count,
                    weight: count as f64 / max,
                })
                .collect(),
        };

        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(format!("{name}.json"));
        fs::write(&path, serde_json::to_string_pretty(&file)?)?;
        Ok(path)
    }
}
