use crate::error::CoreResult;
use regex::Regex;

// Surface-text approximations. Commented-out tags count, self-closing tags count
// as open, and a bare `<` in text can look like a tag.
const OPEN_TAG: &str = r"<[^/][^>]*>";
const CLOSE_TAG: &str = r"</[^>]*>";
const IMG_TAG: &str = r"<img[^>]*>";
const ANCHOR: &str = r"<a[^>]*>([^<]*)</a>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagCounts {
    pub open: usize,
    pub close: usize,
}

impl TagCounts {
    pub fn balanced(&self) -> bool {
        self.open >= self.close
    }
}

/// Matches out of a population; `None` from a probe means the population was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    pub matching: usize,
    pub total: usize,
}

impl Coverage {
    pub fn complete(&self) -> bool {
        self.matching == self.total
    }
}

pub struct Heuristics {
    open_tag: Regex,
    close_tag: Regex,
    img_tag: Regex,
    anchor: Regex,
}

impl Heuristics {
    pub fn new() -> CoreResult<Self> {
        Ok(Self {
            open_tag: Regex::new(OPEN_TAG)?,
            close_tag: Regex::new(CLOSE_TAG)?,
            img_tag: Regex::new(IMG_TAG)?,
            anchor: Regex::new(ANCHOR)?,
        })
    }

    pub fn tag_counts(&self, text: &str) -> TagCounts {
        TagCounts {
            open: self.open_tag.find_iter(text).count(),
            close: self.close_tag.find_iter(text).count(),
        }
    }

    pub fn image_alt_coverage(&self, text: &str) -> Option<Coverage> {
        let images: Vec<&str> = self.img_tag.find_iter(text).map(|m| m.as_str()).collect();
        if images.is_empty() {
            return None;
        }
        Some(Coverage {
            matching: images.iter().filter(|img| img.contains("alt=")).count(),
            total: images.len(),
        })
    }

    pub fn link_text_coverage(&self, text: &str) -> Option<Coverage> {
        let mut total = 0;
        let mut matching = 0;
        for caps in self.anchor.captures_iter(text) {
            total += 1;
            let link_text = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            if is_descriptive(link_text) {
                matching += 1;
            }
        }
        if total == 0 {
            None
        } else {
            Some(Coverage { matching, total })
        }
    }
}

fn is_descriptive(link_text: &str) -> bool {
    !link_text.trim().is_empty() && !link_text.to_lowercase().contains("click here")
}
