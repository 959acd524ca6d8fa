//! Paginated story document
//!
//! Layout runs top to bottom with a single vertical cursor. Each block
//! (title, subtitle, divider, sections, choices, metadata) is measured after
//! wrapping; a block that would overflow the page moves to a fresh one when
//! it fits there, and otherwise flows line by line so nothing is cut.

use chrono::NaiveDate;

use super::wrap::{columns_for, wrap_text};
use crate::entities::StoryResult;
use crate::value_objects::tradition_name;

pub const DOCUMENT_FOOTER_BRAND: &str = "Generated with MythWeaver.fun";

const GOLD: [u8; 3] = [218, 165, 32];
const MUTED: [u8; 3] = [160, 160, 160];
const BODY: [u8; 3] = [40, 40, 40];
const SECONDARY: [u8; 3] = [60, 60, 60];
const FOOTER: [u8; 3] = [128, 128, 128];

const OUTCOME_INDENT_MM: f32 = 5.0;
const FOOTER_OFFSET_MM: f32 = 15.0;
const FOOTER_RESERVE_MM: f32 = 30.0;
/// Baseline gap in the plain-text rendering that reads as a paragraph break
const PLAIN_TEXT_BREAK_MM: f32 = 10.0;

/// Physical page in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_mm: f32,
}

impl PageGeometry {
    pub const A4: PageGeometry = PageGeometry {
        width_mm: 210.0,
        height_mm: 297.0,
        margin_mm: 20.0,
    };

    pub fn content_width(&self) -> f32 {
        self.width_mm - self.margin_mm * 2.0
    }

    pub fn top(&self) -> f32 {
        self.margin_mm
    }

    pub fn bottom(&self) -> f32 {
        self.height_mm - self.margin_mm
    }

    pub fn usable_height(&self) -> f32 {
        self.bottom() - self.top()
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::A4
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_pt: f32,
    pub bold: bool,
    pub italic: bool,
    pub color: [u8; 3],
    pub align: TextAlign,
}

impl TextStyle {
    const fn new(size_pt: f32, color: [u8; 3]) -> Self {
        Self {
            size_pt,
            bold: false,
            italic: false,
            color,
            align: TextAlign::Left,
        }
    }

    const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    const fn right(mut self) -> Self {
        self.align = TextAlign::Right;
        self
    }
}

const TITLE: TextStyle = TextStyle::new(24.0, GOLD).bold();
const SUBTITLE: TextStyle = TextStyle::new(12.0, MUTED).italic();
const HEADING: TextStyle = TextStyle::new(16.0, GOLD).bold();
const SCENARIO_TEXT: TextStyle = TextStyle::new(11.0, SECONDARY);
const STORY_TEXT: TextStyle = TextStyle::new(11.0, BODY);
const CHOICE_LABEL: TextStyle = TextStyle::new(12.0, GOLD).bold();
const CHOICE_OUTCOME: TextStyle = TextStyle::new(10.0, SECONDARY);
const META_TEXT: TextStyle = TextStyle::new(10.0, SECONDARY);
const FOOTER_TEXT: TextStyle = TextStyle::new(8.0, FOOTER).italic();

/// One positioned element on a page. `y_mm` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum PageItem {
    Text {
        x_mm: f32,
        y_mm: f32,
        text: String,
        style: TextStyle,
    },
    Rule {
        x1_mm: f32,
        x2_mm: f32,
        y_mm: f32,
        color: [u8; 3],
    },
}

impl PageItem {
    pub fn y_mm(&self) -> f32 {
        match self {
            PageItem::Text { y_mm, .. } | PageItem::Rule { y_mm, .. } => *y_mm,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            PageItem::Text { text, .. } => Some(text),
            PageItem::Rule { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub items: Vec<PageItem>,
}

impl Page {
    /// Non-empty text lines in layout order
    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter_map(PageItem::text)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Plain-text rendering; pages are separated by form feeds
    pub fn to_plain_text(&self) -> String {
        let rule = "-".repeat(columns_for(self.geometry.content_width(), SCENARIO_TEXT.size_pt));
        let mut pages = Vec::with_capacity(self.pages.len());

        for page in &self.pages {
            let mut out = String::new();
            let mut last_y: Option<f32> = None;

            for item in &page.items {
                let y = item.y_mm();
                match last_y {
                    Some(prev) if (y - prev).abs() < f32::EPSILON => out.push_str("    "),
                    Some(prev) => {
                        out.push('\n');
                        if y - prev > PLAIN_TEXT_BREAK_MM {
                            out.push('\n');
                        }
                    }
                    None => {}
                }
                match item {
                    PageItem::Text { text, .. } => out.push_str(text),
                    PageItem::Rule { .. } => out.push_str(&rule),
                }
                last_y = Some(y);
            }

            out.push('\n');
            pages.push(out);
        }

        pages.join("\n\x0C\n")
    }
}

enum LineKind {
    Text {
        x_mm: f32,
        text: String,
        style: TextStyle,
    },
    Rule,
}

struct Line {
    kind: LineKind,
    height: f32,
    gap_after: f32,
}

/// A unit of layout. The first `keep` lines never split across pages.
struct Block {
    lines: Vec<Line>,
    keep: usize,
}

impl Block {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            keep: 1,
        }
    }

    /// Append wrapped text. The last line carries `gap_after`.
    fn text(
        mut self,
        text: &str,
        x_mm: f32,
        width_mm: f32,
        style: TextStyle,
        line_height: f32,
        gap_after: f32,
    ) -> Self {
        let wrapped = wrap_text(text, columns_for(width_mm, style.size_pt));
        let count = wrapped.len();
        for (idx, text) in wrapped.into_iter().enumerate() {
            self.lines.push(Line {
                kind: LineKind::Text { x_mm, text, style },
                height: line_height,
                gap_after: if idx + 1 == count { gap_after } else { 0.0 },
            });
        }
        self
    }

    fn rule(mut self, height: f32, gap_after: f32) -> Self {
        self.lines.push(Line {
            kind: LineKind::Rule,
            height,
            gap_after,
        });
        self
    }

    /// Keep everything added so far together with the next line
    fn keep_with_next(mut self) -> Self {
        self.keep = self.lines.len() + 1;
        self
    }

    fn height(&self) -> f32 {
        let count = self.lines.len();
        self.lines
            .iter()
            .enumerate()
            .map(|(idx, l)| l.height + if idx + 1 == count { 0.0 } else { l.gap_after })
            .sum()
    }

    fn lead_height(&self) -> f32 {
        let keep = self.keep.min(self.lines.len());
        self.lines[..keep]
            .iter()
            .enumerate()
            .map(|(idx, l)| l.height + if idx + 1 == keep { 0.0 } else { l.gap_after })
            .sum()
    }
}

struct Layout {
    geometry: PageGeometry,
    pages: Vec<Page>,
    cursor: f32,
}

impl Layout {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![Page::default()],
            cursor: geometry.top(),
        }
    }

    fn at_top(&self) -> bool {
        self.cursor <= self.geometry.top()
    }

    fn fits(&self, height: f32) -> bool {
        self.cursor + height <= self.geometry.bottom()
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.cursor = self.geometry.top();
    }

    fn push(&mut self, item: PageItem) {
        if let Some(page) = self.pages.last_mut() {
            page.items.push(item);
        }
    }

    fn place(&mut self, block: Block) {
        if block.lines.is_empty() {
            return;
        }

        let total = block.height();
        if !self.at_top() && !self.fits(total) {
            let fits_fresh_page = total <= self.geometry.usable_height();
            if fits_fresh_page || !self.fits(block.lead_height()) {
                self.new_page();
            }
        }

        for line in block.lines {
            if !self.at_top() && !self.fits(line.height) {
                self.new_page();
            }
            let y_mm = self.cursor;
            match line.kind {
                LineKind::Text { x_mm, text, style } => self.push(PageItem::Text {
                    x_mm,
                    y_mm,
                    text,
                    style,
                }),
                LineKind::Rule => self.push(PageItem::Rule {
                    x1_mm: self.geometry.margin_mm,
                    x2_mm: self.geometry.width_mm - self.geometry.margin_mm,
                    y_mm,
                    color: GOLD,
                }),
            }
            self.cursor += line.height + line.gap_after;
        }
    }

    fn footer(&mut self, created_on: NaiveDate) {
        if self.cursor > self.geometry.height_mm - FOOTER_RESERVE_MM {
            self.new_page();
        }
        let y_mm = self.geometry.height_mm - FOOTER_OFFSET_MM;
        self.push(PageItem::Text {
            x_mm: self.geometry.margin_mm,
            y_mm,
            text: DOCUMENT_FOOTER_BRAND.to_string(),
            style: FOOTER_TEXT,
        });
        self.push(PageItem::Text {
            x_mm: self.geometry.width_mm - self.geometry.margin_mm,
            y_mm,
            text: format!("Created: {}", created_on.format("%-m/%-d/%Y")),
            style: FOOTER_TEXT.right(),
        });
        self.cursor = self.geometry.height_mm;
    }
}

/// Lay out `story` and the scenario it was woven from on A4 pages
pub fn build_document(story: &StoryResult, scenario: &str, created_on: NaiveDate) -> Document {
    let geometry = PageGeometry::A4;
    let left = geometry.margin_mm;
    let width = geometry.content_width();
    let mut layout = Layout::new(geometry);

    layout.place(Block::new().text(&story.title, left, width, TITLE, 10.0, 10.0));
    layout.place(Block::new().text(
        &format!("{} Tradition", tradition_name(&story.meta.culture)),
        left,
        width,
        SUBTITLE,
        5.0,
        10.0,
    ));
    layout.place(Block::new().rule(1.0, 14.0));

    layout.place(
        Block::new()
            .text("Your Modern Scenario", left, width, HEADING, 10.0, 0.0)
            .keep_with_next()
            .text(scenario, left, width, SCENARIO_TEXT, 5.0, 15.0),
    );

    layout.place(
        Block::new()
            .text("Your Ancient Myth", left, width, HEADING, 10.0, 0.0)
            .keep_with_next()
            .text(&story.adapted_story, left, width, STORY_TEXT, 5.0, 15.0),
    );

    let outcome_x = left + OUTCOME_INDENT_MM;
    let outcome_width = width - OUTCOME_INDENT_MM;
    for (idx, choice) in story.choices.iter().enumerate() {
        let mut block = Block::new();
        if idx == 0 {
            block = block
                .text("Choose Your Path", left, width, HEADING, 10.0, 5.0)
                .keep_with_next();
        }
        let label = format!("{}. {}", idx + 1, choice.label);
        block = block
            .text(&label, left, width, CHOICE_LABEL, 8.0, 0.0)
            .keep_with_next()
            .text(&choice.outcome, outcome_x, outcome_width, CHOICE_OUTCOME, 4.0, 8.0);
        layout.place(block);
    }

    let mut meta = Block::new()
        .text("About This Myth", left, width, HEADING, 10.0, 5.0)
        .keep_with_next()
        .text(
            &format!("Cultural Tradition: {}", tradition_name(&story.meta.culture)),
            left,
            width,
            META_TEXT,
            5.0,
            0.0,
        )
        .text(
            &format!("Source Motif: {}", story.meta.source_motif),
            left,
            width,
            META_TEXT,
            5.0,
            0.0,
        );
    if let Some(seconds) = story.meta.generation_time_label() {
        meta = meta.text(
            &format!("Generation Time: {}", seconds),
            left,
            width,
            META_TEXT,
            5.0,
            0.0,
        );
    }
    layout.place(meta);

    layout.footer(created_on);

    Document {
        title: story.title.clone(),
        geometry,
        pages: layout.pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Choice, StoryMeta};

    fn story(paragraphs: usize, choices: usize) -> StoryResult {
        let paragraph = "The baker woke before dawn and fed the old oven with the last of the \
                         winter wood, knowing the harvest would not come in time.";
        StoryResult {
            title: "The Baker's Last Loaf".into(),
            adapted_story: vec![paragraph; paragraphs].join("\n"),
            choices: (1..=choices)
                .map(|n| Choice {
                    id: format!("c{n}"),
                    label: format!("Path number {n}"),
                    outcome: "The gods of the hearth remember every loaf given freely, and \
                              they answer in kind when the village is hungry."
                        .into(),
                })
                .collect(),
            meta: StoryMeta {
                culture: "greek".into(),
                source_motif: "sacrifice for community".into(),
                generation_time: Some(2.5),
                ai_model: None,
            },
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
    }

    fn all_text(doc: &Document) -> Vec<String> {
        doc.pages
            .iter()
            .flat_map(|p| p.text_lines().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_short_story_fits_one_page_in_section_order() {
        let doc = build_document(&story(1, 3), "My bakery is closing.", date());
        assert_eq!(doc.page_count(), 1);

        let text = all_text(&doc);
        let position = |needle: &str| {
            text.iter()
                .position(|l| l == needle)
                .unwrap_or_else(|| panic!("missing {needle}"))
        };
        assert!(position("The Baker's Last Loaf") < position("Greek Tradition"));
        assert!(position("Greek Tradition") < position("Your Modern Scenario"));
        assert!(position("Your Modern Scenario") < position("Your Ancient Myth"));
        assert!(position("Your Ancient Myth") < position("Choose Your Path"));
        assert!(position("Choose Your Path") < position("1. Path number 1"));
        assert!(position("3. Path number 3") < position("About This Myth"));
        assert!(position("About This Myth") < position(DOCUMENT_FOOTER_BRAND));
        assert!(text.contains(&"Created: 3/9/2026".to_string()));
    }

    #[test]
    fn test_long_story_paginates_without_losing_text() {
        let story = story(60, 8);
        let doc = build_document(&story, "My bakery is closing.", date());
        assert!(doc.page_count() > 2);

        let expected: Vec<String> = wrap_text(&story.adapted_story, columns_for(170.0, 11.0))
            .into_iter()
            .filter(|l| !l.is_empty())
            .collect();
        let text = all_text(&doc);
        let start = text
            .iter()
            .position(|l| l == "Your Ancient Myth")
            .map(|i| i + 1)
            .unwrap_or_default();
        assert_eq!(&text[start..start + expected.len()], expected.as_slice());

        for n in 1..=8 {
            assert!(text.contains(&format!("{n}. Path number {n}")));
        }
    }

    #[test]
    fn test_items_stay_inside_page_bounds() {
        let doc = build_document(&story(60, 8), "scenario", date());
        let geometry = doc.geometry;
        for page in &doc.pages {
            for item in &page.items {
                assert!(item.y_mm() >= geometry.top());
                assert!(item.y_mm() <= geometry.height_mm - FOOTER_OFFSET_MM);
            }
        }
    }

    #[test]
    fn test_heading_never_ends_a_page() {
        for paragraphs in 1..40 {
            let doc = build_document(&story(paragraphs, 4), "scenario", date());
            for page in &doc.pages {
                let last_text = page
                    .items
                    .iter()
                    .rev()
                    .find_map(PageItem::text)
                    .unwrap_or_default();
                assert_ne!(last_text, "Your Ancient Myth");
                assert_ne!(last_text, "Choose Your Path");
                assert_ne!(last_text, "Your Modern Scenario");
                assert_ne!(last_text, "About This Myth");
            }
        }
    }

    #[test]
    fn test_footer_is_on_last_page_only() {
        let doc = build_document(&story(60, 8), "scenario", date());
        let footer_pages: Vec<usize> = doc
            .pages
            .iter()
            .enumerate()
            .filter(|(_, p)| p.text_lines().any(|l| l == DOCUMENT_FOOTER_BRAND))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(footer_pages, vec![doc.page_count() - 1]);
    }

    #[test]
    fn test_plain_text_separates_pages_with_form_feed() {
        let doc = build_document(&story(60, 8), "scenario", date());
        let text = doc.to_plain_text();
        assert_eq!(text.matches('\x0C').count(), doc.page_count() - 1);
        assert!(text.starts_with("The Baker's Last Loaf\n"));
        assert!(text.contains(DOCUMENT_FOOTER_BRAND));
    }

    #[test]
    fn test_metadata_follows_choices() {
        let doc = build_document(&story(1, 1), "scenario", date());
        let text = all_text(&doc);
        assert!(text.contains(&"Cultural Tradition: Greek".to_string()));
        assert!(text.contains(&"Source Motif: sacrifice for community".to_string()));
        assert!(text.contains(&"Generation Time: 2.50s".to_string()));
        assert!(doc.to_plain_text().contains("sacrifice for community"));
    }

    #[test]
    fn test_generation_time_omitted_when_unknown() {
        let mut story = story(1, 1);
        story.meta.generation_time = None;
        let doc = build_document(&story, "scenario", date());
        assert!(all_text(&doc).iter().all(|l| !l.starts_with("Generation Time")));
        assert!(all_text(&doc).contains(&"Source Motif: sacrifice for community".to_string()));
    }

    #[test]
    fn test_metadata_survives_pagination() {
        for paragraphs in 1..40 {
            let doc = build_document(&story(paragraphs, 4), "scenario", date());
            let text = all_text(&doc);
            let heading = text.iter().position(|l| l == "About This Myth");
            let motif = text.iter().position(|l| l == "Source Motif: sacrifice for community");
            assert!(matches!((heading, motif), (Some(h), Some(m)) if h < m));
        }
    }

    #[test]
    fn test_unknown_culture_is_capitalized_in_subtitle() {
        let mut story = story(1, 1);
        story.meta.culture = "mesopotamian".into();
        let doc = build_document(&story, "scenario", date());
        assert!(all_text(&doc).contains(&"Mesopotamian Tradition".to_string()));
    }
}
