//! Per-conversion mutable state

use super::media::{image_markdown, image_path, ImageCounters, ImageKind};
use super::options::W2MOptions;
use crate::core::paragraph::{merge_scripts, ContentItem, ParagraphExtractor};
use crate::core::tree::Node;
use crate::utils::error::ConversionWarning;

/// What a conversion emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Non-empty paragraphs written to the output
    pub paragraphs: usize,
    /// Non-empty tables written to the output
    pub tables: usize,
    /// Math items in emitted paragraphs, counted after script folding
    ///
    /// A run `x` followed by a superscript run `2` counts as one formula here
    /// even though it held no math before folding. Images are tallied per
    /// kind in the two fields below, not here.
    pub math: usize,
    pub raster_images: usize,
    pub vector_images: usize,
    /// Body children that were neither paragraphs nor tables
    pub other: usize,
}

impl ConversionStats {
    pub fn images(&self) -> usize {
        self.raster_images + self.vector_images
    }
}

/// Conversion state threaded through the assembler and the table flattener
#[derive(Debug, Default)]
pub struct ConversionState {
    pub counters: ImageCounters,
    pub stats: ConversionStats,
    pub warnings: Vec<ConversionWarning>,
    extractor: ParagraphExtractor,
}

impl ConversionState {
    pub fn new(counters: ImageCounters) -> Self {
        Self {
            counters,
            ..Self::default()
        }
    }

    /// Record a non-fatal issue
    pub fn warn(&mut self, warning: ConversionWarning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    pub fn absorb(&mut self, warnings: impl IntoIterator<Item = ConversionWarning>) {
        for warning in warnings {
            self.warn(warning);
        }
    }

    /// Extract and fold one paragraph's items, keeping the extractor's warnings
    pub fn paragraph_items(&mut self, paragraph: Node) -> Vec<ContentItem> {
        let items = self.extractor.extract(paragraph);
        let warnings = self.extractor.take_warnings();
        self.absorb(warnings);
        merge_scripts(items)
    }

    /// Number the next image of `kind` and render its Markdown link
    pub fn image_link(
        &mut self,
        options: &W2MOptions,
        kind: ImageKind,
        display_name: &str,
    ) -> String {
        let n = self.counters.next(kind);
        match kind {
            ImageKind::Raster => self.stats.raster_images += 1,
            ImageKind::Vector => self.stats.vector_images += 1,
        }
        image_markdown(display_name, &image_path(options, kind, n))
    }
}
