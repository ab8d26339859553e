//! Visual adjacency metadata for the entries list.
//!
//! The renderer draws contiguous `Group` rows as one card with rounded
//! corners only at the run boundaries. This module computes, per row, which
//! corners to round. The classification is cheap (one linear pass with a
//! single index of lookahead) and is recomputed from scratch on every list
//! change rather than maintained incrementally.

use crate::entry::{DisplayType, Entry};

/// Bitmask describing which corners of a row are rounded.
///
/// A row outside any card has no bits set. `CENTER` marks membership in a
/// card; `TOP`/`BOTTOM` mark the run boundaries. A run of exactly one row
/// carries all three bits, same as a standalone card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CornerStyle(u8);

impl CornerStyle {
    pub const NONE: CornerStyle = CornerStyle(0);
    pub const CENTER: CornerStyle = CornerStyle(1);
    pub const TOP: CornerStyle = CornerStyle(1 << 1);
    pub const BOTTOM: CornerStyle = CornerStyle(1 << 2);

    pub fn contains(self, other: CornerStyle) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the row is part of a card at all.
    pub fn is_rounded(self) -> bool {
        self.contains(Self::CENTER)
    }
}

impl std::ops::BitOr for CornerStyle {
    type Output = CornerStyle;

    fn bitor(self, rhs: CornerStyle) -> CornerStyle {
        CornerStyle(self.0 | rhs.0)
    }
}

/// Classify every row of `entries` by its position within a run of
/// contiguous `Group` rows.
pub fn map_corners(entries: &[Entry]) -> Vec<CornerStyle> {
    let mut styles = Vec::with_capacity(entries.len());
    let mut run_start: Option<usize> = None;

    for (i, entry) in entries.iter().enumerate() {
        let style = match entry.display_type() {
            DisplayType::Header => {
                run_start = None;
                CornerStyle::NONE
            }
            DisplayType::Standalone => {
                run_start = None;
                CornerStyle::CENTER | CornerStyle::TOP | CornerStyle::BOTTOM
            }
            DisplayType::Group => {
                let mut corner = CornerStyle::CENTER;
                if run_start.is_none() {
                    run_start = Some(i);
                    corner = corner | CornerStyle::TOP;
                }
                let run_ends = entries
                    .get(i + 1)
                    .is_none_or(|next| next.display_type() != DisplayType::Group);
                if run_ends {
                    corner = corner | CornerStyle::BOTTOM;
                }
                corner
            }
            DisplayType::Spacer | DisplayType::Unknown => {
                run_start = None;
                CornerStyle::NONE
            }
        };
        styles.push(style);
    }

    styles
}
