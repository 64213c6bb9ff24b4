//! Declarative sprite layouts
//!
//! A [`Layout`] is an ordered table of named placements. Resolving it against
//! a screen size produces one pixel [`Rect`] per entry, in table order, which
//! is also the draw order. All arithmetic is integer and truncating.

use std::fmt;

use spritebox_render::Rect;

use crate::config::LayoutKind;

/// Vertical anchoring for horizontally centred entries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAnchor {
    /// Top edge `margin` pixels below the top of the screen
    Top(i32),
    /// Bottom edge `margin` pixels above the bottom of the screen
    Bottom(i32),
}

/// How one entry is positioned
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The whole screen
    Fill,
    /// Cell `index` of `count` equal cells laid out left to right with `gap`
    /// pixels between them; the row is centred on both axes
    Row {
        index: u32,
        count: u32,
        width: u32,
        height: u32,
        gap: u32,
    },
    /// Centred horizontally, anchored vertically
    Anchored {
        vertical: VerticalAnchor,
        width: u32,
        height: u32,
    },
    /// Centred inside an earlier entry
    Inset {
        parent: String,
        width: u32,
        height: u32,
    },
}

/// A named placement
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutEntry {
    pub name: String,
    pub placement: Placement,
}

/// Layout resolution error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// An inset refers to a name that is not defined earlier in the table
    UnknownParent { entry: String, parent: String },
    /// Two entries share a name
    DuplicateName(String),
    /// Row cell index is not below the cell count
    RowIndexOutOfRange { entry: String, index: u32, count: u32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::UnknownParent { entry, parent } => write!(
                f,
                "Layout entry '{}' is inset in '{}', which is not defined before it",
                entry, parent
            ),
            LayoutError::DuplicateName(name) => {
                write!(f, "Layout entry '{}' is defined more than once", name)
            }
            LayoutError::RowIndexOutOfRange { entry, index, count } => write!(
                f,
                "Layout entry '{}' uses row cell {} of {}",
                entry, index, count
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Ordered table of placements
///
/// # Example
/// ```ignore
/// let layout = Layout::new()
///     .fill("background")
///     .row("left_frame", 0, 2, 350, 250, 150)
///     .inset("left_image", "left_frame", 300, 200);
/// let rects = layout.resolve(1000, 600)?;
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    entries: Vec<LayoutEntry>,
}

impl Layout {
    /// Create an empty layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn with_entry(mut self, name: &str, placement: Placement) -> Self {
        self.entries.push(LayoutEntry {
            name: name.to_string(),
            placement,
        });
        self
    }

    /// Append a full-screen entry
    pub fn fill(self, name: &str) -> Self {
        self.with_entry(name, Placement::Fill)
    }

    /// Append a row cell
    pub fn row(self, name: &str, index: u32, count: u32, width: u32, height: u32, gap: u32) -> Self {
        self.with_entry(
            name,
            Placement::Row {
                index,
                count,
                width,
                height,
                gap,
            },
        )
    }

    /// Append a horizontally centred, vertically anchored entry
    pub fn anchored(self, name: &str, vertical: VerticalAnchor, width: u32, height: u32) -> Self {
        self.with_entry(
            name,
            Placement::Anchored {
                vertical,
                width,
                height,
            },
        )
    }

    /// Append an entry centred inside `parent`
    pub fn inset(self, name: &str, parent: &str, width: u32, height: u32) -> Self {
        self.with_entry(
            name,
            Placement::Inset {
                parent: parent.to_string(),
                width,
                height,
            },
        )
    }

    /// Background, then two 350x250 frames 150 px apart, each holding a
    /// centred 300x200 image
    pub fn framed_pair() -> Self {
        Self::new()
            .fill("background")
            .row("left_frame", 0, 2, 350, 250, 150)
            .inset("left_image", "left_frame", 300, 200)
            .row("right_frame", 1, 2, 350, 250, 150)
            .inset("right_image", "right_frame", 300, 200)
    }

    /// Two centred 400x200 images, 30 px from the top and bottom edges
    pub fn stacked() -> Self {
        Self::new()
            .anchored("top", VerticalAnchor::Top(30), 400, 200)
            .anchored("bottom", VerticalAnchor::Bottom(30), 400, 200)
    }

    /// Preset for a configured layout kind
    pub fn preset(kind: LayoutKind) -> Self {
        match kind {
            LayoutKind::FramedPair => Self::framed_pair(),
            LayoutKind::Stacked => Self::stacked(),
        }
    }

    /// Entries in table order
    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    /// Compute every entry's rectangle for a `screen_width` x `screen_height` screen
    pub fn resolve(&self, screen_width: u32, screen_height: u32) -> Result<Vec<(String, Rect)>, LayoutError> {
        let sw = screen_width as i32;
        let sh = screen_height as i32;
        let mut resolved: Vec<(String, Rect)> = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            if resolved.iter().any(|(name, _)| *name == entry.name) {
                return Err(LayoutError::DuplicateName(entry.name.clone()));
            }

            let rect = match &entry.placement {
                Placement::Fill => Rect::screen(screen_width, screen_height),
                Placement::Row {
                    index,
                    count,
                    width,
                    height,
                    gap,
                } => {
                    if index >= count {
                        return Err(LayoutError::RowIndexOutOfRange {
                            entry: entry.name.clone(),
                            index: *index,
                            count: *count,
                        });
                    }
                    let (w, h, gap) = (*width as i32, *height as i32, *gap as i32);
                    let n = *count as i32;
                    let row_width = n * w + (n - 1) * gap;
                    let start_x = (sw - row_width) / 2;
                    Rect::new(
                        start_x + *index as i32 * (w + gap),
                        (sh - h) / 2,
                        *width,
                        *height,
                    )
                }
                Placement::Anchored {
                    vertical,
                    width,
                    height,
                } => {
                    let x = (sw - *width as i32) / 2;
                    let y = match vertical {
                        VerticalAnchor::Top(margin) => *margin,
                        VerticalAnchor::Bottom(margin) => sh - *height as i32 - margin,
                    };
                    Rect::new(x, y, *width, *height)
                }
                Placement::Inset {
                    parent,
                    width,
                    height,
                } => {
                    let outer = resolved
                        .iter()
                        .find(|(name, _)| name == parent)
                        .map(|(_, rect)| *rect)
                        .ok_or_else(|| LayoutError::UnknownParent {
                            entry: entry.name.clone(),
                            parent: parent.clone(),
                        })?;
                    Rect::new(
                        outer.x + (outer.width as i32 - *width as i32) / 2,
                        outer.y + (outer.height as i32 - *height as i32) / 2,
                        *width,
                        *height,
                    )
                }
            };

            resolved.push((entry.name.clone(), rect));
        }

        Ok(resolved)
    }
}
