use thiserror::Error;

/// Errors raised by grid construction and interior-cell access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A dimension was unparseable or outside the allowed range.
    #[error("dimensions must be whole numbers between 1 and 50")]
    InvalidDimension,
    /// A coordinate fell outside the interior cell range.
    #[error("({col}, {row}) is outside the grid")]
    OutOfBounds { col: i32, row: i32 },
}

/// Reasons a marker placement can be rejected.
///
/// These never abort anything; the interaction layer surfaces the
/// message in the status line and the grid stays untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    /// Both markers aimed at the same border slot.
    #[error("the player and drone markers cannot occupy the same border slot")]
    Overlap,
    /// The other marker sits on an orthogonally adjacent slot.
    #[error("the marker cannot be placed next to the other marker")]
    Adjacent,
    /// The coordinate is not part of the border ring.
    #[error("({col}, {row}) is not a border slot")]
    NotABorderSlot { col: i32, row: i32 },
}

/// Errors from the snapshot exporter.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Export was attempted before both markers were placed.
    #[error("place both the player and drone markers before saving")]
    MarkersMissing,
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}
