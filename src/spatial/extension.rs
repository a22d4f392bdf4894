//! Grid growth and border trimming for tile arrays
//!
//! Growth is planned first ([`calculate_extension`]) and applied second
//! ([`extend_array_2d`]), so a write outside the grid never recurses. Trimming
//! removes fully empty border lines in a fixed order (left, top, right, bottom)
//! and never shrinks a dimension below one cell.
//!
//! Arrays are indexed `[row, column]`, i.e. `[y, x]`.

use ndarray::{Array2, ArrayView2, Axis, Slice};

/// Padding required on each side to bring a cell into the grid
///
/// Minimizes memory allocation by calculating exact requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtensionInfo {
    /// Columns added before column 0
    pub pad_left: usize,
    /// Columns added after the last column
    pub pad_right: usize,
    /// Rows added before row 0
    pub pad_top: usize,
    /// Rows added after the last row
    pub pad_bottom: usize,
    /// Whether extension is actually required
    pub needs_extension: bool,
}

impl ExtensionInfo {
    /// Dimensions `[width, height]` after applying the padding
    pub const fn extended_dims(&self, current_dims: [usize; 2]) -> [usize; 2] {
        [
            current_dims[0] + self.pad_left + self.pad_right,
            current_dims[1] + self.pad_top + self.pad_bottom,
        ]
    }

    /// True when the origin moves, i.e. cells were added left or above
    pub const fn shifts_origin(&self) -> bool {
        self.pad_left > 0 || self.pad_top > 0
    }
}

/// Calculate the padding needed so `coordinates` (`[x, y]`) lies in the grid
///
/// `current_dims` is `[width, height]`. Cells left of or above the grid pad
/// the near side (shifting the origin); cells right of or below pad the far
/// side. Corner cells pad both axes.
pub fn calculate_extension(current_dims: [usize; 2], coordinates: [i32; 2]) -> ExtensionInfo {
    let width = current_dims[0] as i64;
    let height = current_dims[1] as i64;
    let x = i64::from(coordinates[0]);
    let y = i64::from(coordinates[1]);

    // Current extent is [0, dim - 1]; an empty axis has max -1
    let pad_left = (-x).max(0) as usize;
    let pad_right = (x - (width - 1)).max(0) as usize;
    let pad_top = (-y).max(0) as usize;
    let pad_bottom = (y - (height - 1)).max(0) as usize;

    let needs_extension = pad_left + pad_right + pad_top + pad_bottom > 0;

    ExtensionInfo {
        pad_left,
        pad_right,
        pad_top,
        pad_bottom,
        needs_extension,
    }
}

/// Extend a 2D array with padding
///
/// Copies existing data to the appropriate position in the new array
/// while filling new cells with the specified padding value. Returns
/// the original array unchanged if no extension is needed.
pub fn extend_array_2d<T: Clone>(
    array: &Array2<T>,
    info: &ExtensionInfo,
    padding_value: T,
) -> Array2<T> {
    if !info.needs_extension {
        return array.clone();
    }

    let (old_rows, old_cols) = array.dim();
    let new_shape = [
        old_rows + info.pad_top + info.pad_bottom,
        old_cols + info.pad_left + info.pad_right,
    ];

    let mut new_array = Array2::from_elem(new_shape, padding_value);

    // O(mn) copy preserves spatial relationships
    for i in 0..old_rows {
        for j in 0..old_cols {
            if let (Some(src), Some(dst)) = (
                array.get([i, j]),
                new_array.get_mut([i + info.pad_top, j + info.pad_left]),
            ) {
                *dst = src.clone();
            }
        }
    }

    new_array
}

/// Number of empty lines removed from each border by [`trim_empty_borders`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrimInfo {
    /// Columns removed at the left edge
    pub left: usize,
    /// Rows removed at the top edge
    pub top: usize,
    /// Columns removed at the right edge
    pub right: usize,
    /// Rows removed at the bottom edge
    pub bottom: usize,
}

impl TrimInfo {
    /// True when nothing was removed
    pub const fn is_empty(&self) -> bool {
        self.left + self.top + self.right + self.bottom == 0
    }
}

// Leading lanes along `axis` made only of `empty`, leaving at least one lane
fn leading_empty_lanes<T: PartialEq>(view: &ArrayView2<'_, T>, axis: Axis, empty: &T) -> usize {
    let lanes = view.len_of(axis);
    view.axis_iter(axis)
        .take_while(|lane| lane.iter().all(|cell| cell == empty))
        .count()
        .min(lanes.saturating_sub(1))
}

fn trailing_empty_lanes<T: PartialEq>(view: &ArrayView2<'_, T>, axis: Axis, empty: &T) -> usize {
    let lanes = view.len_of(axis);
    view.axis_iter(axis)
        .rev()
        .take_while(|lane| lane.iter().all(|cell| cell == empty))
        .count()
        .min(lanes.saturating_sub(1))
}

/// Remove fully `empty` border columns and rows
///
/// Order is left columns, top rows, right columns, bottom rows; each pass
/// repeats while its border line is empty. A dimension never drops below one,
/// so an all-empty grid collapses to a single cell. Returns `None` when
/// nothing was removed.
pub fn trim_empty_borders<T: Clone + PartialEq>(
    array: &Array2<T>,
    empty: &T,
) -> Option<(Array2<T>, TrimInfo)> {
    let view = array.view();
    let left = leading_empty_lanes(&view, Axis(1), empty);
    let view = view.slice_axis_move(Axis(1), Slice::from(left..));
    let top = leading_empty_lanes(&view, Axis(0), empty);
    let view = view.slice_axis_move(Axis(0), Slice::from(top..));

    let right = trailing_empty_lanes(&view, Axis(1), empty);
    let kept_columns = view.ncols() - right;
    let view = view.slice_axis_move(Axis(1), Slice::from(..kept_columns));
    let bottom = trailing_empty_lanes(&view, Axis(0), empty);
    let kept_rows = view.nrows() - bottom;
    let view = view.slice_axis_move(Axis(0), Slice::from(..kept_rows));

    let info = TrimInfo {
        left,
        top,
        right,
        bottom,
    };

    (!info.is_empty()).then(|| (view.to_owned(), info))
}
