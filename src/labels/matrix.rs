use crate::image::ImageView;
use crate::types::{Label, BACKGROUND};
use serde::ser::{Serialize, Serializer};
use serde::Deserialize;

/// `height × width` grid of labels in row-major order.
///
/// Serializes as nested JSON arrays, one inner array per row.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<Label>>")]
pub struct LabelMatrix {
    width: usize,
    height: usize,
    data: Vec<Label>,
}

impl LabelMatrix {
    /// Matrix filled with [`BACKGROUND`].
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![BACKGROUND; width * height],
        }
    }

    /// Wrap a row-major buffer. Returns `None` on a length mismatch.
    pub fn from_vec(width: usize, height: usize, data: Vec<Label>) -> Option<Self> {
        (data.len() == width * height).then_some(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Label {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, label: Label) {
        self.data[y * self.width + x] = label;
    }

    pub fn data(&self) -> &[Label] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [Label] {
        &mut self.data
    }

    /// Owned nested-row copy.
    pub fn to_rows(&self) -> Vec<Vec<Label>> {
        self.rows().map(<[Label]>::to_vec).collect()
    }

    /// Pixel count per label, indexed by label value.
    pub fn histogram(&self) -> Vec<usize> {
        let max = self.data.iter().copied().max().unwrap_or(BACKGROUND) as usize;
        let mut counts = vec![0usize; max + 1];
        for &label in &self.data {
            counts[label as usize] += 1;
        }
        counts
    }

    /// Pixels decoded as background or out-of-palette.
    pub fn unknown_count(&self) -> usize {
        self.data.iter().filter(|&&l| l == BACKGROUND).count()
    }
}

impl ImageView for LabelMatrix {
    type Pixel = Label;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[Label] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
    fn as_slice(&self) -> Option<&[Label]> {
        Some(&self.data)
    }
}

impl Serialize for LabelMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl TryFrom<Vec<Vec<Label>>> for LabelMatrix {
    type Error = String;

    fn try_from(rows: Vec<Vec<Label>>) -> Result<Self, Self::Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(format!(
                    "row {y} has {} labels, expected {width}",
                    row.len()
                ));
            }
            data.extend(row);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }
}
