///
/// A run of reusable bytes: the full extent of one Void element, or of several adjacent ones.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FreeRange {
    pub offset: u64,
    pub length: u64,
}

impl FreeRange {
    pub fn new(offset: u64, length: u64) -> Self {
        FreeRange { offset, length }
    }

    pub fn end(&self) -> u64 {
        self.offset + self.length
    }
}

///
/// Ordered free-list of the Void elements directly under the Segment.
///
/// Allocation is first-fit in document order.  Adjacent ranges are only merged by [`coalesce`](Self::coalesce), which reports the merged runs so that the caller can rewrite them as single Void elements.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FreeSpace {
    ranges: Vec<FreeRange>,
}

impl FreeSpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ranges(&self) -> &[FreeRange] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn insert(&mut self, range: FreeRange) {
        let index = self.ranges.partition_point(|r| r.offset < range.offset);
        self.ranges.insert(index, range);
    }

    ///
    /// First range, in document order, that can hold `length` bytes.
    ///
    pub fn first_fit(&self, length: u64) -> Option<FreeRange> {
        self.ranges.iter().find(|r| r.length >= length).copied()
    }

    ///
    /// Removes and returns the range starting at `offset`.
    ///
    pub fn take(&mut self, offset: u64) -> Option<FreeRange> {
        let index = self.ranges.iter().position(|r| r.offset == offset)?;
        Some(self.ranges.remove(index))
    }

    ///
    /// Merges every run of byte-adjacent ranges into one range starting at the run's first offset.
    ///
    /// Returns only the ranges that resulted from a merge.
    ///
    pub fn coalesce(&mut self) -> Vec<FreeRange> {
        let mut merged: Vec<FreeRange> = Vec::with_capacity(self.ranges.len());
        let mut grown = Vec::new();
        for range in self.ranges.drain(..) {
            match merged.last_mut() {
                Some(last) if last.end() == range.offset => {
                    last.length += range.length;
                    match grown.last_mut() {
                        Some(run) if *run == merged.len() - 1 => {}
                        _ => grown.push(merged.len() - 1),
                    }
                }
                _ => merged.push(range),
            }
        }
        self.ranges = merged;
        grown.into_iter().map(|index| self.ranges[index]).collect()
    }
}

impl FromIterator<FreeRange> for FreeSpace {
    fn from_iter<I: IntoIterator<Item = FreeRange>>(iter: I) -> Self {
        let mut ranges: Vec<FreeRange> = iter.into_iter().collect();
        ranges.sort_by_key(|r| r.offset);
        FreeSpace { ranges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_fit_is_in_document_order() {
        let space: FreeSpace = vec![FreeRange::new(200, 50), FreeRange::new(10, 8), FreeRange::new(100, 30)].into_iter().collect();
        assert_eq!(Some(FreeRange::new(100, 30)), space.first_fit(20));
        assert_eq!(Some(FreeRange::new(10, 8)), space.first_fit(8));
        assert_eq!(Some(FreeRange::new(200, 50)), space.first_fit(31));
        assert_eq!(None, space.first_fit(51));
    }

    #[test]
    fn coalesce_two_adjacent() {
        let mut space: FreeSpace = vec![FreeRange::new(20, 4), FreeRange::new(24, 6)].into_iter().collect();
        assert_eq!(vec![FreeRange::new(20, 10)], space.coalesce());
        assert_eq!(&[FreeRange::new(20, 10)], space.ranges());
    }

    #[test]
    fn coalesce_runs_transitively() {
        let mut space: FreeSpace = vec![
            FreeRange::new(0, 2),
            FreeRange::new(2, 3),
            FreeRange::new(5, 4),
            FreeRange::new(20, 4),
            FreeRange::new(30, 2),
            FreeRange::new(32, 2),
        ]
        .into_iter()
        .collect();

        assert_eq!(vec![FreeRange::new(0, 9), FreeRange::new(30, 4)], space.coalesce());
        assert_eq!(&[FreeRange::new(0, 9), FreeRange::new(20, 4), FreeRange::new(30, 4)], space.ranges());
        assert!(space.coalesce().is_empty());
    }

    #[test]
    fn take_and_insert() {
        let mut space = FreeSpace::new();
        space.insert(FreeRange::new(50, 5));
        space.insert(FreeRange::new(10, 5));
        assert_eq!(&[FreeRange::new(10, 5), FreeRange::new(50, 5)], space.ranges());
        assert_eq!(Some(FreeRange::new(10, 5)), space.take(10));
        assert_eq!(None, space.take(10));
        assert_eq!(&[FreeRange::new(50, 5)], space.ranges());
    }
}
