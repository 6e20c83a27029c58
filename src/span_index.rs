use std::collections::BTreeMap;

///
/// Position-indexed table of the Master elements seen so far.
///
/// Each entry maps the position of a Master element's header to its total byte length and id.  Elements are resolved to their parent by finding the closest registered span of the parent's id that encloses them, so a subtree has to be discovered top-down before any of its descendants can be resolved.
///
#[derive(Debug, Default, Clone)]
pub struct SpanIndex {
    spans: BTreeMap<u64, (u64, u64)>,
}

impl SpanIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, position: u64, byte_length: u64, id: u64) {
        self.spans.insert(position, (byte_length, id));
    }

    pub fn clear(&mut self) {
        self.spans.clear();
    }

    ///
    /// Returns the position of the innermost registered span with id `parent_id` that strictly encloses `position`.
    ///
    pub fn enclosing(&self, position: u64, parent_id: u64) -> Option<u64> {
        self.spans
            .range(..position)
            .rev()
            .find(|&(&start, &(length, id))| id == parent_id && position < start + length)
            .map(|(&start, _)| start)
    }

    ///
    /// Returns the position of the innermost registered span of any id that strictly encloses `position`.
    ///
    pub fn innermost(&self, position: u64) -> Option<u64> {
        self.spans
            .range(..position)
            .rev()
            .find(|&(&start, &(length, _))| position < start + length)
            .map(|(&start, _)| start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_innermost_enclosing_span() {
        let mut spans = SpanIndex::new();
        spans.register(0, 100, 0x18538067);
        spans.register(10, 20, 0x1254C367);
        spans.register(40, 20, 0x1254C367);

        assert_eq!(Some(10), spans.enclosing(15, 0x1254C367));
        assert_eq!(Some(40), spans.enclosing(45, 0x1254C367));
        assert_eq!(Some(0), spans.enclosing(45, 0x18538067));
        assert_eq!(None, spans.enclosing(35, 0x1254C367));

        assert_eq!(Some(40), spans.innermost(45));
        assert_eq!(Some(0), spans.innermost(35));
        assert_eq!(None, spans.innermost(150));
    }

    #[test]
    fn start_position_is_not_enclosed() {
        let mut spans = SpanIndex::new();
        spans.register(10, 20, 0xA0);
        assert_eq!(None, spans.enclosing(10, 0xA0));
        assert_eq!(None, spans.enclosing(30, 0xA0));
        assert_eq!(Some(10), spans.enclosing(29, 0xA0));
    }
}
