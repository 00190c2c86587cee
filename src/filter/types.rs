/// A directive recognized on one input line (after end-of-line stripping).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `@ifdef NAME`: opens a block gated on NAME being defined.
    Ifdef(&'a str),
    /// `@else`: inverts the innermost open block.
    Else,
    /// `@endif`: closes the innermost open block.
    Endif,
}

/// Counters kept across one filtering run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub lines_read: usize,
    pub lines_emitted: usize,
    pub lines_suppressed: usize,
    pub directives: usize,
    pub max_depth: usize,
}
