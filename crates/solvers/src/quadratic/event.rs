/// Event emitted by the series solver after each term is added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Term index, starting at zero.
    pub n: usize,

    /// Catalan coefficient `C(n)`.
    pub coefficient: f64,

    /// The term `C(n)·Aⁿ` just added.
    pub term: f64,

    /// Partial sum through this term.
    pub partial_sum: f64,

    /// Change from the previous partial sum.
    ///
    /// `None` for the first term, which has no predecessor.
    pub delta: Option<f64>,
}
