/// Actions an observer can take during series summation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop summing and report the partial result.
    StopEarly,
}
