/// Side effects requested by a transition, executed by the orchestration
/// layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanAction {
    /// Issue the product lookup for `code`.
    FetchProduct { code: String },

    /// Issue the alternatives fetch for `code` with its first category tag.
    FetchSuggestions { code: String, category_tag: String },

    /// Let the capture source deliver the next code.
    RearmCapture,
}
