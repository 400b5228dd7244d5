// file: src/models/page.rs
// description: Page-number label model for the client-side pager
// reference: serialized as a bare number or the string "ellipsis"

use serde::{Serialize, Serializer};

/// A single label in the pager row: either a concrete page number or an
/// ellipsis gap marker between non-adjacent numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Number(usize),
    Ellipsis,
}

impl PageLabel {
    pub fn as_number(&self) -> Option<usize> {
        match self {
            PageLabel::Number(n) => Some(*n),
            PageLabel::Ellipsis => None,
        }
    }
}

impl Serialize for PageLabel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageLabel::Number(n) => serializer.serialize_u64(*n as u64),
            PageLabel::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}
