//! Graph vocabulary: node labels and customer interaction kinds.

use std::fmt;

/// Node labels stored in the graph. Every label carries a unique `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeLabel {
    Customer,
    Product,
    Category,
    Order,
}

impl NodeLabel {
    pub const ALL: [NodeLabel; 4] = [
        NodeLabel::Customer,
        NodeLabel::Product,
        NodeLabel::Category,
        NodeLabel::Order,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeLabel::Customer => "Customer",
            NodeLabel::Product => "Product",
            NodeLabel::Category => "Category",
            NodeLabel::Order => "Order",
        }
    }

    /// Labels with a human-readable `name` that gets a lookup index.
    pub fn has_name_index(&self) -> bool {
        matches!(self, NodeLabel::Category | NodeLabel::Product)
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer interaction recorded in the `events` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    View,
    Click,
    AddToCart,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [EventKind::View, EventKind::Click, EventKind::AddToCart];

    /// Parse the `event_type` column value.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "view" => Some(EventKind::View),
            "click" => Some(EventKind::Click),
            "add_to_cart" => Some(EventKind::AddToCart),
            _ => None,
        }
    }

    /// Relationship type written from Customer to Product.
    pub fn relationship(&self) -> &'static str {
        match self {
            EventKind::View => "VIEWED",
            EventKind::Click => "CLICKED",
            EventKind::AddToCart => "ADDED_TO_CART",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_indexed_labels() {
        let indexed: Vec<_> = NodeLabel::ALL
            .iter()
            .filter(|l| l.has_name_index())
            .map(|l| l.as_str())
            .collect();
        assert_eq!(indexed, vec!["Product", "Category"]);
    }

    #[test]
    fn test_event_kind_mapping() {
        assert_eq!(EventKind::parse("view").map(|k| k.relationship()), Some("VIEWED"));
        assert_eq!(EventKind::parse("click").map(|k| k.relationship()), Some("CLICKED"));
        assert_eq!(
            EventKind::parse("add_to_cart").map(|k| k.relationship()),
            Some("ADDED_TO_CART")
        );
        assert_eq!(EventKind::parse("purchase"), None);
    }
}
