//! Consumer-side narrowing of free-form session metadata.
//!
//! Resolution forwards `metadata` untouched; a renderer that wants to wire
//! up interactive actions narrows each action's `type` string here, at the
//! point of consumption.

#[derive(Clone, Debug, PartialEq, Eq)]
/// Interactive action kind attached to a session.
pub enum ActionKind {
    /// Opens a checkout flow for the campaign product.
    Purchase,
    /// Opens the platform share sheet.
    Share,
    /// Claims a coupon or reward tied to the session.
    Claim,
    /// Shows an informational panel.
    Info,
    /// Any action type this client does not understand.
    Unknown,
}

impl ActionKind {
    /// Narrow a wire action-type string to a kind.
    ///
    /// Total: the four accepted literals map to their variants, everything
    /// else maps to [`ActionKind::Unknown`].
    pub fn from_wire(kind: &str) -> Self {
        match kind {
            "purchase" => Self::Purchase,
            "share" => Self::Share,
            "claim" => Self::Claim,
            "info" => Self::Info,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// One metadata action, narrowed for a renderer.
pub struct MetaAction {
    /// Narrowed action kind.
    pub kind: ActionKind,
    /// The original action record, untouched (label, payload, etc.).
    pub raw: serde_json::Value,
}

/// Collect the narrowed actions from a session's metadata.
///
/// Reads `metadata.actions` non-destructively; a missing or non-array
/// `actions` field yields an empty list. Entries without a string `type`
/// field narrow to [`ActionKind::Unknown`].
pub fn collect_actions(metadata: &serde_json::Value) -> Vec<MetaAction> {
    let Some(actions) = metadata.get("actions").and_then(|v| v.as_array()) else {
        return Vec::new();
    };

    actions
        .iter()
        .map(|action| {
            let kind = action
                .get("type")
                .and_then(|v| v.as_str())
                .map_or(ActionKind::Unknown, ActionKind::from_wire);
            MetaAction {
                kind,
                raw: action.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/session/meta.rs"]
mod tests;
