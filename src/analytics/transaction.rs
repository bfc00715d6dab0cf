use serde::Deserialize;

/// A single money transfer between two clients, as one entry of the input
/// JSON array. Wire field names are camelCase.
///
/// `issue_id`, `issue_solved` and `issue_message` carry an optional
/// compliance review item; `issue_id` being `None` means no issue was raised
/// for this transfer.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub mtn: u64,
    pub amount: f64,
    pub sender_full_name: String,
    pub sender_age: u8,
    pub beneficiary_full_name: String,
    pub beneficiary_age: u8,
    #[serde(default)]
    pub issue_id: Option<String>,
    pub issue_solved: bool,
    #[serde(default)]
    pub issue_message: Option<String>,
}

impl Transaction {
    /// True when the client appears as sender or beneficiary (exact,
    /// case-sensitive name match).
    pub fn involves(&self, client_full_name: &str) -> bool {
        self.sender_full_name == client_full_name
            || self.beneficiary_full_name == client_full_name
    }

    /// True when a compliance issue was raised and is still unsolved.
    pub fn has_open_issue(&self) -> bool {
        self.issue_id.is_some() && !self.issue_solved
    }
}
