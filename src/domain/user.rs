use serde::Serialize;

/// A synthetic user. Field order is the key order of the emitted JSON object.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: u32,
    /// Family name and given name separated by a single space
    pub name: String,
    pub email: String,
    pub age: u8,
    pub active: bool,
    pub created_at: &'static str,
    /// 1 to 3 distinct tags, in draw order
    pub tags: Vec<&'static str>,
}

impl UserRecord {
    pub(crate) fn email_for(id: u32) -> String {
        format!("user{id}@example.com")
    }
}
