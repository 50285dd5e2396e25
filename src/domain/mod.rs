//! Module defining the records the fixtures are built from, together with the fixed value pools the factories draw from.

mod company;
mod product;
mod user;

pub use company::{CompanyRecord, Department, Location, ProductStub};
pub use product::{Dimensions, ProductDetails, ProductRecord};
pub use user::UserRecord;

pub(crate) type Price = rust_decimal::Decimal;

/// Timestamp stamped on every user record
pub const USER_CREATED_AT: &str = "2023-01-01T12:00:00Z";

/// Timestamp stamped on every product record
pub const PRODUCT_LAST_UPDATED: &str = "2023-03-15T09:30:00Z";

pub const FAMILY_NAMES: [&str; 5] = ["田中", "鈴木", "佐藤", "伊藤", "渡辺"];
pub const GIVEN_NAMES: [&str; 5] = ["太郎", "花子", "次郎", "幸子", "雄太"];
pub const TAGS: [&str; 5] = ["premium", "student", "business", "trial", "admin"];

pub const PRODUCT_ID_PREFIX: &str = "PRD-";
pub const GRADES: [&str; 3] = ["高級", "スタンダード", "エコノミー"];
pub const ITEMS: [&str; 5] = ["椅子", "テーブル", "ソファ", "ベッド", "本棚"];
pub const CATEGORIES: [&str; 5] = ["家具", "インテリア", "オフィス", "寝具", "収納"];
pub const COLORS: [&str; 5] = ["ナチュラル", "ブラウン", "ホワイト", "ブラック", "グレー"];
pub const MATERIALS: [&str; 5] = ["木材", "金属", "プラスチック", "ガラス", "布地"];
