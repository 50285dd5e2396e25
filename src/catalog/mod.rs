//! Module defining the fixed catalog of artifacts: what each one contains and how it is encoded.

use rand::Rng;
use serde::Serialize;

use crate::domain::{CompanyRecord, ProductRecord, UserRecord};
use crate::error::Error;
use crate::factory::{ProductRecordFactory, UserRecordFactory};


/// Deliberately truncated document: the `description` string and the enclosing object are never closed.
pub const INVALID_JSON: &[u8] = "{\"name\": \"不正なJSON\", \"description\": \"閉じ括弧がない".as_bytes();

pub const SMALL_USER_BATCH: u32 = 10;
pub const LARGE_USER_BATCH: u32 = 10_000;

/// How the content of an artifact is turned into bytes. Non-ASCII text is always written literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Pretty-printed with a 2-space indent
    Indented,
    /// No whitespace between tokens
    Compact,
    /// Written verbatim, never serialized
    Raw,
}

impl Encoding {
    fn serialize<T: Serialize + ?Sized>(self, value: &T) -> Result<Vec<u8>, Error> {
        let bytes = match self {
            Encoding::Indented => serde_json::to_vec_pretty(value)?,
            Encoding::Compact | Encoding::Raw => serde_json::to_vec(value)?,
        };
        Ok(bytes)
    }
}

/// One named output file of the fixture set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    UsersArray,
    ProductObject,
    Invalid,
    LargeData,
    NestedData,
}

/// The artifacts in the order they are written.
pub struct FixtureCatalog;

impl FixtureCatalog {
    pub const ENTRIES: [Artifact; 5] = [
        Artifact::UsersArray,
        Artifact::ProductObject,
        Artifact::Invalid,
        Artifact::LargeData,
        Artifact::NestedData,
    ];

    pub fn iter() -> impl Iterator<Item = Artifact> {
        Self::ENTRIES.into_iter()
    }

    /// Looks an artifact up by its name (without the `.json` extension).
    pub fn find(name: &str) -> Option<Artifact> {
        Self::iter().find(|artifact| artifact.name() == name)
    }
}

impl Artifact {
    pub fn name(self) -> &'static str {
        match self {
            Artifact::UsersArray => "users_array",
            Artifact::ProductObject => "product_object",
            Artifact::Invalid => "invalid",
            Artifact::LargeData => "large_data",
            Artifact::NestedData => "nested_data",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }

    pub fn encoding(self) -> Encoding {
        match self {
            Artifact::UsersArray | Artifact::ProductObject | Artifact::NestedData => {
                Encoding::Indented
            }
            Artifact::LargeData => Encoding::Compact,
            Artifact::Invalid => Encoding::Raw,
        }
    }

    /// Number of records the artifact holds. The invalid artifact holds none.
    pub fn record_count(self) -> usize {
        match self {
            Artifact::UsersArray => SMALL_USER_BATCH as usize,
            Artifact::LargeData => LARGE_USER_BATCH as usize,
            Artifact::ProductObject | Artifact::NestedData => 1,
            Artifact::Invalid => 0,
        }
    }

    /// Runs the generation rule of the artifact and encodes the result.
    pub fn render<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Rendered, Error> {
        let content = match self {
            Artifact::UsersArray => Content::Users(users(rng, SMALL_USER_BATCH)),
            Artifact::ProductObject => {
                Content::Product(ProductRecordFactory::new(rng).generate())
            }
            Artifact::Invalid => Content::Literal(INVALID_JSON),
            Artifact::LargeData => Content::Users(users(rng, LARGE_USER_BATCH)),
            Artifact::NestedData => Content::Company(CompanyRecord::sample()),
        };

        Ok(Rendered {
            records: content.record_count(),
            bytes: content.encode(self.encoding())?,
        })
    }
}

/// The bytes of an artifact ready to be written, plus how many records they hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub bytes: Vec<u8>,
    pub records: usize,
}

// In-memory content of an artifact before encoding
enum Content {
    Users(Vec<UserRecord>),
    Product(ProductRecord),
    Company(CompanyRecord),
    Literal(&'static [u8]),
}

impl Content {
    fn record_count(&self) -> usize {
        match self {
            Content::Users(users) => users.len(),
            Content::Product(_) | Content::Company(_) => 1,
            Content::Literal(_) => 0,
        }
    }

    fn encode(&self, encoding: Encoding) -> Result<Vec<u8>, Error> {
        match self {
            Content::Users(users) => encoding.serialize(users),
            Content::Product(product) => encoding.serialize(product),
            Content::Company(company) => encoding.serialize(company),
            Content::Literal(bytes) => Ok(bytes.to_vec()),
        }
    }
}

/// Users with the ids `1..=count`, in id order.
fn users<R: Rng + ?Sized>(rng: &mut R, count: u32) -> Vec<UserRecord> {
    let mut factory = UserRecordFactory::new(rng);
    (1..=count).map(|id| factory.generate(id)).collect()
}
