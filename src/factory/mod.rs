//! Module defining the record factories. Every random field is drawn from the random source the factory is
//! constructed with, so a seeded source yields the same records on every run.

use rand::Rng;
use rand::seq::index;
use rust_decimal::Decimal;

use crate::domain::{
    CATEGORIES, COLORS, Dimensions, FAMILY_NAMES, GIVEN_NAMES, GRADES, ITEMS, MATERIALS,
    PRODUCT_ID_PREFIX, PRODUCT_LAST_UPDATED, ProductDetails, ProductRecord, TAGS, USER_CREATED_AT,
    UserRecord,
};


pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 80;
pub const MAX_IN_STOCK: u8 = 100;
pub const MIN_DIMENSION: u8 = 30;
pub const MAX_DIMENSION: u8 = 200;
/// Upper bound on the number of tags/categories drawn for one record
pub const MAX_SAMPLED: usize = 3;

const PRODUCT_ID_LEN: usize = 6;
const PRODUCT_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

// prices are drawn in whole tens, i.e. [1000, 50000) in steps of 10
const PRICE_TENS: std::ops::Range<i64> = 100..5000;
// ratings are drawn in whole tenths, i.e. [1.0, 5.0]
const RATING_TENTHS: std::ops::RangeInclusive<i64> = 10..=50;

/// Produces one synthetic user per call.
pub struct UserRecordFactory<'r, R: Rng + ?Sized> {
    rng: &'r mut R,
}

impl<'r, R: Rng + ?Sized> UserRecordFactory<'r, R> {
    pub fn new(rng: &'r mut R) -> Self {
        Self { rng }
    }

    /// Builds the user with the given id. Only `name`, `age`, `active` and `tags` are random.
    pub fn generate(&mut self, id: u32) -> UserRecord {
        let family = pick(self.rng, &FAMILY_NAMES);
        let given = pick(self.rng, &GIVEN_NAMES);

        UserRecord {
            id,
            name: format!("{family} {given}"),
            email: UserRecord::email_for(id),
            age: self.rng.random_range(MIN_AGE..=MAX_AGE),
            active: self.rng.random(),
            created_at: USER_CREATED_AT,
            tags: sample_distinct(self.rng, &TAGS),
        }
    }
}

/// Produces one synthetic product per call. Calls are independent of each other.
pub struct ProductRecordFactory<'r, R: Rng + ?Sized> {
    rng: &'r mut R,
}

impl<'r, R: Rng + ?Sized> ProductRecordFactory<'r, R> {
    pub fn new(rng: &'r mut R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self) -> ProductRecord {
        let product_id = self.product_id();
        let name = format!(
            "{} {}",
            pick(self.rng, &GRADES),
            pick(self.rng, &ITEMS)
        );
        let price = Decimal::new(self.rng.random_range(PRICE_TENS) * 10, 0);
        let in_stock = self.rng.random_range(0..=MAX_IN_STOCK);
        let categories = sample_distinct(self.rng, &CATEGORIES);
        let details = self.details();
        let rating = Decimal::new(self.rng.random_range(RATING_TENTHS), 1);

        ProductRecord {
            product_id,
            name,
            price,
            in_stock,
            categories,
            details,
            rating,
            last_updated: PRODUCT_LAST_UPDATED,
        }
    }

    fn product_id(&mut self) -> String {
        let suffix: String = (0..PRODUCT_ID_LEN)
            .map(|_| {
                let idx = self.rng.random_range(0..PRODUCT_ID_CHARSET.len());
                PRODUCT_ID_CHARSET[idx] as char
            })
            .collect();
        format!("{PRODUCT_ID_PREFIX}{suffix}")
    }

    fn details(&mut self) -> ProductDetails {
        ProductDetails {
            color: pick(self.rng, &COLORS),
            material: pick(self.rng, &MATERIALS),
            dimensions: Dimensions {
                width: self.dimension(),
                height: self.dimension(),
                depth: self.dimension(),
            },
        }
    }

    fn dimension(&mut self) -> u8 {
        self.rng.random_range(MIN_DIMENSION..=MAX_DIMENSION)
    }
}

/// Picks one entry of a non-empty pool uniformly.
fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool[rng.random_range(0..pool.len())]
}

/// Draws between 1 and [`MAX_SAMPLED`] distinct entries of a non-empty pool, in draw order.
pub(crate) fn sample_distinct<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[&'static str],
) -> Vec<&'static str> {
    let amount = rng.random_range(1..=MAX_SAMPLED.min(pool.len()));
    index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i])
        .collect()
}
