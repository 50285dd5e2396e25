mod catalog;
mod config;
mod domain;
mod error;
mod factory;
mod telemetry;
mod writer;

pub use catalog::{Artifact, Encoding, FixtureCatalog, INVALID_JSON, Rendered};
pub use config::{Config, DEFAULT_OUTPUT_DIR};
pub use domain::{
    CompanyRecord, Department, Dimensions, Location, ProductDetails, ProductRecord, ProductStub,
    UserRecord,
};
pub use error::Error;
pub use factory::{ProductRecordFactory, UserRecordFactory};
pub use telemetry::setup_logging;
pub use writer::{ArtifactSummary, FixtureWriter, Report};

/// Generates the full fixture set described by `config` and returns a summary of what was written.
///
/// This is the main entry point of the crate. It creates the output directory if needed and writes the
/// five artifacts of the [`FixtureCatalog`] into it, in catalog order, overwriting earlier runs:
///
/// - `users_array.json`: 10 users, indented
/// - `product_object.json`: a single product, indented
/// - `invalid.json`: a truncated document no JSON parser accepts
/// - `large_data.json`: 10 000 users, compact
/// - `nested_data.json`: a fixed company record, indented
///
/// # Randomness
///
/// All random fields are drawn from one random source. With `config.seed` set the output is the same
/// on every run, otherwise the source is seeded from the OS.
///
/// # Error handling
///
/// The first I/O failure aborts the run and is returned. Artifacts written before the failure are not removed.
///
/// # Example
///
/// ```no_run
/// use json_fixture_gen::{Config, generate_fixtures};
///
/// let config = Config::default().with_output_dir("testdata").with_seed(42);
/// let report = generate_fixtures(&config).unwrap();
/// for summary in report.summaries() {
///     println!("{}: {} records", summary.artifact, summary.records);
/// }
/// ```
pub fn generate_fixtures(config: &Config) -> Result<Report, Error> {
    let mut rng = config.rng()?;
    FixtureWriter::new(&config.output_dir).run(&mut rng)
}
