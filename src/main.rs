use anyhow::Result;
use json_fixture_gen::{Config, generate_fixtures, setup_logging};

fn main() -> Result<()> {
    setup_logging()?;

    let config = Config::from_env()?;
    let report = generate_fixtures(&config)?;

    let mut wtr = csv::Writer::from_writer(get_writer());
    for summary in report {
        wtr.serialize(&summary)?;
    }
    wtr.flush()?;

    Ok(())
}

fn get_writer() -> impl std::io::Write {
    std::io::stdout()
}
