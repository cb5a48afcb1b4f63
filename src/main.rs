use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod log;
mod lookup;
mod model;
mod render;
mod text;

use config::Config;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "flowtag")]
#[command(about = "Tag flow log records by destination port and protocol", long_about = None)]
struct Cli {
    /// Flow log file, one space-separated record per line.
    log: PathBuf,

    /// Lookup table CSV: header row, then dstport,protocol,tag rows.
    lookup: PathBuf,

    /// Directory the reports are written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// JSON file overriding report names, headers and the untagged tag.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let started = Instant::now();
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    let written = run(&cli.log, &cli.lookup, &cli.out_dir, &config)?;
    for path in &written {
        println!("Wrote {}", path.display());
    }

    println!("Total execution time: {}", started.elapsed().as_millis());
    println!("Finished parsing log file.");
    Ok(())
}

/// Load -> Aggregate -> Report. Each stage runs only if the previous one
/// succeeded, so a format error never leaves report files behind.
fn run(log_path: &Path, lookup_path: &Path, out_dir: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    // 1) Lookup table.
    let stage = Instant::now();
    let table = lookup::load_lookup_table(lookup_path).context("load lookup table")?;
    debug!(elapsed_ms = stage.elapsed().as_millis() as u64, "lookup stage done");

    // 2) Scan log.
    let stage = Instant::now();
    let data = model::aggregate_file(log_path, &table, config).context("parse log file")?;
    debug!(elapsed_ms = stage.elapsed().as_millis() as u64, "aggregate stage done");

    // 3) Reports.
    let mut written = Vec::new();
    for (spec, counts) in [
        (&config.tag_report, &data.tags),
        (&config.port_protocol_report, &data.port_protocols),
    ] {
        let path = out_dir.join(&spec.file_name);
        render::write_report(&path, &spec.header, counts).context("write report")?;
        written.push(path);
    }

    Ok(written)
}

fn setup_logging(level: &str) -> Result<()> {
    let filter: EnvFilter = format!("flowtag={level}")
        .parse()
        .with_context(|| format!("invalid log level {level}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use std::fs;

    const LOOKUP: &str = "dstport,protocol,tag\n49153,tcp,email\n49154,tcp,email\n";
    const LOG: &str = "\
2 1 eni-a 10.0.0.1 10.0.0.2 443 49153 tcp 25 2000 ok
2 1 eni-a 10.0.0.1 10.0.0.2 443 49154 udp 25 2000 ok
2 1 eni-a 10.0.0.1 10.0.0.2 443 49155 TCP 25 2000 ok
";

    struct Fixture {
        dir: tempfile::TempDir,
    }

    impl Fixture {
        fn new(log: &str, lookup: &str) -> Self {
            let dir = tempfile::tempdir().unwrap();
            fs::write(dir.path().join("flow.log"), log).unwrap();
            fs::write(dir.path().join("lookup.csv"), lookup).unwrap();
            Self { dir }
        }

        fn run(&self) -> Result<Vec<PathBuf>> {
            let p = self.dir.path();
            run(&p.join("flow.log"), &p.join("lookup.csv"), p, &Config::default())
        }

        fn read(&self, name: &str) -> String {
            fs::read_to_string(self.dir.path().join(name)).unwrap()
        }

        fn exists(&self, name: &str) -> bool {
            self.dir.path().join(name).exists()
        }
    }

    #[test]
    fn writes_both_reports() {
        let fx = Fixture::new(LOG, LOOKUP);
        let written = fx.run().unwrap();
        assert_eq!(written.len(), 2);

        assert_eq!(fx.read("tagCount.csv"), "Tag,Count\nemail,1\nuntagged,2\n");
        assert_eq!(
            fx.read("portProtocolCombinationCount.csv"),
            "Port,Protocol,Count\n49153,tcp,1\n49154,udp,1\n49155,tcp,1\n"
        );
    }

    #[test]
    fn rerun_is_byte_identical() {
        let fx = Fixture::new(LOG, LOOKUP);
        fx.run().unwrap();
        let tags = fx.read("tagCount.csv");
        let combos = fx.read("portProtocolCombinationCount.csv");

        fx.run().unwrap();
        assert_eq!(fx.read("tagCount.csv"), tags);
        assert_eq!(fx.read("portProtocolCombinationCount.csv"), combos);
    }

    #[test]
    fn bad_log_line_writes_nothing() {
        let fx = Fixture::new("a b c d e f 49153 tcp\na b c d e f 49153\n", LOOKUP);
        let err = fx.run().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidLogFileFormat { line: 2, .. })
        ));
        assert!(!fx.exists("tagCount.csv"));
        assert!(!fx.exists("portProtocolCombinationCount.csv"));
    }

    #[test]
    fn bad_table_row_stops_before_log() {
        // The log is malformed too; the table error must win.
        let fx = Fixture::new("short\n", "h\n49153,tcp\n");
        let err = fx.run().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidTableFormat { found: 2, .. })
        ));
        assert!(!fx.exists("tagCount.csv"));
    }

    #[test]
    fn missing_log_is_io_error() {
        let fx = Fixture::new(LOG, LOOKUP);
        fs::remove_file(fx.dir.path().join("flow.log")).unwrap();
        let err = fx.run().unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Io { .. })));
    }

    #[test]
    fn cli_requires_exactly_two_paths() {
        assert!(Cli::try_parse_from(["flowtag", "flow.log"]).is_err());
        assert!(Cli::try_parse_from(["flowtag", "a", "b", "c"]).is_err());

        let cli = Cli::try_parse_from(["flowtag", "flow.log", "lookup.csv"]).unwrap();
        assert_eq!(cli.log, PathBuf::from("flow.log"));
        assert_eq!(cli.lookup, PathBuf::from("lookup.csv"));
        assert_eq!(cli.out_dir, PathBuf::from("."));
        assert!(cli.config.is_none());
    }
}
