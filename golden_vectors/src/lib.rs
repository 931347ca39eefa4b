//! Reference output files for MT19937 and MT19937-64.
//!
//! Every file is one decimal value per line, in generation order, each line
//! terminated by `\n`.

use anyhow::{Context, Result};
use mersenne_twister::{Mt19937, Mt19937_64, MtError};
use std::fmt;
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const ITERATIONS: usize = 10_000;

pub const KEY_32: [u32; 4] = [0x123, 0x234, 0x345, 0x456];
pub const KEY_64: [u64; 4] = [0x12345, 0x23456, 0x34567, 0x45678];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    W32,
    W64,
}

impl Width {
    pub const ALL: [Width; 2] = [Width::W32, Width::W64];

    pub fn dir_name(self) -> &'static str {
        match self {
            Width::W32 => "mt19937",
            Width::W64 => "mt19937-64",
        }
    }

    fn engine_name(self) -> &'static str {
        match self {
            Width::W32 => "mt19937",
            Width::W64 => "mt19937_64",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// Seeded with the canonical default seed, 5489.
    Default,
    /// Seeded with the all-ones word.
    MaxSeed,
    /// Seeded from [`KEY_32`] / [`KEY_64`].
    Sequence,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Default, Scenario::MaxSeed, Scenario::Sequence];

    pub fn stem(self) -> &'static str {
        match self {
            Scenario::Default => "default",
            Scenario::MaxSeed => "max_seed",
            Scenario::Sequence => "sequence",
        }
    }

    pub fn generator_32(self) -> Result<Mt19937, MtError> {
        match self {
            Scenario::Default => Ok(Mt19937::default()),
            Scenario::MaxSeed => Ok(Mt19937::new(u32::max_value())),
            Scenario::Sequence => Mt19937::from_key(&KEY_32),
        }
    }

    pub fn generator_64(self) -> Result<Mt19937_64, MtError> {
        match self {
            Scenario::Default => Ok(Mt19937_64::default()),
            Scenario::MaxSeed => Ok(Mt19937_64::new(u64::max_value())),
            Scenario::Sequence => Mt19937_64::from_key(&KEY_64),
        }
    }
}

/// Where files land under the output root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// `<root>/mt19937/default.txt`
    Nested,
    /// `<root>/expected_mt19937_default.txt`
    Flat,
}

impl Layout {
    pub fn path(self, root: &Path, width: Width, scenario: Scenario) -> PathBuf {
        match self {
            Layout::Nested => root
                .join(width.dir_name())
                .join(format!("{}.txt", scenario.stem())),
            Layout::Flat => root.join(format!(
                "expected_{}_{}.txt",
                width.engine_name(),
                scenario.stem()
            )),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub out: PathBuf,
    pub iterations: usize,
    pub widths: Vec<Width>,
    pub scenarios: Vec<Scenario>,
    pub layout: Layout,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            out: PathBuf::from("."),
            iterations: ITERATIONS,
            widths: Width::ALL.to_vec(),
            scenarios: Scenario::ALL.to_vec(),
            layout: Layout::Nested,
        }
    }
}

impl Config {
    fn files(&self) -> Vec<(Width, Scenario, PathBuf)> {
        let mut files = Vec::new();
        for &width in &self.widths {
            for &scenario in &self.scenarios {
                files.push((width, scenario, self.layout.path(&self.out, width, scenario)));
            }
        }
        files
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub path: PathBuf,
    pub width: Width,
    pub scenario: Scenario,
    pub count: usize,
}

/// The first place a file on disk disagrees with freshly generated output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub path: PathBuf,
    /// 1-based.
    pub line: usize,
    /// `None` when that side ran out of lines first.
    pub expected: Option<String>,
    pub found: Option<String>,
}

impl Mismatch {
    fn locate(path: &Path, expected: &[u8], found: &[u8]) -> Option<Mismatch> {
        if expected == found {
            return None;
        }
        let expected: Vec<&[u8]> = expected.split(|&b| b == b'\n').collect();
        let found: Vec<&[u8]> = found.split(|&b| b == b'\n').collect();
        let lines = expected.len().max(found.len());
        (0..lines)
            .find(|&i| expected.get(i) != found.get(i))
            .map(|i| Mismatch {
                path: path.to_path_buf(),
                line: i + 1,
                expected: expected.get(i).map(|l| String::from_utf8_lossy(l).into_owned()),
                found: found.get(i).map(|l| String::from_utf8_lossy(l).into_owned()),
            })
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn show(line: &Option<String>) -> &str {
            line.as_ref().map_or("<end of file>", |l| l.as_str())
        }
        write!(
            f,
            "{}: line {}: expected {:?}, found {:?}",
            self.path.display(),
            self.line,
            show(&self.expected),
            show(&self.found)
        )
    }
}

/// Writes `count` values, one per line.
pub fn write_values<W, I>(out: &mut W, values: I, count: usize) -> io::Result<()>
where
    W: Write,
    I: Iterator,
    I::Item: Display,
{
    for value in values.take(count) {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}

pub fn write_scenario<W: Write>(
    out: &mut W,
    width: Width,
    scenario: Scenario,
    count: usize,
) -> Result<()> {
    match width {
        Width::W32 => write_values(out, scenario.generator_32()?, count)?,
        Width::W64 => write_values(out, scenario.generator_64()?, count)?,
    }
    Ok(())
}

/// Writes every configured (width, scenario) file, truncating what was there.
pub fn generate(config: &Config) -> Result<Vec<Report>> {
    let mut reports = Vec::new();
    for (width, scenario, path) in config.files() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        write_scenario(&mut out, width, scenario, config.iterations)
            .with_context(|| format!("write {}", path.display()))?;
        out.flush()
            .with_context(|| format!("write {}", path.display()))?;
        reports.push(Report {
            path,
            width,
            scenario,
            count: config.iterations,
        });
    }
    Ok(reports)
}

/// Compares every configured file byte for byte against regenerated output.
/// Files that cannot be read are errors, not mismatches.
pub fn verify(config: &Config) -> Result<Vec<Mismatch>> {
    let mut mismatches = Vec::new();
    for (width, scenario, path) in config.files() {
        let mut expected = Vec::new();
        write_scenario(&mut expected, width, scenario, config.iterations)?;
        let found = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        if let Some(mismatch) = Mismatch::locate(&path, &expected, &found) {
            mismatches.push(mismatch);
        }
    }
    Ok(mismatches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_values() {
        let mut out = Vec::new();
        write_values(&mut out, vec![1u32, 22, 333, 4444].into_iter(), 3).unwrap();
        assert_eq!(out, b"1\n22\n333\n");
    }

    #[test]
    fn test_write_scenario_no_sign_extension() {
        let mut out = Vec::new();
        write_scenario(&mut out, Width::W64, Scenario::Default, 1).unwrap();
        assert_eq!(out, b"14514284786278117030\n");

        let mut out = Vec::new();
        write_scenario(&mut out, Width::W32, Scenario::Default, 1).unwrap();
        assert_eq!(out, b"3499211612\n");
    }

    #[test]
    fn test_paths() {
        let root = Path::new("out");
        assert_eq!(
            Layout::Nested.path(root, Width::W64, Scenario::MaxSeed),
            Path::new("out/mt19937-64/max_seed.txt")
        );
        assert_eq!(
            Layout::Flat.path(root, Width::W64, Scenario::MaxSeed),
            Path::new("out/expected_mt19937_64_max_seed.txt")
        );
        assert_eq!(
            Layout::Flat.path(root, Width::W32, Scenario::Default),
            Path::new("out/expected_mt19937_default.txt")
        );
    }

    #[test]
    fn test_default_config_covers_everything() {
        assert_eq!(Config::default().files().len(), 6);
    }

    #[test]
    fn test_locate_changed_line() {
        let path = Path::new("x.txt");
        let mismatch = Mismatch::locate(path, b"1\n2\n3\n", b"1\n5\n3\n").unwrap();
        assert_eq!(mismatch.line, 2);
        assert_eq!(mismatch.expected.as_ref().map(String::as_str), Some("2"));
        assert_eq!(mismatch.found.as_ref().map(String::as_str), Some("5"));
        assert_eq!(
            mismatch.to_string(),
            "x.txt: line 2: expected \"2\", found \"5\""
        );
    }

    #[test]
    fn test_locate_short_file() {
        let path = Path::new("x.txt");
        let mismatch = Mismatch::locate(path, b"1\n2\n", b"1\n").unwrap();
        assert_eq!(mismatch.line, 2);
        assert_eq!(mismatch.expected.as_ref().map(String::as_str), Some("2"));
        assert_eq!(mismatch.found.as_ref().map(String::as_str), Some(""));

        // Missing final newline.
        let mismatch = Mismatch::locate(path, b"1\n", b"1").unwrap();
        assert_eq!(mismatch.line, 2);
        assert_eq!(mismatch.found, None);
        assert!(mismatch.to_string().ends_with("found \"<end of file>\""));
        assert!(Mismatch::locate(path, b"1\n", b"1\n").is_none());
    }
}
