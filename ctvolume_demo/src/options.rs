/// Command-line options for the viewer.
///
/// Parsed by hand from the argument iterator; the only positional
/// argument is the slice directory.

use std::path::PathBuf;

use ct_volume_engine::ctvolume::log::LogSeverity;

/// Usage text printed for --help and argument errors
pub const USAGE: &str = "\
Usage: ctvolume_demo <slice_dir> [options]

Arguments:
  <slice_dir>            Directory holding the slice images, ingested in
                         lexical file-name order

Options:
  --export <path>        Write the ingested point cloud as CSV (x,y,z)
  --strict-decode        Abort on the first undecodable slice instead of
                         skipping it
  --log-level <level>    trace | debug | info | warn | error (default: info)
  -h, --help             Show this help";

/// Parsed viewer options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerOptions {
    /// Directory holding the slice images
    pub slice_dir: PathBuf,
    /// CSV debug export target, if requested
    pub export_path: Option<PathBuf>,
    /// Abort ingestion on the first decode failure
    pub strict_decode: bool,
    /// Minimum log severity
    pub log_level: LogSeverity,
}

impl ViewerOptions {
    /// Parse options from the argument list (without the program name).
    ///
    /// Returns `Ok(None)` when help was requested.
    ///
    /// # Errors
    ///
    /// A human-readable message for unknown flags, missing flag values,
    /// or a missing slice directory.
    pub fn parse<I>(args: I) -> Result<Option<Self>, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut slice_dir: Option<PathBuf> = None;
        let mut export_path = None;
        let mut strict_decode = false;
        let mut log_level = LogSeverity::Info;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(None),
                "--export" => {
                    let value = args.next().ok_or("--export requires a path")?;
                    export_path = Some(PathBuf::from(value));
                }
                "--strict-decode" => strict_decode = true,
                "--log-level" => {
                    let value = args.next().ok_or("--log-level requires a level")?;
                    log_level = parse_severity(&value)?;
                }
                other if other.starts_with('-') => {
                    return Err(format!("unrecognized option '{other}'"));
                }
                other => {
                    if slice_dir.is_some() {
                        return Err(format!("unexpected extra argument '{other}'"));
                    }
                    slice_dir = Some(PathBuf::from(other));
                }
            }
        }

        let slice_dir = slice_dir.ok_or("missing <slice_dir> argument")?;
        Ok(Some(Self {
            slice_dir,
            export_path,
            strict_decode,
            log_level,
        }))
    }
}

fn parse_severity(raw: &str) -> Result<LogSeverity, String> {
    match raw {
        "trace" => Ok(LogSeverity::Trace),
        "debug" => Ok(LogSeverity::Debug),
        "info" => Ok(LogSeverity::Info),
        "warn" => Ok(LogSeverity::Warn),
        "error" => Ok(LogSeverity::Error),
        other => Err(format!("unknown log level '{other}'")),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
