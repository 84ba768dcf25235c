#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front end for the `hashkit` digest
//! workspace. The binary mirrors the `sha*sum` family of tools: FILE
//! operands (or standard input when none are given) are digested with the
//! algorithm selected by `--algorithm`, and each result is printed as
//! `HEX  NAME`. The `--text` switch digests a command-line string instead
//! and prints the bare hex value for scripting.
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function
//! accepts an iterator of arguments together with handles for standard
//! output and error, so tests can drive the full surface in process. A
//! [`clap`](https://docs.rs/clap/) command definition performs the parse,
//! while algorithm construction and digest computation are delegated to
//! [`engine::DigestAlgorithm`]. Hex rendering lives here: the engine hands
//! back raw digest bytes and the CLI decides how they are displayed.
//!
//! # Invariants
//!
//! - [`run`] never panics; failures surface as non-zero exit codes.
//! - Digest lines go to standard output and diagnostics to standard
//!   error, so output can be piped into downstream tooling unchanged.
//! - Operands are digested in command-line order, and an unreadable
//!   operand does not stop later ones from being processed.
//! - Flags that do not apply to the selected algorithm are rejected
//!   rather than silently ignored.
//!
//! # Errors
//!
//! Exit code `1` covers argument and digest-parameter errors: unknown
//! algorithm names, malformed or missing keys, and switches that do not
//! apply to the selected algorithm. Exit code `2` is returned when at
//! least one operand could not be read; the offending operands are named
//! on standard error while the remaining ones still produce digest lines.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["hashkit", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(stderr.is_empty());
//! ```
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(
//!     ["hashkit", "--text", "hello world"],
//!     &mut stdout,
//!     &mut stderr,
//! );
//!
//! assert_eq!(exit_code, 0);
//! assert_eq!(
//!     String::from_utf8(stdout).unwrap().trim_end(),
//!     "588fb7478bd6b01b",
//! );
//! ```
//!
//! # See also
//!
//! - [`engine`] for algorithm selection and the digest computation facade.
//! - `src/bin/hashkit.rs` for the binary crate that wires [`run`] into
//!   `main`.

use std::ffi::{OsStr, OsString};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, Write};

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use engine::{DigestAlgorithm, DigestError, DigestKind};

mod logs;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Exit code for argument and digest-parameter errors.
const USAGE_EXIT_CODE: i32 = 1;

/// Exit code when at least one operand could not be read.
const READ_EXIT_CODE: i32 = 2;

/// Default SHAKE output length in bytes when `--output-length` is absent.
const DEFAULT_SHAKE_OUTPUT_LEN: usize = 32;

/// Deterministic help text describing the CLI surface.
const HELP_TEXT: &str = concat!(
    "hashkit ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "\n",
    "Usage: hashkit [-a NAME] [-k HEX] [-s SEED] [-n LEN] [-t TEXT | FILE...]\n",
    "\n",
    "Computes keyed and unkeyed digests over FILE operands and prints one\n",
    "`HEX  NAME` line per operand. With no FILE, or when FILE is `-`,\n",
    "standard input is digested and named `-`.\n",
    "\n",
    "  -h, --help               Show this help message and exit.\n",
    "  -V, --version            Output version information and exit.\n",
    "  -a, --algorithm NAME     Digest algorithm (default: cityhash64).\n",
    "                           One of: siphash64, siphash128, cityhash64,\n",
    "                           shake128, shake256.\n",
    "  -k, --key HEX            128-bit SipHash key as 32 hex digits.\n",
    "                           Required by siphash64 and siphash128.\n",
    "  -s, --seed SEED          CityHash64 seed, decimal or 0x-prefixed.\n",
    "  -n, --output-length LEN  SHAKE output length in bytes (default: 32).\n",
    "  -t, --text TEXT          Digest TEXT instead of files; print bare hex.\n",
    "  -v, --verbose            Increase diagnostic verbosity (repeatable).\n",
    "\n",
    "Exit status is 0 on success, 1 for usage or digest-parameter errors,\n",
    "and 2 when at least one input could not be read.\n",
);

/// Version banner emitted by `--version`.
const VERSION_TEXT: &str = concat!("hashkit ", env!("CARGO_PKG_VERSION"), "\n");

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    verbosity: u8,
    algorithm: Option<OsString>,
    key: Option<OsString>,
    seed: Option<OsString>,
    output_length: Option<OsString>,
    text: Option<OsString>,
    operands: Vec<OsString>,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new("hashkit")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("algorithm")
                .long("algorithm")
                .short('a')
                .value_name("NAME")
                .help("Digest algorithm to apply (default: cityhash64).")
                .num_args(1)
                .action(ArgAction::Set)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("key")
                .long("key")
                .short('k')
                .value_name("HEX")
                .help("128-bit SipHash key as 32 hex digits.")
                .num_args(1)
                .action(ArgAction::Set)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('s')
                .value_name("SEED")
                .help("CityHash64 seed, decimal or 0x-prefixed hex.")
                .num_args(1)
                .action(ArgAction::Set)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("output-length")
                .long("output-length")
                .short('n')
                .value_name("LEN")
                .help("SHAKE output length in bytes (default: 32).")
                .num_args(1)
                .action(ArgAction::Set)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("text")
                .long("text")
                .short('t')
                .value_name("TEXT")
                .help("Digest TEXT instead of files and print bare hex.")
                .num_args(1)
                .action(ArgAction::Set)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic verbosity (repeatable).")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("args")
                .action(ArgAction::Append)
                .num_args(0..)
                .value_parser(OsStringValueParser::new()),
        )
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from("hashkit"));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let show_help = matches.get_flag("help");
    let show_version = matches.get_flag("version");
    let verbosity = matches.get_count("verbose");
    let algorithm = matches.remove_one::<OsString>("algorithm");
    let key = matches.remove_one::<OsString>("key");
    let seed = matches.remove_one::<OsString>("seed");
    let output_length = matches.remove_one::<OsString>("output-length");
    let text = matches.remove_one::<OsString>("text");
    let operands = matches
        .remove_many::<OsString>("args")
        .map(|values| values.collect())
        .unwrap_or_default();

    Ok(ParsedArgs {
        show_help,
        show_version,
        verbosity,
        algorithm,
        key,
        seed,
        output_length,
        text,
        operands,
    })
}

/// Comma-separated canonical algorithm names for diagnostics.
fn known_names() -> String {
    let mut rendered = String::new();
    for (index, kind) in DigestKind::all().into_iter().enumerate() {
        if index > 0 {
            rendered.push_str(", ");
        }
        rendered.push_str(kind.name());
    }
    rendered
}

/// Resolves the digest selection flags into a concrete [`DigestAlgorithm`].
///
/// Flags that do not apply to the selected algorithm are rejected rather
/// than ignored, so a stray `--seed` next to a SHAKE selection surfaces
/// immediately instead of silently changing nothing.
fn build_algorithm(
    algorithm: Option<&OsStr>,
    key: Option<&OsStr>,
    seed: Option<&OsStr>,
    output_length: Option<&OsStr>,
) -> Result<DigestAlgorithm, String> {
    let kind = match algorithm {
        Some(name) => {
            let name = name
                .to_str()
                .ok_or_else(|| String::from("--algorithm expects a UTF-8 name"))?;
            DigestKind::from_name(name).ok_or_else(|| {
                format!("unknown algorithm '{name}'; supported: {}", known_names())
            })?
        }
        None => DigestKind::CityHash64,
    };

    match kind {
        DigestKind::SipHash64 | DigestKind::SipHash128 => {
            if seed.is_some() {
                return Err(format!("--seed does not apply to {kind}"));
            }
            if output_length.is_some() {
                return Err(format!("--output-length does not apply to {kind}"));
            }
            let key = key.ok_or_else(|| format!("{kind} requires --key"))?;
            let key = parse_hex_key(key)?;
            let algorithm = if kind == DigestKind::SipHash64 {
                DigestAlgorithm::siphash64(&key)
            } else {
                DigestAlgorithm::siphash128(&key)
            };
            algorithm.map_err(|error| error.to_string())
        }
        DigestKind::CityHash64 => {
            if key.is_some() {
                return Err(String::from("--key does not apply to cityhash64"));
            }
            if output_length.is_some() {
                return Err(String::from(
                    "--output-length does not apply to cityhash64",
                ));
            }
            let seed = match seed {
                Some(value) => parse_seed(value)?,
                None => 0,
            };
            Ok(DigestAlgorithm::CityHash64 { seed })
        }
        DigestKind::Shake128 | DigestKind::Shake256 => {
            if key.is_some() {
                return Err(format!("--key does not apply to {kind}"));
            }
            if seed.is_some() {
                return Err(format!("--seed does not apply to {kind}"));
            }
            let output_len = match output_length {
                Some(value) => parse_output_length(value)?,
                None => DEFAULT_SHAKE_OUTPUT_LEN,
            };
            if kind == DigestKind::Shake128 {
                Ok(DigestAlgorithm::Shake128 { output_len })
            } else {
                Ok(DigestAlgorithm::Shake256 { output_len })
            }
        }
    }
}

/// Decodes `--key` into the 16 SipHash key bytes.
fn parse_hex_key(value: &OsStr) -> Result<[u8; 16], String> {
    let text = value
        .to_str()
        .ok_or_else(|| String::from("--key expects a UTF-8 hex string"))?;
    let count = text.chars().count();
    if count != 32 {
        return Err(format!(
            "--key expects exactly 32 hex digits, received {count}"
        ));
    }

    let digits = text.as_bytes();
    let mut key = [0u8; 16];
    for (index, byte) in key.iter_mut().enumerate() {
        match (hex_value(digits[2 * index]), hex_value(digits[2 * index + 1])) {
            (Some(high), Some(low)) => *byte = (high << 4) | low,
            _ => return Err(format!("--key contains a non-hex digit in '{text}'")),
        }
    }
    Ok(key)
}

/// Maps one ASCII hex digit to its value.
const fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Parses `--seed` as decimal or `0x`-prefixed hexadecimal.
fn parse_seed(value: &OsStr) -> Result<u64, String> {
    let text = value
        .to_str()
        .ok_or_else(|| String::from("--seed expects a UTF-8 number"))?;
    let parsed = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else {
        text.parse::<u64>()
    };
    parsed.map_err(|_| format!("--seed expects a 64-bit unsigned integer, received '{text}'"))
}

/// Parses `--output-length` as a byte count.
fn parse_output_length(value: &OsStr) -> Result<usize, String> {
    let text = value
        .to_str()
        .ok_or_else(|| String::from("--output-length expects a UTF-8 number"))?;
    text.parse::<usize>()
        .map_err(|_| format!("--output-length expects a byte count, received '{text}'"))
}

/// Renders digest bytes as lowercase hex.
fn to_hex(bytes: &[u8]) -> String {
    let mut rendered = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(rendered, "{byte:02x}");
    }
    rendered
}

/// Digests each operand in order, printing `HEX  NAME` lines.
///
/// A `-` operand names standard input. Unreadable operands are reported
/// and skipped so one bad path does not mask results for the rest,
/// matching the coreutils checksum tools.
fn digest_operands<Out, Err>(
    algorithm: DigestAlgorithm,
    operands: &[OsString],
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    Out: Write,
    Err: Write,
{
    let stdin_only = [OsString::from("-")];
    let operands = if operands.is_empty() {
        &stdin_only[..]
    } else {
        operands
    };

    let mut failed = false;
    for operand in operands {
        let result = if operand.as_os_str() == OsStr::new("-") {
            algorithm.digest_reader(io::stdin().lock())
        } else {
            File::open(operand)
                .map_err(DigestError::from)
                .and_then(|file| algorithm.digest_reader(file))
        };

        let name = operand.to_string_lossy();
        match result {
            Ok(digest) => {
                tracing::debug!(name = %name, bytes = digest.len(), "operand digested");
                if writeln!(stdout, "{}  {}", to_hex(digest.as_bytes()), name).is_err() {
                    return USAGE_EXIT_CODE;
                }
            }
            Err(error) => {
                failed = true;
                let _ = writeln!(stderr, "hashkit: {name}: {error}");
            }
        }
    }

    if failed { READ_EXIT_CODE } else { 0 }
}

/// Executes a parsed invocation against the digest engine.
fn execute<Out, Err>(parsed: ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    let ParsedArgs {
        show_help,
        show_version,
        verbosity,
        algorithm: algorithm_name,
        key,
        seed,
        output_length,
        text,
        operands,
    } = parsed;

    if show_help {
        if stdout.write_all(HELP_TEXT.as_bytes()).is_err() {
            return USAGE_EXIT_CODE;
        }
        return 0;
    }

    if show_version {
        if stdout.write_all(VERSION_TEXT.as_bytes()).is_err() {
            return USAGE_EXIT_CODE;
        }
        return 0;
    }

    logs::init(verbosity);

    let algorithm = match build_algorithm(
        algorithm_name.as_deref(),
        key.as_deref(),
        seed.as_deref(),
        output_length.as_deref(),
    ) {
        Ok(algorithm) => algorithm,
        Err(message) => {
            let _ = writeln!(stderr, "hashkit: {message}");
            return USAGE_EXIT_CODE;
        }
    };
    tracing::debug!(algorithm = %algorithm.kind(), "algorithm selected");

    if let Some(text) = text {
        if !operands.is_empty() {
            let _ = writeln!(
                stderr,
                "hashkit: --text cannot be combined with FILE operands"
            );
            return USAGE_EXIT_CODE;
        }
        let Some(text) = text.to_str() else {
            let _ = writeln!(stderr, "hashkit: --text expects UTF-8 input");
            return USAGE_EXIT_CODE;
        };
        let digest = algorithm.compute_str(text);
        if writeln!(stdout, "{}", to_hex(digest.as_bytes())).is_err() {
            return USAGE_EXIT_CODE;
        }
        return 0;
    }

    digest_operands(algorithm, &operands, stdout, stderr)
}

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller: `0` on success, `1` for usage and digest-parameter errors, and
/// `2` when at least one operand could not be read.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdout, stderr),
        Err(error) => {
            let _ = write!(stderr, "{error}");
            USAGE_EXIT_CODE
        }
    }
}

/// Clamps an exit status into the range a process exit code can carry.
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE_KEY: &str = "000102030405060708090a0b0c0d0e0f";

    fn run_with_args<I, S>(args: I) -> (i32, Vec<u8>, Vec<u8>)
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let code = run(args, &mut stdout, &mut stderr);
        (code, stdout, stderr)
    }

    fn text_of(bytes: &[u8]) -> String {
        String::from_utf8(bytes.to_vec()).expect("output is valid UTF-8")
    }

    #[test]
    fn help_flag_renders_static_help() {
        let (code, stdout, stderr) = run_with_args(["hashkit", "--help"]);

        assert_eq!(code, 0);
        assert!(stderr.is_empty());
        assert_eq!(stdout, HELP_TEXT.as_bytes());
    }

    #[test]
    fn short_help_flag_renders_static_help() {
        let (code, stdout, stderr) = run_with_args(["hashkit", "-h"]);

        assert_eq!(code, 0);
        assert!(stderr.is_empty());
        assert_eq!(stdout, HELP_TEXT.as_bytes());
    }

    #[test]
    fn version_flag_renders_banner() {
        let (code, stdout, stderr) = run_with_args(["hashkit", "--version"]);

        assert_eq!(code, 0);
        assert!(stderr.is_empty());
        assert_eq!(stdout, VERSION_TEXT.as_bytes());
    }

    #[test]
    fn short_version_flag_renders_banner() {
        let (code, stdout, stderr) = run_with_args(["hashkit", "-V"]);

        assert_eq!(code, 0);
        assert!(stderr.is_empty());
        assert_eq!(stdout, VERSION_TEXT.as_bytes());
    }

    #[test]
    fn text_digest_defaults_to_cityhash64() {
        let (code, stdout, stderr) = run_with_args(["hashkit", "--text", "hello world"]);

        assert_eq!(code, 0);
        assert!(stderr.is_empty());
        assert_eq!(text_of(&stdout).trim_end(), "588fb7478bd6b01b");
    }

    #[test]
    fn text_digest_with_siphash_key_matches_reference_vector() {
        let (code, stdout, stderr) = run_with_args([
            "hashkit",
            "-a",
            "siphash64",
            "-k",
            REFERENCE_KEY,
            "-t",
            "",
        ]);

        assert_eq!(code, 0);
        assert!(stderr.is_empty());
        assert_eq!(text_of(&stdout).trim_end(), "726fdb47dd0e0e31");
    }

    #[test]
    fn text_digest_with_siphash128_matches_reference_vector() {
        let (code, stdout, _) = run_with_args([
            "hashkit",
            "-a",
            "siphash128",
            "-k",
            REFERENCE_KEY,
            "-t",
            "",
        ]);

        assert_eq!(code, 0);
        assert_eq!(
            text_of(&stdout).trim_end(),
            "e6a825ba047f81a3930255c71472f66d"
        );
    }

    #[test]
    fn shake_output_length_controls_hex_width() {
        let (code, stdout, _) =
            run_with_args(["hashkit", "-a", "shake128", "-n", "1", "-t", "hello world"]);
        assert_eq!(code, 0);
        assert_eq!(text_of(&stdout).trim_end(), "3a");

        let (code, stdout, _) =
            run_with_args(["hashkit", "-a", "shake256", "-n", "1", "-t", "hello world"]);
        assert_eq!(code, 0);
        assert_eq!(text_of(&stdout).trim_end(), "36");
    }

    #[test]
    fn shake_defaults_to_thirty_two_bytes() {
        let (code, stdout, _) = run_with_args(["hashkit", "-a", "shake256", "-t", "abc"]);

        assert_eq!(code, 0);
        assert_eq!(text_of(&stdout).trim_end().len(), 64);
    }

    #[test]
    fn zero_output_length_prints_an_empty_digest() {
        let (code, stdout, stderr) =
            run_with_args(["hashkit", "-a", "shake256", "-n", "0", "-t", "abc"]);

        assert_eq!(code, 0);
        assert!(stderr.is_empty());
        assert_eq!(stdout, b"\n");
    }

    #[test]
    fn file_operand_renders_hex_and_name() {
        use tempfile::tempdir;

        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join("message.txt");
        std::fs::write(&path, b"hello world").expect("write fixture");

        let (code, stdout, stderr) =
            run_with_args([OsString::from("hashkit"), path.clone().into_os_string()]);

        assert_eq!(code, 0);
        assert!(stderr.is_empty());
        assert_eq!(
            text_of(&stdout),
            format!("588fb7478bd6b01b  {}\n", path.display())
        );
    }

    #[test]
    fn multiple_operands_digest_in_order() {
        use tempfile::tempdir;

        let tmp = tempdir().expect("tempdir");
        let first = tmp.path().join("first.txt");
        let second = tmp.path().join("second.txt");
        std::fs::write(&first, b"hello world").expect("write first");
        std::fs::write(&second, b"abc").expect("write second");

        let (code, stdout, stderr) = run_with_args([
            OsString::from("hashkit"),
            first.clone().into_os_string(),
            second.clone().into_os_string(),
        ]);

        assert_eq!(code, 0);
        assert!(stderr.is_empty());
        assert_eq!(
            text_of(&stdout),
            format!(
                "588fb7478bd6b01b  {}\n24a5b3a074e7f369  {}\n",
                first.display(),
                second.display()
            )
        );
    }

    #[test]
    fn missing_file_reports_and_continues() {
        use tempfile::tempdir;

        let tmp = tempdir().expect("tempdir");
        let missing = tmp.path().join("missing.txt");
        let present = tmp.path().join("present.txt");
        std::fs::write(&present, b"hello world").expect("write fixture");

        let (code, stdout, stderr) = run_with_args([
            OsString::from("hashkit"),
            missing.clone().into_os_string(),
            present.clone().into_os_string(),
        ]);

        assert_eq!(code, READ_EXIT_CODE);

        let diagnostics = text_of(&stderr);
        assert!(diagnostics.contains("missing.txt"));
        assert!(diagnostics.contains("failed to read digest input"));

        let rendered = text_of(&stdout);
        assert!(rendered.contains("588fb7478bd6b01b"));
        assert!(rendered.contains("present.txt"));
        assert!(!rendered.contains("missing.txt"));
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let (code, stdout, stderr) = run_with_args(["hashkit", "-a", "md5", "-t", "x"]);

        assert_eq!(code, USAGE_EXIT_CODE);
        assert!(stdout.is_empty());

        let diagnostics = text_of(&stderr);
        assert!(diagnostics.contains("unknown algorithm 'md5'"));
        assert!(diagnostics.contains("cityhash64"));
        assert!(diagnostics.contains("shake256"));
    }

    #[test]
    fn siphash_requires_a_key() {
        let (code, stdout, stderr) = run_with_args(["hashkit", "-a", "siphash64", "-t", "x"]);

        assert_eq!(code, USAGE_EXIT_CODE);
        assert!(stdout.is_empty());
        assert!(text_of(&stderr).contains("siphash64 requires --key"));
    }

    #[test]
    fn key_length_is_validated() {
        let (code, _, stderr) =
            run_with_args(["hashkit", "-a", "siphash64", "-k", "00ff", "-t", "x"]);

        assert_eq!(code, USAGE_EXIT_CODE);

        let diagnostics = text_of(&stderr);
        assert!(diagnostics.contains("exactly 32 hex digits"));
        assert!(diagnostics.contains("received 4"));
    }

    #[test]
    fn key_digits_are_validated() {
        let (code, _, stderr) = run_with_args([
            "hashkit",
            "-a",
            "siphash128",
            "-k",
            "0g0102030405060708090a0b0c0d0e0f",
            "-t",
            "x",
        ]);

        assert_eq!(code, USAGE_EXIT_CODE);
        assert!(text_of(&stderr).contains("non-hex digit"));
    }

    #[test]
    fn key_is_rejected_for_keyless_algorithms() {
        let (code, _, stderr) = run_with_args(["hashkit", "-k", REFERENCE_KEY, "-t", "x"]);
        assert_eq!(code, USAGE_EXIT_CODE);
        assert!(text_of(&stderr).contains("--key does not apply to cityhash64"));

        let (code, _, stderr) = run_with_args([
            "hashkit",
            "-a",
            "shake256",
            "-k",
            REFERENCE_KEY,
            "-t",
            "x",
        ]);
        assert_eq!(code, USAGE_EXIT_CODE);
        assert!(text_of(&stderr).contains("--key does not apply to shake256"));
    }

    #[test]
    fn seed_applies_only_to_cityhash() {
        let (code, _, stderr) =
            run_with_args(["hashkit", "-a", "shake128", "-s", "1", "-t", "x"]);
        assert_eq!(code, USAGE_EXIT_CODE);
        assert!(text_of(&stderr).contains("--seed does not apply to shake128"));

        let (code, _, stderr) = run_with_args([
            "hashkit",
            "-a",
            "siphash64",
            "-k",
            REFERENCE_KEY,
            "-s",
            "1",
            "-t",
            "x",
        ]);
        assert_eq!(code, USAGE_EXIT_CODE);
        assert!(text_of(&stderr).contains("--seed does not apply to siphash64"));
    }

    #[test]
    fn output_length_applies_only_to_shake() {
        let (code, _, stderr) = run_with_args(["hashkit", "-n", "8", "-t", "x"]);
        assert_eq!(code, USAGE_EXIT_CODE);
        assert!(text_of(&stderr).contains("--output-length does not apply to cityhash64"));

        let (code, _, stderr) = run_with_args([
            "hashkit",
            "-a",
            "siphash64",
            "-k",
            REFERENCE_KEY,
            "-n",
            "8",
            "-t",
            "x",
        ]);
        assert_eq!(code, USAGE_EXIT_CODE);
        assert!(text_of(&stderr).contains("--output-length does not apply to siphash64"));
    }

    #[test]
    fn seed_accepts_decimal_and_hex() {
        let (code, decimal, _) = run_with_args(["hashkit", "-s", "3735928559", "-t", "abc"]);
        assert_eq!(code, 0);

        let (code, hex, _) = run_with_args(["hashkit", "-s", "0xdeadbeef", "-t", "abc"]);
        assert_eq!(code, 0);

        let (code, upper, _) = run_with_args(["hashkit", "-s", "0XDEADBEEF", "-t", "abc"]);
        assert_eq!(code, 0);

        assert_eq!(decimal, hex);
        assert_eq!(decimal, upper);
        assert_eq!(text_of(&decimal).trim_end(), "eb20ef5d0d542448");
    }

    #[test]
    fn malformed_seed_is_rejected() {
        let (code, _, stderr) = run_with_args(["hashkit", "-s", "12abc", "-t", "x"]);
        assert_eq!(code, USAGE_EXIT_CODE);
        assert!(text_of(&stderr).contains("--seed expects"));

        let (code, _, stderr) = run_with_args(["hashkit", "-s", "0x", "-t", "x"]);
        assert_eq!(code, USAGE_EXIT_CODE);
        assert!(text_of(&stderr).contains("--seed expects"));
    }

    #[test]
    fn malformed_output_length_is_rejected() {
        let (code, _, stderr) =
            run_with_args(["hashkit", "-a", "shake128", "-n", "many", "-t", "x"]);

        assert_eq!(code, USAGE_EXIT_CODE);
        assert!(text_of(&stderr).contains("--output-length expects"));
    }

    #[test]
    fn text_conflicts_with_file_operands() {
        let (code, stdout, stderr) = run_with_args(["hashkit", "-t", "x", "some-file"]);

        assert_eq!(code, USAGE_EXIT_CODE);
        assert!(stdout.is_empty());
        assert!(text_of(&stderr).contains("--text cannot be combined"));
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        let (code, stdout, stderr) = run_with_args(["hashkit", "--frobnicate"]);

        assert_eq!(code, USAGE_EXIT_CODE);
        assert!(stdout.is_empty());
        assert!(!stderr.is_empty());
    }

    #[test]
    fn verbose_flag_is_tolerated() {
        let (code, stdout, _) = run_with_args(["hashkit", "-vv", "-t", "abc"]);

        assert_eq!(code, 0);
        assert_eq!(text_of(&stdout).trim_end(), "24a5b3a074e7f369");
    }

    #[test]
    fn parse_args_collects_digest_flags() {
        let parsed = parse_args([
            "hashkit", "-a", "shake256", "-n", "16", "-vv", "first", "second",
        ])
        .expect("arguments parse");

        assert!(!parsed.show_help);
        assert!(!parsed.show_version);
        assert_eq!(parsed.verbosity, 2);
        assert_eq!(parsed.algorithm.as_deref(), Some(OsStr::new("shake256")));
        assert_eq!(parsed.output_length.as_deref(), Some(OsStr::new("16")));
        assert!(parsed.key.is_none());
        assert!(parsed.seed.is_none());
        assert!(parsed.text.is_none());
        assert_eq!(
            parsed.operands,
            [OsString::from("first"), OsString::from("second")]
        );
    }

    #[test]
    fn parse_args_accepts_an_empty_argument_list() {
        let parsed = parse_args(Vec::<OsString>::new()).expect("arguments parse");

        assert!(!parsed.show_help);
        assert!(!parsed.show_version);
        assert_eq!(parsed.verbosity, 0);
        assert!(parsed.operands.is_empty());
    }

    #[test]
    fn hex_key_decodes_reference_bytes() {
        let key = parse_hex_key(OsStr::new(REFERENCE_KEY)).expect("key parses");
        let expected: Vec<u8> = (0u8..16).collect();
        assert_eq!(key.to_vec(), expected);

        let upper = parse_hex_key(OsStr::new("FFEEDDCCBBAA99887766554433221100"))
            .expect("uppercase key parses");
        assert_eq!(upper[0], 0xff);
        assert_eq!(upper[15], 0x00);
    }

    #[test]
    fn to_hex_renders_lowercase_pairs() {
        assert_eq!(to_hex(&[]), "");
        assert_eq!(to_hex(&[0x00, 0xff, 0x0a]), "00ff0a");
    }

    #[test]
    fn exit_code_clamps_out_of_range_statuses() {
        assert_eq!(
            format!("{:?}", exit_code_from(0)),
            format!("{:?}", std::process::ExitCode::from(0))
        );
        assert_eq!(
            format!("{:?}", exit_code_from(2)),
            format!("{:?}", std::process::ExitCode::from(2))
        );
        assert_eq!(
            format!("{:?}", exit_code_from(-7)),
            format!("{:?}", std::process::ExitCode::from(0))
        );
        assert_eq!(
            format!("{:?}", exit_code_from(512)),
            format!("{:?}", std::process::ExitCode::from(255))
        );
    }
}
