//! Password output to terminal or file, plus the entropy summary box.

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use rand::Rng;

use super::{GenerationRequest, charset, write_batch};
use crate::terminal::{box_bottom, box_line, box_top, calculate_entropy, entropy_strength};

/// Default file name when `-o` is given without a name or with a directory.
pub const DEFAULT_FILE_NAME: &str = "passwords.txt";

/// Resolve an `-o` argument into a file path.
pub fn resolve_path(arg: &str) -> String {
    if arg == "." {
        DEFAULT_FILE_NAME.to_string()
    } else if arg.ends_with('/') {
        format!("{arg}{DEFAULT_FILE_NAME}")
    } else if Path::new(arg).extension().is_none() {
        format!("{arg}.txt")
    } else {
        arg.to_string()
    }
}

/// Write passwords to stdout.
pub fn to_terminal<R: Rng + ?Sized>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_batch(request, count, rng, &mut out)
}

/// Append passwords to a file, creating parent directories as needed.
/// Returns the canonical path written to.
pub fn to_file<R: Rng + ?Sized>(
    path: &str,
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
) -> io::Result<PathBuf> {
    let path = Path::new(path);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = BufWriter::new(file);
    write_batch(request, count, rng, &mut out)?;

    fs::canonicalize(path).or_else(|_| Ok(path.to_path_buf()))
}

/// Entropy bits for a request.
pub fn entropy_bits(request: &GenerationRequest) -> f64 {
    calculate_entropy(request.length, charset::size(request.classes))
}

/// Print the entropy summary box.
pub fn print_entropy(request: &GenerationRequest, source: &str) {
    let chars = charset::build(request.classes).len();
    let bits = entropy_bits(request);
    box_top("Entropy");
    box_line(&format!("{:.1} bits ({})", bits, entropy_strength(bits)));
    box_line(&format!("Source: {} • Charset: {} chars", source, chars));
    box_bottom();
}
