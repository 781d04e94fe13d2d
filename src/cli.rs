use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use thiserror::Error;

const AFTER_HELP: &str = "Keys:
  Esc  quit
  any  quit (with -Q)

Supported formats: jpg, jpeg, png, gif, webp;
other files are decoded by content sniffing.";

/// Raw command line surface.
#[derive(Parser, Debug)]
#[command(name = "imgpreview", version, about = "Minimal single-image viewer")]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    /// Keep the window on top (best effort) and quit on any key press
    #[arg(short = 'Q')]
    pub quit_mode: bool,

    /// Print diagnostics while running
    #[arg(long)]
    pub verbose: bool,

    /// Path to the image file (the last one given wins)
    #[arg(value_name = "IMAGE")]
    pub image: Vec<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("no image file given")]
    MissingImagePath,
    #[error("image file not found: {0}")]
    FileNotFound(PathBuf),
}

/// Resolved, validated flags; constructed once at startup and immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct RuntimeFlags {
    pub always_on_top: bool,
    pub quit_on_any_key: bool,
    pub verbose: bool,
    pub image_path: PathBuf,
}

impl RuntimeFlags {
    pub fn from_args(args: Args) -> Result<Self, ArgsError> {
        let image_path = args.image.into_iter().last().ok_or(ArgsError::MissingImagePath)?;
        if !image_path.is_file() {
            return Err(ArgsError::FileNotFound(image_path));
        }
        Ok(Self {
            always_on_top: args.quit_mode,
            quit_on_any_key: args.quit_mode,
            verbose: args.verbose,
            image_path,
        })
    }
}

/// Prints the usage text to stdout.
pub fn print_usage() {
    // print_help only fails when stdout is gone, nothing useful to do then
    let _ = Args::command().print_help();
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn existing_file(dir: &tempfile::TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, b"x").unwrap();
        path
    }

    #[test]
    fn quit_mode_sets_both_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = existing_file(&dir, "a.png");

        let args = Args::parse_from(["imgpreview", "-Q", path.to_str().unwrap()]);
        let flags = RuntimeFlags::from_args(args).unwrap();
        assert!(flags.always_on_top);
        assert!(flags.quit_on_any_key);
        assert!(!flags.verbose);
    }

    #[test]
    fn verbose_flag_is_independent() {
        let dir = tempfile::tempdir().unwrap();
        let path = existing_file(&dir, "a.png");

        let args = Args::parse_from(["imgpreview", "--verbose", path.to_str().unwrap()]);
        let flags = RuntimeFlags::from_args(args).unwrap();
        assert!(flags.verbose);
        assert!(!flags.always_on_top);
        assert!(!flags.quit_on_any_key);
    }

    #[test]
    fn last_image_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let first = existing_file(&dir, "first.png");
        let second = existing_file(&dir, "second.png");

        let args = Args::parse_from([
            "imgpreview",
            first.to_str().unwrap(),
            second.to_str().unwrap(),
        ]);
        let flags = RuntimeFlags::from_args(args).unwrap();
        assert_eq!(flags.image_path, second);
    }

    #[test]
    fn flags_without_a_path_error() {
        let args = Args::parse_from(["imgpreview", "-Q"]);
        match RuntimeFlags::from_args(args) {
            Err(ArgsError::MissingImagePath) => {}
            other => panic!("expected missing-path error, got {other:?}"),
        }
    }

    #[test]
    fn nonexistent_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ghost.png");

        let args = Args::parse_from(["imgpreview", path.to_str().unwrap()]);
        match RuntimeFlags::from_args(args) {
            Err(ArgsError::FileNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected file-not-found error, got {other:?}"),
        }
    }
}
