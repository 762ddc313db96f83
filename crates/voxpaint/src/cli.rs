//! Command-line options for the `voxpaint` binary.

use std::path::PathBuf;

use crate::error::{AppError, AppResult};
use crate::input::HeldKeys;

/// Usage text.
pub const USAGE: &str = "voxpaint [config.toml] [--frames N] [--keys w,a,s,d,space,lshift] [--ppm out.ppm]";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Config file; built-in defaults when absent.
    pub config: Option<PathBuf>,
    /// Frames to render.
    pub frames: u64,
    /// Keys held for every frame.
    pub keys: HeldKeys,
    /// Where to write the last frame.
    pub ppm: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config: None,
            frames: 1,
            keys: HeldKeys::NONE,
            ppm: None,
        }
    }
}

impl RunOptions {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Usage`] for a malformed command line and
    /// [`AppError::UnknownKey`] for a bad `--keys` entry.
    pub fn parse<I>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--frames" => {
                    let value = value_of(&mut args, "--frames")?;
                    options.frames = value
                        .parse()
                        .map_err(|_| AppError::Usage(format!("--frames expects a count, got '{value}'")))?;
                }
                "--keys" => options.keys = HeldKeys::parse(&value_of(&mut args, "--keys")?)?,
                "--ppm" => options.ppm = Some(PathBuf::from(value_of(&mut args, "--ppm")?)),
                flag if flag.starts_with("--") => {
                    return Err(AppError::Usage(format!("unknown option '{flag}'")));
                }
                path => {
                    if options.config.is_some() {
                        return Err(AppError::Usage(format!("unexpected argument '{path}'")));
                    }
                    options.config = Some(PathBuf::from(path));
                }
            }
        }

        Ok(options)
    }
}

fn value_of(args: &mut impl Iterator<Item = String>, flag: &str) -> AppResult<String> {
    args.next()
        .ok_or_else(|| AppError::Usage(format!("{flag} needs a value")))
}
