//! Subcommand execution against a sanitizer.

use std::io::{Read, Write};

use tracing::warn;
use witai_common::WitaiError;
use witai_platform::KeyValueStore;
use witai_style::{StyleSanitizer, PRESET_NAMES};

use crate::cli::{Command, RenderFormat};

/// Run `command`. `input` is read only when `apply` has no file argument.
pub fn run<S, R, W>(
    command: &Command,
    sanitizer: &mut StyleSanitizer<S>,
    mut input: R,
    out: &mut W,
) -> Result<(), WitaiError>
where
    S: KeyValueStore,
    R: Read,
    W: Write,
{
    match command {
        Command::Apply { file } => {
            let code = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut code = String::new();
                    input.read_to_string(&mut code)?;
                    code
                }
            };
            sanitizer.validate_and_apply(&code)?;
        }

        Command::Preset { name, apply } => {
            let css = sanitizer.load_preset(name);
            if css.is_empty() {
                warn!(name = %name, available = ?PRESET_NAMES, "Unknown preset");
            }
            if *apply {
                sanitizer.validate_and_apply(css)?;
            } else {
                writeln!(out, "{css}")?;
            }
        }

        Command::Reset => sanitizer.reset()?,

        Command::Show => {
            if let Some(css) = sanitizer.persisted()? {
                writeln!(out, "{css}")?;
            }
        }

        Command::Render { format } => match format {
            RenderFormat::Html => write!(out, "{}", sanitizer.document().render_head_html())?,
            RenderFormat::Js => writeln!(out, "{}", sanitizer.injection_script())?,
        },

        Command::Config => {
            return Err(WitaiError::Other(
                "config is handled before the store is opened".into(),
            ))
        }
    }
    Ok(())
}
