// SPDX-License-Identifier: MPL-2.0
use dp_framer::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: dp_framer [OPTIONS] [IMAGE]

Options:
  --config-dir DIR    Read settings.toml from DIR
  --frame PATH        Frame overlay (PNG, JPEG or SVG) replacing the configured one
  --face-model PATH   UltraFace ONNX model used to auto-center faces
  -h, --help          Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dp_framer=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let config_dir = args.opt_value_from_os_str("--config-dir", os_to_path)?;
    let frame = args.opt_value_from_os_str("--frame", os_to_path)?;
    let face_model = args.opt_value_from_os_str("--face-model", os_to_path)?;
    let file_path = args.opt_free_from_os_str(os_to_path)?;

    let rest = args.clone().finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring extra arguments");
    }

    Ok(Flags {
        config_dir,
        frame,
        face_model,
        file_path,
    })
}

fn os_to_path(value: &std::ffi::OsStr) -> Result<PathBuf, &'static str> {
    Ok(PathBuf::from(value))
}
