// SPDX-License-Identifier: MPL-2.0
use iced_login::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Preview a themeable sign-in form

USAGE:
  iced_login [OPTIONS]

OPTIONS:
  -h, --help            Print this help
  --config-dir DIR      Read settings.toml from DIR
  --font KEY            overpass | inter | playfair | default
  --accent KEY          blue | purple | orange | green | yellow
  --radius KEY          none | small | medium | large | full
  --light | --dark      Initial mode

ENVIRONMENT:
  ICED_LOGIN_CONFIG_DIR Config directory when --config-dir is absent
  RUST_LOG              Log filter (default: info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let (flags, rejected) = Flags::from_args(args);
    for err in rejected {
        tracing::warn!(error = %err, "ignoring command-line argument");
    }

    app::run(flags)
}
