use iced_qr::app::{self, paths, Flags};

const HELP: &str = "\
iced_qr - URL to QR code generator

USAGE:
  iced_qr [OPTIONS] [URL]

OPTIONS:
  --lang <LOCALE>       Locale override in BCP-47 form (e.g. de, en-US)
  --config-dir <DIR>    Directory holding settings.toml
  --i18n-dir <DIR>      Directory with Fluent .ftl files overriding the
                        embedded translations
  -h, --help            Print this help and exit
  -V, --version         Print the version and exit

ARGS:
  [URL]                 URL to pre-fill the input field with
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    if args.contains(["-V", "--version"]) {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap(),
        url: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    // Directory overrides must be in place before config and i18n loading.
    paths::init_cli_overrides(flags.config_dir.clone(), flags.i18n_dir.clone());

    app::run(flags)
}
