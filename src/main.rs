use anyhow::Result;
use arc_timer::app::{App, LaunchOptions};
use arc_timer::config::Config;
use arc_timer::ui::Theme;
use arc_timer::utils::time_format::parse_duration;
use clap::{App as ClapApp, Arg, ArgMatches};

fn main() {
    let matches = cli().get_matches();
    if let Err(e) = run(&matches) {
        eprintln!("{}: {:#}", env!("CARGO_PKG_NAME"), e);
        std::process::exit(1);
    }
}

fn cli() -> ClapApp<'static, 'static> {
    ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .help("Overrides the configured theme")
                .takes_value(true)
                .validator(|name| match Theme::by_name(&name) {
                    Some(_) => Ok(()),
                    None => Err(format!(
                        "unknown theme '{}', expected one of: {}",
                        name,
                        Theme::names().join(", ")
                    )),
                }),
        )
        .arg(
            Arg::with_name("time")
                .long("time")
                .value_name("DURATION")
                .help("Puts time on the clock at launch, e.g. 90, 10m or 1h30m")
                .takes_value(true)
                .validator(|value| match parse_duration(&value) {
                    Some(_) => Ok(()),
                    None => Err(format!("invalid duration '{}'", value)),
                }),
        )
        .arg(
            Arg::with_name("no-alert")
                .long("no-alert")
                .help("Completes silently without the repeating alert"),
        )
}

fn run(matches: &ArgMatches) -> Result<()> {
    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(theme) = matches.value_of("theme") {
        config.theme_name = theme.to_string();
    }
    let options = LaunchOptions {
        initial_seconds: matches.value_of("time").and_then(parse_duration),
        alert_enabled: !matches.is_present("no-alert"),
    };
    App::start(config, options)
}
