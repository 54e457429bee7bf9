use averagecolor::{estimate_with_status, Decoration, ImageSource, Outcome};

fn main() {
    let panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        panic_hook(panic_info);
        std::process::exit(1);
    }));

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let paths = std::env::args().skip(1).collect::<Vec<_>>();
    if paths.iter().any(|p| p == "--version") {
        println!("averagecolor {}", env!("AVERAGECOLOR_VERSION"));
        return;
    }
    if paths.is_empty() {
        eprintln!("Usage: averagecolor [--version] <image>...");
        std::process::exit(2);
    }

    let config = match averagecolor::config::load() {
        Ok(config) => config,
        Err(err) => panic!("Unable to load config: {:#}", err),
    };

    log::debug!("Using {:#?}", config);

    for path in paths {
        let outcome = estimate_with_status(&ImageSource::open(&path), &config);
        let color = outcome.color();

        match &outcome {
            Outcome::Sampled(_) => println!(
                "{}: {} rgb({}, {}, {}) brightness={}",
                path,
                color.hex(),
                color.r(),
                color.g(),
                color.b(),
                color.brightness()
            ),
            Outcome::Fallback { reason, .. } => {
                log::warn!("Unable to sample '{}': {}", path, reason);
                println!(
                    "{}: {} rgb({}, {}, {}) brightness={} (default, {})",
                    path,
                    color.hex(),
                    color.r(),
                    color.g(),
                    color.b(),
                    color.brightness(),
                    reason
                );
            }
        }

        if let Some(decoration) = &config.decoration {
            let decoration = Decoration::plan(color, decoration);
            if let Some(background) = decoration.background.as_deref() {
                println!("  background-color: {}", background);
            }
            if let Some(shadow) = decoration.box_shadow() {
                println!("  box-shadow: {}", shadow);
            }
        }
    }
}
