use icon_tool::{run, Config};

fn main() {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let result = Config::from_program_location().and_then(|config| run(&config));
    if let Err(err) = result {
        // diagnostics go to stdout
        println!("{err}");
        std::process::exit(1);
    }
}
