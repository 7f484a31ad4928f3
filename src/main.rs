//! bikeshare main entrypoint.

use bikeshare::run;
use bikeshare::ui::messages;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
