/*
 * Spiral Galaxy Visualization
 *
 * Animates a procedurally generated spiral galaxy: three rotating arms of
 * jittered particles around a dense central bulge. The animation runs for a
 * fixed number of frames; closing the window ends the program.
 *
 * Set RUST_LOG (e.g. RUST_LOG=galaxy=debug) for diagnostic output.
 */

use galaxy::STARTUP_MESSAGES;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    for message in STARTUP_MESSAGES {
        println!("{}", message);
    }

    galaxy::app::run();
}
