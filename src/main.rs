/*
 * Paper Turtle Simulation
 *
 * A point-mass robot driven with the arrow keys. Up and Down change its
 * speed, Left and Right turn it, and every tick it leaves a point of trail
 * behind. The "Limpa td" button clears the trail; F1 shows telemetry.
 */

use paper_turtle::app;

fn main() {
    env_logger::init();
    log::info!("Paper Turtle Simulation starting...");

    nannou::app(app::model)
        .update(app::update)
        .exit(app::exit)
        .run();
}
