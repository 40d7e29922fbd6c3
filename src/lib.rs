/*
 * Paper Turtle Simulation - Module Definitions
 *
 * This file defines the module structure for the paper turtle simulation.
 * The simulation core (robot, trail, button, physics) is independent of the
 * window; app, input, renderer and ui wire it into nannou.
 */

// Re-export key components for easier access
pub use app::Model;
pub use button::Button;
pub use debug::DebugInfo;
pub use input::{PendingInput, TickInput};
pub use params::SimulationParams;
pub use physics::{FixedTimestep, RunState, Simulation};
pub use robot::RobotState;
pub use trail::Trail;
pub use viewport::Viewport;

// Define modules
pub mod app;
pub mod button;
pub mod debug;
pub mod input;
pub mod params;
pub mod physics;
pub mod renderer;
pub mod robot;
pub mod trail;
pub mod ui;
pub mod viewport;

// Constants
pub const WINDOW_TITLE: &str = "Paper Turtle Simulation";
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const ROBOT_RADIUS: f32 = 15.0;
