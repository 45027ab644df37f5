//! Application layer: the demo's use cases wired over the ports.

mod browse_tasks;
mod demo_session;
mod run_task;
mod session;
mod signup;

pub use browse_tasks::BrowseTasksHandler;
pub use demo_session::DemoSession;
pub use run_task::RunTaskHandler;
pub use session::SessionService;
pub use signup::SignupHandler;
