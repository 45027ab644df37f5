//! SimWork demo walkthrough.
//!
//! Runs the whole demo flow once on the command line: start a demo session
//! for the developer role, browse the role's tasks, work the first one
//! through the wizard, submit it, and log out.

use std::error::Error;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use simwork::adapters::catalog::FixtureCatalog;
use simwork::adapters::storage::{FileDeviceStorage, InMemoryDeviceStorage};
use simwork::application::{
    BrowseTasksHandler, DemoSession, RunTaskHandler, SessionService, SignupHandler,
};
use simwork::config::{AppConfig, StorageBackend};
use simwork::domain::foundation::UserRole;
use simwork::domain::signup::SignupForm;
use simwork::domain::task::TaskWizard;
use simwork::ports::DeviceStorage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.demo.log_filter)),
        )
        .init();

    let storage: Arc<dyn DeviceStorage> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryDeviceStorage::new()),
        StorageBackend::File => Arc::new(FileDeviceStorage::new(&config.storage.base_dir)),
    };

    let sessions = SessionService::new(
        storage.clone(),
        config.storage.profile_key.clone(),
        config.demo.clone(),
    );
    let browser = BrowseTasksHandler::new(Arc::new(FixtureCatalog::new()));
    let runner = RunTaskHandler::new(config.demo.clone());
    let mut rng = StdRng::from_entropy();

    // Returning visitor?
    match sessions.load().await? {
        Some(profile) => info!(user = %profile.id(), "found stored profile"),
        None => info!("no stored profile, starting fresh"),
    }

    let role = UserRole::Developer;
    let profile = sessions.start_demo(role).await?;
    info!(user = %profile.id(), role = %role, "demo profile ready");

    let mut demo = DemoSession::new();
    demo.select_role(role);

    let available = browser.for_role(role, demo.completed_tasks());
    for task in &available {
        info!(
            task = %task.id(),
            title = task.title(),
            difficulty = %task.difficulty(),
            xp = task.xp_reward(),
            "available task"
        );
    }

    if let Some(task) = available.into_iter().next() {
        let mut wizard = TaskWizard::open(task);
        wizard.set_answer("Guard the missing-user case before reading fields.")?;
        wizard.advance()?;

        let completion = runner.submit(wizard, &mut rng).await?;
        demo.record(&completion);
        info!(
            score = %completion.score(),
            total = demo.total_score(),
            completed = demo.completed_count(),
            "task completed"
        );
    }

    // Capture a marketing sign-up the way the landing page does.
    let signups = SignupHandler::new(
        storage.clone(),
        config.storage.signup_key.clone(),
        config.demo.clone(),
    );
    let mut form = SignupForm::new();
    form.set_name("Demo Visitor");
    form.set_email("visitor@example.com");
    form.set_password("password");
    form.advance()?;
    form.set_role(role);
    form.advance()?;
    form.toggle_interest("training");
    signups.submit(&form).await?;

    sessions.logout().await?;
    info!("walkthrough finished");
    Ok(())
}
