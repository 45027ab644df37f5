//! End-to-end demo flow over in-memory storage.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use simwork::adapters::catalog::FixtureCatalog;
use simwork::adapters::storage::InMemoryDeviceStorage;
use simwork::application::{BrowseTasksHandler, DemoSession, RunTaskHandler, SessionService};
use simwork::config::DemoConfig;
use simwork::domain::foundation::{TaskId, UserRole};
use simwork::domain::task::{TaskWizard, MAX_SCORE, MIN_SCORE};

fn session_service(storage: Arc<InMemoryDeviceStorage>) -> SessionService {
    SessionService::new(storage, "simwork-user", DemoConfig::instant())
}

#[tokio::test]
async fn developer_completes_task_1_end_to_end() {
    let storage = Arc::new(InMemoryDeviceStorage::new());
    let sessions = session_service(storage);
    let browser = BrowseTasksHandler::new(Arc::new(FixtureCatalog::new()));
    let runner = RunTaskHandler::new(DemoConfig::instant());

    // Fresh visitor: nothing stored yet.
    assert!(sessions.load().await.unwrap().is_none());

    // Start the demo as a developer and browse the role's tasks.
    sessions.start_demo(UserRole::Developer).await.unwrap();
    let mut demo = DemoSession::new();
    demo.select_role(UserRole::Developer);

    let tasks = browser.for_role(UserRole::Developer, demo.completed_tasks());
    let task = tasks
        .iter()
        .find(|t| t.id() == &TaskId::new("task-1"))
        .expect("task-1 is a developer fixture")
        .clone();

    // Work the wizard: answer, advance, submit.
    let mut wizard = TaskWizard::open(task);
    wizard.set_answer("check for a missing user first").unwrap();
    wizard.advance().unwrap();

    let mut rng = StdRng::seed_from_u64(2024);
    let completion = runner.submit(wizard, &mut rng).await.unwrap();

    let score = completion.score().value();
    assert!((MIN_SCORE..=MAX_SCORE).contains(&score));

    // The parent view records the completion once.
    demo.record(&completion);
    demo.record(&completion);
    assert_eq!(demo.completed_count(), 1);
    assert_eq!(demo.total_score(), u32::from(score));
    assert!(demo.is_completed(&TaskId::new("task-1")));

    // task-1 disappears from the browser output.
    let remaining = browser.for_role(UserRole::Developer, demo.completed_tasks());
    assert!(remaining.iter().all(|t| t.id() != &TaskId::new("task-1")));
}

#[tokio::test]
async fn cumulative_score_is_the_sum_of_recorded_scores() {
    let browser = BrowseTasksHandler::new(Arc::new(FixtureCatalog::new()));
    let runner = RunTaskHandler::new(DemoConfig::instant());
    let mut rng = StdRng::seed_from_u64(7);
    let mut demo = DemoSession::new();

    let mut expected = 0u32;
    for role in [UserRole::Developer, UserRole::Designer, UserRole::Pm] {
        let tasks = browser.for_role(role, demo.completed_tasks());
        for task in tasks {
            let mut wizard = TaskWizard::open(task);
            wizard.set_answer("an answer").unwrap();
            wizard.advance().unwrap();

            let completion = runner.submit(wizard, &mut rng).await.unwrap();
            expected += completion.score().as_u32();
            demo.record(&completion);
        }
    }

    assert_eq!(demo.completed_count(), 3);
    assert_eq!(demo.total_score(), expected);
}

#[tokio::test]
async fn logout_clears_the_profile_for_the_next_load() {
    let storage = Arc::new(InMemoryDeviceStorage::new());
    let sessions = session_service(storage);

    let profile = sessions
        .login("jordan@example.com", "any-password")
        .await
        .unwrap();
    assert_eq!(profile.name(), "jordan");
    assert!(sessions.load().await.unwrap().is_some());

    sessions.logout().await.unwrap();
    assert!(sessions.load().await.unwrap().is_none());
}

#[tokio::test]
async fn profile_survives_a_reload_between_services() {
    let storage = Arc::new(InMemoryDeviceStorage::new());

    let first = session_service(storage.clone());
    let created = first
        .register("Taylor", "taylor@example.com", "pw", UserRole::DataEntry)
        .await
        .unwrap();

    // A second service over the same storage sees the same profile,
    // the way a page reload re-reads localStorage.
    let second = session_service(storage);
    let loaded = second.load().await.unwrap().unwrap();
    assert_eq!(loaded, created);
}
