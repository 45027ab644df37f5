//! Task submission: the simulated evaluation.
//!
//! Consumes a wizard that has reached the submission step, waits out the
//! configured evaluation delay, and draws the random score. The RNG is a
//! caller-supplied parameter so tests can seed it.

use rand::Rng;
use tracing::info;

use crate::config::DemoConfig;
use crate::domain::foundation::DomainError;
use crate::domain::task::{evaluate_submission, TaskCompletion, TaskWizard};

/// Handler for the wizard's terminal submit.
pub struct RunTaskHandler {
    config: DemoConfig,
}

impl RunTaskHandler {
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    /// Submits the wizard, consuming it.
    ///
    /// Fails with the wizard's own guard errors if submit is not currently
    /// allowed (wrong step, empty answer, already in flight).
    pub async fn submit<R: Rng>(
        &self,
        mut wizard: TaskWizard,
        rng: &mut R,
    ) -> Result<TaskCompletion, DomainError> {
        let answer = wizard.begin_submission()?;

        // Simulated evaluation round-trip.
        tokio::time::sleep(self.config.evaluation_delay()).await;

        let score = evaluate_submission(rng);
        let completion = TaskCompletion::new(wizard.task().id().clone(), score);
        info!(
            task = %completion.task_id(),
            score = %completion.score(),
            answer_len = answer.len(),
            "submission evaluated"
        );
        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, TaskId, UserRole};
    use crate::domain::task::{
        Difficulty, EvaluationCriteria, Metric, Task, TaskContent, MAX_SCORE, MIN_SCORE,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_task() -> Task {
        Task::new(
            TaskId::new("task-1"),
            "Debug the Authentication Flow",
            "Find the bug.",
            UserRole::Developer,
            Difficulty::Intermediate,
            150,
            Some(900),
            TaskContent::CodeChallenge {
                code_snippet: String::new(),
                expected_output: String::new(),
                hints: vec![],
            },
            EvaluationCriteria::new(vec![Metric::new("correctness", 1.0, 0.8)], 100),
        )
    }

    #[tokio::test]
    async fn submit_yields_a_score_in_range() {
        let handler = RunTaskHandler::new(crate::config::DemoConfig::instant());
        let mut wizard = TaskWizard::open(sample_task());
        wizard.set_answer("guard the missing-user case").unwrap();
        wizard.advance().unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let completion = handler.submit(wizard, &mut rng).await.unwrap();

        assert_eq!(completion.task_id(), &TaskId::new("task-1"));
        assert!((MIN_SCORE..=MAX_SCORE).contains(&completion.score().value()));
    }

    #[tokio::test]
    async fn submit_before_the_submission_step_is_rejected() {
        let handler = RunTaskHandler::new(crate::config::DemoConfig::instant());
        let mut wizard = TaskWizard::open(sample_task());
        wizard.set_answer("something").unwrap();

        let err = handler
            .submit(wizard, &mut StdRng::seed_from_u64(1))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[tokio::test]
    async fn score_is_unrelated_to_the_answer() {
        let handler = RunTaskHandler::new(crate::config::DemoConfig::instant());

        let mut short = TaskWizard::open(sample_task());
        short.set_answer("x").unwrap();
        short.advance().unwrap();

        let mut long = TaskWizard::open(sample_task());
        long.set_answer("a much longer and more thoughtful answer").unwrap();
        long.advance().unwrap();

        let a = handler
            .submit(short, &mut StdRng::seed_from_u64(9))
            .await
            .unwrap();
        let b = handler
            .submit(long, &mut StdRng::seed_from_u64(9))
            .await
            .unwrap();
        assert_eq!(a.score(), b.score());
    }
}
