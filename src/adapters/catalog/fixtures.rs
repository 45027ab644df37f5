//! The fixture data: tasks, workstations, and sample users.
//!
//! Immutable demo content, held in statics for the lifetime of the process.
//! Some workstations list task ids with no fixture behind them; the catalog
//! skips those when materializing tasks.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::{Score, TaskId, Timestamp, UserId, UserRole, WorkstationId};
use crate::domain::office::{Vec3, Workstation};
use crate::domain::task::{
    CustomerForm, Difficulty, Dimensions, EvaluationCriteria, Metric, Task, TaskContent,
};
use crate::domain::user::{Progress, UserProfile};

static TASKS: Lazy<Vec<Task>> = Lazy::new(|| {
    vec![
        Task::new(
            TaskId::new("task-1"),
            "Debug the Authentication Flow",
            "Identify and fix the bugs in the user authentication process. \
             The login form submits but users are not being authenticated properly.",
            UserRole::Developer,
            Difficulty::Intermediate,
            150,
            Some(900),
            TaskContent::CodeChallenge {
                code_snippet: r#"function authenticateUser(email, password) {
  // Check if user exists
  const user = users.find(u => u.email === email);

  // Bug: Not checking if user exists before accessing properties
  if (user.password === hashPassword(password)) {
    return generateToken(user);
  }

  return null;
}"#
                .to_string(),
                expected_output: "Successfully authenticated user".to_string(),
                hints: vec![
                    "Check what happens when a user is not found".to_string(),
                    "Make sure to validate all inputs".to_string(),
                    "Consider adding proper error handling".to_string(),
                ],
            },
            EvaluationCriteria::new(
                vec![
                    Metric::new("correctness", 0.5, 0.8),
                    Metric::new("efficiency", 0.3, 0.7),
                    Metric::new("code-quality", 0.2, 0.6),
                ],
                100,
            ),
        ),
        Task::new(
            TaskId::new("task-2"),
            "Create a Futuristic Button Component",
            "Design a button component that feels futuristic and interactive. \
             The button should have hover, active, and disabled states.",
            UserRole::Designer,
            Difficulty::Beginner,
            100,
            None,
            TaskContent::DesignBrief {
                requirements: vec![
                    "Create a primary button with text \"Submit\"".to_string(),
                    "Design hover, active, and disabled states".to_string(),
                    "Use a futuristic color scheme".to_string(),
                    "Include subtle animations or effects".to_string(),
                    "Ensure the design is accessible (sufficient contrast)".to_string(),
                ],
                dimensions: Dimensions {
                    width: 200,
                    height: 60,
                },
                format: "PNG or SVG".to_string(),
            },
            EvaluationCriteria::new(
                vec![
                    Metric::new("creativity", 0.4, 0.7),
                    Metric::new("usability", 0.3, 0.8),
                    Metric::new("technical-execution", 0.3, 0.6),
                ],
                100,
            ),
        ),
        Task::new(
            TaskId::new("task-6"),
            "Resolve Resource Allocation Conflict",
            "Your team has conflicting resource needs. Two critical projects need \
             the same senior developer at the same time. Make a decision on how to \
             resolve this conflict.",
            UserRole::Pm,
            Difficulty::Advanced,
            200,
            None,
            TaskContent::DecisionMaking {
                scenario: "Project A is a high-visibility client project that is already \
                           behind schedule. Project B is an internal infrastructure project \
                           with long-term benefits but no immediate client visibility. Both \
                           project leads are requesting Senior Developer Dana for the next \
                           two weeks."
                    .to_string(),
                options: vec![
                    "Assign Dana to Project A full-time and find an alternative solution for Project B"
                        .to_string(),
                    "Assign Dana to Project B full-time and explain the delay to the client"
                        .to_string(),
                    "Split Dana's time 50/50 between both projects".to_string(),
                    "Bring in an external contractor to help with one of the projects".to_string(),
                    "Propose your own solution".to_string(),
                ],
                constraints: vec![
                    "Budget for external contractors is limited".to_string(),
                    "The client for Project A is already frustrated with delays".to_string(),
                    "Project B affects the efficiency of all future projects".to_string(),
                ],
            },
            EvaluationCriteria::new(
                vec![
                    Metric::new("stakeholder-impact", 0.4, 0.7),
                    Metric::new("resource-efficiency", 0.3, 0.6),
                    Metric::new("risk-management", 0.3, 0.7),
                ],
                100,
            ),
        ),
        Task::new(
            TaskId::new("task-10"),
            "Process Customer Information Forms",
            "Enter customer information from forms into the database system \
             accurately and efficiently.",
            UserRole::DataEntry,
            Difficulty::Beginner,
            80,
            Some(600),
            TaskContent::DataEntry {
                forms: vec![CustomerForm {
                    id: "form-1".to_string(),
                    name: "John Smith".to_string(),
                    email: "john.smith@example.com".to_string(),
                    phone: "555-123-4567".to_string(),
                    address: "123 Main St, Anytown, CA 90210".to_string(),
                    subscription: "Premium".to_string(),
                    start_date: "2023-05-15".to_string(),
                }],
                fields: vec![
                    "name".to_string(),
                    "email".to_string(),
                    "phone".to_string(),
                    "address".to_string(),
                    "subscription".to_string(),
                    "startDate".to_string(),
                ],
                special_instructions: "Format phone numbers as XXX-XXX-XXXX. All dates \
                                       should be in YYYY-MM-DD format."
                    .to_string(),
            },
            EvaluationCriteria::new(
                vec![
                    Metric::new("accuracy", 0.6, 0.9),
                    Metric::new("speed", 0.4, 0.7),
                ],
                100,
            ),
        ),
        Task::new(
            TaskId::new("task-12"),
            "Optimize Prompt for Customer Service AI",
            "Create an effective prompt for an AI assistant that will handle \
             customer service inquiries for an e-commerce website.",
            UserRole::AiEngineer,
            Difficulty::Intermediate,
            150,
            None,
            TaskContent::PromptEngineering {
                context: "The AI assistant will be the first point of contact for customers \
                          with questions about orders, returns, and product information. It \
                          should be helpful, friendly, and able to escalate to a human when \
                          necessary."
                    .to_string(),
                requirements: vec![
                    "Include clear instructions on tone and personality".to_string(),
                    "Define the scope of questions the AI should answer".to_string(),
                    "Include criteria for when to escalate to a human".to_string(),
                    "Provide examples of good responses to common questions".to_string(),
                    "Include constraints to prevent harmful outputs".to_string(),
                ],
                example_queries: vec![
                    "Where is my order?".to_string(),
                    "How do I return this product?".to_string(),
                    "Is this item in stock?".to_string(),
                    "I want to speak to a manager!".to_string(),
                ],
            },
            EvaluationCriteria::new(
                vec![
                    Metric::new("clarity", 0.3, 0.8),
                    Metric::new("effectiveness", 0.4, 0.7),
                    Metric::new("safety", 0.3, 0.9),
                ],
                100,
            ),
        ),
    ]
});

static WORKSTATIONS: Lazy<Vec<Workstation>> = Lazy::new(|| {
    vec![
        Workstation::new(
            WorkstationId::new("dev-bay"),
            "Developer Bay",
            UserRole::Developer,
            Vec3::new(-8.0, 0.0, -5.0),
            vec![TaskId::new("task-1"), TaskId::new("task-3"), TaskId::new("task-5")],
        ),
        Workstation::new(
            WorkstationId::new("design-lab"),
            "Design Lab",
            UserRole::Designer,
            Vec3::new(8.0, 0.0, -5.0),
            vec![TaskId::new("task-2"), TaskId::new("task-4"), TaskId::new("task-7")],
        ),
        Workstation::new(
            WorkstationId::new("pm-hub"),
            "Project Management Hub",
            UserRole::Pm,
            Vec3::new(0.0, 0.0, -10.0),
            vec![TaskId::new("task-6"), TaskId::new("task-8"), TaskId::new("task-9")],
        ),
        Workstation::new(
            WorkstationId::new("data-station"),
            "Data Entry Station",
            UserRole::DataEntry,
            Vec3::new(-8.0, 0.0, 5.0),
            vec![TaskId::new("task-10"), TaskId::new("task-11")],
        ),
        Workstation::new(
            WorkstationId::new("ai-zone"),
            "AI Engineering Zone",
            UserRole::AiEngineer,
            Vec3::new(8.0, 0.0, 5.0),
            vec![
                TaskId::new("task-12"),
                TaskId::new("task-13"),
                TaskId::new("task-14"),
                TaskId::new("task-15"),
            ],
        ),
    ]
});

static SAMPLE_USERS: Lazy<Vec<UserProfile>> = Lazy::new(|| {
    fn user(
        id: &str,
        name: &str,
        email: &str,
        role: UserRole,
        avatar: &str,
        level: u32,
        xp: u32,
        completed: &[&str],
        skills: &[(&str, u8)],
    ) -> UserProfile {
        let completed = completed.iter().map(|id| TaskId::new(*id)).collect();
        let skills: HashMap<String, Score> = skills
            .iter()
            .map(|(name, value)| (name.to_string(), Score::new(*value)))
            .collect();
        UserProfile::reconstitute(
            UserId::new(id),
            name,
            email,
            role,
            avatar,
            Progress::from_parts(level, xp, completed, skills),
            Timestamp::now(),
        )
    }

    vec![
        user(
            "user-1",
            "Alex Johnson",
            "alex@example.com",
            UserRole::Developer,
            "/images/avatars/avatar-1.png",
            3,
            1250,
            &["task-1", "task-3", "task-5"],
            &[
                ("javascript", 75),
                ("react", 60),
                ("node", 45),
                ("problem-solving", 70),
            ],
        ),
        user(
            "user-2",
            "Sam Rivera",
            "sam@example.com",
            UserRole::Designer,
            "/images/avatars/avatar-2.png",
            4,
            1800,
            &["task-2", "task-4", "task-7"],
            &[
                ("ui-design", 80),
                ("typography", 65),
                ("color-theory", 70),
                ("figma", 85),
            ],
        ),
        user(
            "user-3",
            "Jordan Lee",
            "jordan@example.com",
            UserRole::Pm,
            "/images/avatars/avatar-3.png",
            5,
            2200,
            &["task-6", "task-8", "task-9"],
            &[
                ("project-planning", 85),
                ("risk-management", 75),
                ("team-leadership", 80),
                ("stakeholder-communication", 70),
            ],
        ),
        user(
            "user-4",
            "Taylor Kim",
            "taylor@example.com",
            UserRole::DataEntry,
            "/images/avatars/avatar-4.png",
            2,
            850,
            &["task-10", "task-11"],
            &[
                ("typing-speed", 90),
                ("data-accuracy", 85),
                ("attention-to-detail", 80),
                ("spreadsheet-management", 65),
            ],
        ),
        user(
            "user-5",
            "Morgan Chen",
            "morgan@example.com",
            UserRole::AiEngineer,
            "/images/avatars/avatar-5.png",
            6,
            3100,
            &["task-12", "task-13", "task-14", "task-15"],
            &[
                ("prompt-engineering", 90),
                ("model-evaluation", 75),
                ("data-preprocessing", 80),
                ("fine-tuning", 70),
            ],
        ),
    ]
});

/// All fixture tasks.
pub fn tasks() -> &'static [Task] {
    &TASKS
}

/// All fixture workstations.
pub fn workstations() -> &'static [Workstation] {
    &WORKSTATIONS
}

/// Sample users shown in marketing material.
pub fn sample_users() -> &'static [UserProfile] {
    &SAMPLE_USERS
}
