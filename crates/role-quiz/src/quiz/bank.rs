//! The shipped question bank: static configuration, not logic.
//!
//! Scoring conventions: single-select strong options award 2 to the favored
//! role(s); multi-select options award 1 per selection. Identifiers below 100
//! are core questions, 101 onward are bonus questions; the combined set must
//! stay globally unique because responses are keyed by identifier only.

use super::domain::{Question, QuestionKind, QuestionOption, RoleScores};

fn option(text: &str, scores: RoleScores, tags: &[&str], evidence: &str) -> QuestionOption {
    QuestionOption {
        text: text.to_string(),
        scores,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        evidence: evidence.to_string(),
    }
}

fn forced(id: u32, prompt: &str, options: Vec<QuestionOption>) -> Question {
    Question {
        id,
        kind: QuestionKind::ForcedChoice,
        prompt: prompt.to_string(),
        options,
    }
}

fn scale(id: u32, prompt: &str, options: Vec<QuestionOption>) -> Question {
    Question {
        id,
        kind: QuestionKind::Scale,
        prompt: prompt.to_string(),
        options,
    }
}

fn multi(id: u32, prompt: &str, options: Vec<QuestionOption>) -> Question {
    Question {
        id,
        kind: QuestionKind::MultiSelect { max_selections: 2 },
        prompt: prompt.to_string(),
        options,
    }
}

/// The core bank every respondent answers.
pub fn core_questions() -> Vec<Question> {
    vec![
        forced(
            1,
            "A new feature request lands on your desk. What do you think about first?",
            vec![
                option(
                    "How the data will be modeled and which services need to change",
                    RoleScores::new(2, 0, 0, 0),
                    &["api-design", "data-modeling"],
                    "Reaches for the data model before anything else.",
                ),
                option(
                    "How the flow should look and feel for the person using it",
                    RoleScores::new(0, 2, 0, 0),
                    &["ux", "interaction-design"],
                    "Starts from the user's point of view.",
                ),
                option(
                    "Which edge cases could break it and how we'd catch them",
                    RoleScores::new(0, 0, 2, 0),
                    &["risk-analysis", "edge-cases"],
                    "Hunts for failure modes up front.",
                ),
                option(
                    "Whether it's worth building at all and how we'd measure success",
                    RoleScores::new(0, 0, 0, 2),
                    &["prioritization", "metrics"],
                    "Questions the why before the how.",
                ),
            ],
        ),
        forced(
            2,
            "Production is down. Where do you instinctively look first?",
            vec![
                option(
                    "Server logs and traces",
                    RoleScores::new(2, 0, 0, 0),
                    &["debugging", "observability"],
                    "Goes straight to the backend telemetry.",
                ),
                option(
                    "The browser console and UI state",
                    RoleScores::new(0, 2, 0, 0),
                    &["devtools", "frontend-debugging"],
                    "Inspects the client before the server.",
                ),
                option(
                    "Recent releases and the gaps in their test coverage",
                    RoleScores::new(0, 0, 2, 0),
                    &["regression-analysis", "release-hygiene"],
                    "Suspects the last change and its missing tests.",
                ),
                option(
                    "Who is affected and what we tell them",
                    RoleScores::new(0, 0, 0, 2),
                    &["stakeholder-comms", "incident-management"],
                    "Thinks about impact and communication first.",
                ),
            ],
        ),
        scale(
            3,
            "How comfortable are you designing and evolving a relational schema?",
            vec![
                option(
                    "Completely at home",
                    RoleScores::new(2, 0, 0, 0),
                    &["sql", "schema-design"],
                    "Treats schema design as home turf.",
                ),
                option(
                    "Fairly comfortable",
                    RoleScores::new(1, 0, 0, 0),
                    &["sql"],
                    "Handles schema work without fuss.",
                ),
                option(
                    "Neutral",
                    RoleScores::ZERO,
                    &[],
                    "Indifferent to schema work.",
                ),
                option(
                    "Would rather not",
                    RoleScores::ZERO,
                    &[],
                    "Steers around schema work when possible.",
                ),
                option(
                    "Avoid it entirely",
                    RoleScores::ZERO,
                    &[],
                    "Keeps well clear of the database layer.",
                ),
            ],
        ),
        scale(
            4,
            "How often do you tweak spacing, color, or motion until it feels right?",
            vec![
                option(
                    "Constantly",
                    RoleScores::new(0, 2, 0, 0),
                    &["css", "visual-polish"],
                    "Polishes pixels until they sing.",
                ),
                option(
                    "Often",
                    RoleScores::new(0, 1, 0, 0),
                    &["css"],
                    "Cares about visual detail.",
                ),
                option(
                    "Sometimes",
                    RoleScores::ZERO,
                    &[],
                    "Occasional eye for polish.",
                ),
                option(
                    "Rarely",
                    RoleScores::ZERO,
                    &[],
                    "Leaves polish to others.",
                ),
                option(
                    "Never",
                    RoleScores::ZERO,
                    &[],
                    "Visual detail is someone else's job.",
                ),
            ],
        ),
        scale(
            5,
            "When you review a pull request, how deeply do you dig for ways it could fail?",
            vec![
                option(
                    "I won't approve until I've tried to break it",
                    RoleScores::new(0, 0, 2, 0),
                    &["code-review", "test-depth"],
                    "Reviews like an adversary.",
                ),
                option(
                    "I look hard at the risky paths",
                    RoleScores::new(0, 0, 1, 0),
                    &["code-review"],
                    "Focuses review on the risky paths.",
                ),
                option(
                    "A normal once-over",
                    RoleScores::ZERO,
                    &[],
                    "Standard review habits.",
                ),
                option(
                    "I mostly trust the author",
                    RoleScores::ZERO,
                    &[],
                    "Leans on author judgement.",
                ),
                option(
                    "I skim and approve",
                    RoleScores::ZERO,
                    &[],
                    "Review is a formality.",
                ),
            ],
        ),
        scale(
            6,
            "How energized are you by turning vague stakeholder asks into a concrete plan?",
            vec![
                option(
                    "It's the best part of the job",
                    RoleScores::new(0, 0, 0, 2),
                    &["roadmapping", "requirements"],
                    "Thrives on turning ambiguity into a plan.",
                ),
                option(
                    "I enjoy it",
                    RoleScores::new(0, 0, 0, 1),
                    &["requirements"],
                    "Comfortable shaping fuzzy asks.",
                ),
                option(
                    "It's fine",
                    RoleScores::ZERO,
                    &[],
                    "Neutral on planning work.",
                ),
                option(
                    "I'd rather someone else did it",
                    RoleScores::ZERO,
                    &[],
                    "Prefers a plan handed over ready-made.",
                ),
                option(
                    "It drains me",
                    RoleScores::ZERO,
                    &[],
                    "Planning work is a chore.",
                ),
            ],
        ),
        forced(
            7,
            "Pick the compliment that would mean the most to you.",
            vec![
                option(
                    "\"Your API is a joy to integrate against\"",
                    RoleScores::new(2, 0, 0, 0),
                    &["api-design"],
                    "Takes pride in clean service contracts.",
                ),
                option(
                    "\"This interface is beautiful\"",
                    RoleScores::new(0, 2, 0, 0),
                    &["ui"],
                    "Measures success by how the product feels.",
                ),
                option(
                    "\"You caught what everyone else missed\"",
                    RoleScores::new(0, 0, 2, 0),
                    &["attention-to-detail"],
                    "Wants to be the last line of defense.",
                ),
                option(
                    "\"You kept the whole project on the rails\"",
                    RoleScores::new(0, 0, 0, 2),
                    &["delivery"],
                    "Takes pride in steering delivery.",
                ),
            ],
        ),
        multi(
            8,
            "Choose up to two tools you would be saddest to lose.",
            vec![
                option(
                    "A database console",
                    RoleScores::new(1, 0, 0, 0),
                    &["sql"],
                    "Lives in the database console.",
                ),
                option(
                    "The browser devtools",
                    RoleScores::new(0, 1, 0, 0),
                    &["devtools"],
                    "Lives in the browser devtools.",
                ),
                option(
                    "The test runner",
                    RoleScores::new(0, 0, 1, 0),
                    &["automation"],
                    "Keeps the test runner warm.",
                ),
                option(
                    "The roadmap board",
                    RoleScores::new(0, 0, 0, 1),
                    &["planning"],
                    "Navigates by the roadmap board.",
                ),
                option(
                    "The profiler",
                    RoleScores::new(1, 0, 1, 0),
                    &["performance", "profiling"],
                    "Reaches for the profiler early.",
                ),
            ],
        ),
        multi(
            9,
            "Choose up to two parts of a launch you would volunteer to own.",
            vec![
                option(
                    "Provisioning and scaling the infrastructure",
                    RoleScores::new(1, 0, 0, 0),
                    &["infrastructure"],
                    "Volunteers for the infrastructure work.",
                ),
                option(
                    "The landing page and onboarding flow",
                    RoleScores::new(0, 1, 0, 0),
                    &["onboarding", "ui"],
                    "Volunteers for the user-facing surface.",
                ),
                option(
                    "The pre-launch test pass",
                    RoleScores::new(0, 0, 1, 0),
                    &["test-planning"],
                    "Volunteers to certify the release.",
                ),
                option(
                    "The go/no-go checklist and comms",
                    RoleScores::new(0, 0, 0, 1),
                    &["coordination"],
                    "Volunteers to run the launch itself.",
                ),
            ],
        ),
        forced(
            10,
            "A teammate proposes a clever but risky shortcut. What do you ask first?",
            vec![
                option(
                    "How it behaves under load and partial failure",
                    RoleScores::new(2, 0, 0, 0),
                    &["systems-thinking"],
                    "Interrogates the failure modes of clever ideas.",
                ),
                option(
                    "How it changes what users actually see",
                    RoleScores::new(0, 2, 0, 0),
                    &["user-empathy"],
                    "Translates cleverness into user impact.",
                ),
                option(
                    "Where the test plan is before anything merges",
                    RoleScores::new(0, 0, 2, 0),
                    &["quality-gates"],
                    "Refuses to merge without a test plan.",
                ),
                option(
                    "What it does to the timeline and scope",
                    RoleScores::new(0, 0, 0, 2),
                    &["scope-management"],
                    "Weighs cleverness against the schedule.",
                ),
            ],
        ),
    ]
}

/// Bonus questions, one per contested role pair. The selector offers the
/// pair-discriminating subset when preliminary totals are close.
pub fn bonus_questions() -> Vec<Question> {
    vec![
        forced(
            101,
            "Given one free afternoon to learn something new, you pick:",
            vec![
                option(
                    "A storage engine's internals",
                    RoleScores::new(2, 0, 0, 0),
                    &["internals"],
                    "Spends free time under the hood.",
                ),
                option(
                    "A new animation library",
                    RoleScores::new(0, 2, 0, 0),
                    &["animation"],
                    "Spends free time on the surface.",
                ),
            ],
        ),
        forced(
            102,
            "You find a flaky integration test. What is your instinct?",
            vec![
                option(
                    "Trace the race in the service code",
                    RoleScores::new(2, 0, 0, 0),
                    &["concurrency", "debugging"],
                    "Chases the race into the service.",
                ),
                option(
                    "Build a harness that reproduces it reliably",
                    RoleScores::new(0, 0, 2, 0),
                    &["repro-harness", "flake-hunting"],
                    "Pins the flake down with a harness.",
                ),
            ],
        ),
        forced(
            103,
            "A design review runs long. You are the one who...",
            vec![
                option(
                    "Prototypes the contested interaction live",
                    RoleScores::new(0, 2, 0, 0),
                    &["prototyping"],
                    "Settles debates with a live prototype.",
                ),
                option(
                    "Refocuses the room on the decision to make",
                    RoleScores::new(0, 0, 0, 2),
                    &["facilitation"],
                    "Steers the room back to the decision.",
                ),
            ],
        ),
        forced(
            104,
            "The release is tomorrow and one bug remains. You...",
            vec![
                option(
                    "Chase the bug until it's dead",
                    RoleScores::new(0, 0, 2, 0),
                    &["persistence", "debugging"],
                    "Will not ship a known bug without a fight.",
                ),
                option(
                    "Weigh shipping with a known issue against slipping",
                    RoleScores::new(0, 0, 0, 2),
                    &["tradeoffs", "risk-management"],
                    "Treats the bug as a shipping decision.",
                ),
            ],
        ),
        forced(
            105,
            "Your favorite kind of meeting is...",
            vec![
                option(
                    "A deep technical design session",
                    RoleScores::new(2, 0, 0, 0),
                    &["architecture"],
                    "Happiest in a design deep-dive.",
                ),
                option(
                    "A crisp planning session that ends with owners and dates",
                    RoleScores::new(0, 0, 0, 2),
                    &["planning"],
                    "Happiest when the plan has owners and dates.",
                ),
            ],
        ),
        forced(
            106,
            "A page renders wrong in exactly one browser. You feel...",
            vec![
                option(
                    "Intrigued: time to bisect the CSS",
                    RoleScores::new(0, 2, 0, 0),
                    &["css", "cross-browser"],
                    "Enjoys the cross-browser hunt.",
                ),
                option(
                    "Vindicated: another gap for the compatibility matrix",
                    RoleScores::new(0, 0, 2, 0),
                    &["compatibility-testing", "matrix-coverage"],
                    "Files it straight into the compatibility matrix.",
                ),
            ],
        ),
    ]
}

/// Core and bonus banks combined, in scoring order.
pub fn full_bank() -> Vec<Question> {
    let mut bank = core_questions();
    bank.extend(bonus_questions());
    bank
}
