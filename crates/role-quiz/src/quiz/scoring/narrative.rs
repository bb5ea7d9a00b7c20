use super::super::domain::{Role, RoleAssignment};
use super::{QuestionContribution, RoleStanding};

/// Compose the explanatory paragraph for a result. Pure templating over the
/// assignment, the ranking, and the recorded contributions; no state, no I/O.
pub(crate) fn compose(
    primary: &RoleAssignment,
    secondary: Option<Role>,
    tie_detected: bool,
    ranked: &[RoleStanding],
    contributions: &[QuestionContribution],
    secondary_margin_percent: u32,
) -> String {
    let mut paragraph = match primary {
        RoleAssignment::Single(role) => format!(
            "Your strongest alignment is {} ({}). {}",
            role.display_name(),
            role.code(),
            role.explanation()
        ),
        RoleAssignment::Hybrid(first, second) => format!(
            "Your profile splits between {} ({}) and {} ({}). {} {}",
            first.display_name(),
            first.code(),
            second.display_name(),
            second.code(),
            first.explanation(),
            second.explanation()
        ),
    };

    if !tie_detected {
        if let Some(secondary) = secondary {
            if secondary_is_close(ranked, secondary_margin_percent) {
                paragraph.push_str(&format!(
                    " You also lean noticeably toward {} ({}).",
                    secondary.display_name(),
                    secondary.code()
                ));
            }
        }
    }

    let mut reasons: Vec<&QuestionContribution> = contributions
        .iter()
        .filter(|contribution| primary.includes(contribution.role))
        .collect();
    reasons.sort_by(|a, b| b.score.cmp(&a.score));

    for reason in reasons.iter().take(2) {
        paragraph.push_str(&format!(
            " Your answer to \"{}\" pointed clearly toward {} (+{}).",
            reason.prompt,
            reason.role.code(),
            reason.score
        ));
    }

    paragraph
}

/// The secondary role is "close" when the gap to the leader stays within the
/// configured percentage of the full observed score range. A zero range only
/// occurs on an all-way tie, which the hybrid branch already covers.
fn secondary_is_close(ranked: &[RoleStanding], margin_percent: u32) -> bool {
    let (Some(top), Some(second), Some(bottom)) = (ranked.first(), ranked.get(1), ranked.last())
    else {
        return false;
    };

    let range = top.total - bottom.total;
    if range <= 0 {
        return false;
    }

    let gap = top.total - second.total;
    gap as i64 * 100 <= range as i64 * margin_percent as i64
}
