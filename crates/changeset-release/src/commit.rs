use std::fmt::Write;

use crate::config::CommitOptions;
use crate::types::ReleasePlan;

const EMPTY_SECTION: &str = "  []";
const SKIP_CI_FOOTER: &str = "\n\n[skip ci]";

/// Renders the release commit message for `plan`.
///
/// Sections keep the plan's own ordering; nothing is sorted here.
#[must_use]
pub fn render_release_commit(plan: &ReleasePlan, options: &CommitOptions) -> String {
    let mut output = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        output,
        "RELEASING: Releasing {} package(s)",
        plan.release_count()
    );

    output.push_str("\nReleases:\n");
    for release in plan.releases.values() {
        let _ = writeln!(output, "  {}@{}", release.name, release.new_version);
    }

    output.push_str("\nDependents:\n");
    if plan.dependents.is_empty() {
        output.push_str(EMPTY_SECTION);
        output.push('\n');
    }
    for dependent in &plan.dependents {
        let _ = writeln!(output, "  {}@{}", dependent.name, dependent.new_version);
    }

    output.push_str("\nDeleted:\n");
    if plan.deleted_packages.is_empty() {
        output.push_str(EMPTY_SECTION);
        output.push('\n');
    }
    for name in &plan.deleted_packages {
        let _ = writeln!(output, "  {name}");
    }

    if options.skip_ci {
        output.push_str(SKIP_CI_FOOTER);
    }

    output
}
