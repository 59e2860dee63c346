//! Deploy command assembly.

/// Base invocation every generated deploy command starts from.
pub const DEPLOY_BASE: &str = "sf project deploy start";

/// Assemble the final `sf project deploy start` invocation.
///
/// Pure string assembly: base command, `--metadata` with the selected
/// identifiers space-joined in selection order, `-o` when an org is given,
/// `--ignore-conflicts` when forced. The caller guarantees a non-empty
/// selection.
pub fn build_deploy_command(
    selection: &[String],
    target_org: Option<&str>,
    ignore_conflicts: bool,
) -> String {
    let mut command = String::from(DEPLOY_BASE);
    command.push_str(" --metadata ");
    command.push_str(&selection.join(" "));
    if let Some(org) = target_org.filter(|o| !o.is_empty()) {
        command.push_str(" -o ");
        command.push_str(org);
    }
    if ignore_conflicts {
        command.push_str(" --ignore-conflicts");
    }
    command
}
