use std::path::Path;

pub fn run(command: &str, project_dir: &str, policy: Option<&Path>) -> anyhow::Result<()> {
    let result = writegate_core::check_bash_command(command, Path::new(project_dir), policy);
    super::emit(&result)
}
