use std::path::Path;

pub fn run(file_path: &str, project_dir: &str, policy: Option<&Path>) -> anyhow::Result<()> {
    let result =
        writegate_core::check_write_path(Path::new(file_path), Path::new(project_dir), policy);
    super::emit(&result)
}
