pub fn run(command: &str) -> anyhow::Result<()> {
    let result = writegate_core::extract_write_paths(command);
    super::emit(&result)
}
