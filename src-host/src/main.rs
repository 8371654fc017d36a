use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    strata_lib::run(config_path)
}
