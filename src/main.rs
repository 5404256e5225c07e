use anyhow::Result;

fn main() -> Result<()> {
    admitdesk::cli::run()
}
