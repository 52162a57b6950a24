use anyhow::Result;

fn main() -> Result<()> {
    sockforge::app::run()
}
