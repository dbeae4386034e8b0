// Dskey terminal preview
// Input editor, live double-struck output and an on-screen keyboard

#[path = "../tui/mod.rs"]
mod tui;

fn main() -> anyhow::Result<()> {
    tui::run()?;
    Ok(())
}
