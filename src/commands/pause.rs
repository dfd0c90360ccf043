use anyhow::Result;
use kibo::menu;

pub fn wait(millis: i64) -> Result<()> {
    menu::wait(millis);
    Ok(())
}

pub fn loading(message: &str) -> Result<()> {
    menu::loading_message(message);
    Ok(())
}
