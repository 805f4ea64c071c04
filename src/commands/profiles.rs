use anyhow::Result;
use netrecon::config::Config;
use netrecon::ui::json::emit_json;
use netrecon::ui::text::render_profiles;

pub fn cmd_profiles(config: &Config, json: bool) -> Result<()> {
    let profiles = config.profile_registry()?;

    if json {
        emit_json(&profiles)?;
    } else {
        print!("{}", render_profiles(&profiles));
    }
    Ok(())
}
