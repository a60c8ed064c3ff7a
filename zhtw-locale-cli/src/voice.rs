use zhtw_locale::{Config, VoiceLocale, switch_voice};

pub fn run_voice_command(config: &Config, lang: &str) -> Result<(), String> {
    let locale: VoiceLocale = lang.parse().map_err(|e: zhtw_locale::Error| e.to_string())?;
    let report = switch_voice(config, locale).map_err(|e| e.to_string())?;

    for key in &report.changed_keys {
        println!("Updated: {}", key);
    }
    for key in &report.missing_keys {
        println!("Not found: {}", key);
    }

    let label = match locale {
        VoiceLocale::English => "English",
        VoiceLocale::Chinese => "Chinese",
    };
    println!(
        "✅ {} now uses the {} voice assets",
        report.path.display(),
        label
    );
    Ok(())
}
