//! Payment-instruction overrides: embedded defaults, then an optional flat
//! TOML file, then `STOREFRONT_*` environment variables. Catalog data is
//! never configurable.

use std::{collections::HashMap, fs, path::Path};

use checkout::PaymentInstructions;

pub fn load_instructions(config_path: Option<&Path>) -> PaymentInstructions {
    let mut instructions = PaymentInstructions::default();

    let path = config_path.unwrap_or_else(|| Path::new("storefront.toml"));
    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            apply_file_overrides(&mut instructions, &file_cfg);
        }
    }

    apply_env_overrides(&mut instructions);
    instructions
}

fn apply_file_overrides(
    instructions: &mut PaymentInstructions,
    file_cfg: &HashMap<String, String>,
) {
    if let Some(v) = file_cfg.get("provider_name") {
        instructions.provider_name = v.clone();
    }
    if let Some(v) = file_cfg.get("provider_logo_url") {
        instructions.provider_logo_url = v.clone();
    }
    if let Some(v) = file_cfg.get("account_number") {
        instructions.account_number = v.clone();
    }
    if let Some(v) = file_cfg.get("account_holder") {
        instructions.account_holder = v.clone();
    }
    if let Some(v) = file_cfg.get("verification_bot_url") {
        instructions.verification_bot_url = v.clone();
    }
    if let Some(v) = file_cfg.get("support_contact_url") {
        instructions.support_contact_url = v.clone();
    }
    if let Some(v) = file_cfg.get("follow_up_hours") {
        if let Ok(parsed) = v.parse::<u32>() {
            instructions.follow_up_hours = parsed;
        }
    }
}

fn apply_env_overrides(instructions: &mut PaymentInstructions) {
    if let Ok(v) = std::env::var("STOREFRONT_PROVIDER_NAME") {
        instructions.provider_name = v;
    }
    if let Ok(v) = std::env::var("STOREFRONT_PROVIDER_LOGO_URL") {
        instructions.provider_logo_url = v;
    }
    if let Ok(v) = std::env::var("STOREFRONT_ACCOUNT_NUMBER") {
        instructions.account_number = v;
    }
    if let Ok(v) = std::env::var("STOREFRONT_ACCOUNT_HOLDER") {
        instructions.account_holder = v;
    }
    if let Ok(v) = std::env::var("STOREFRONT_VERIFICATION_BOT_URL") {
        instructions.verification_bot_url = v;
    }
    if let Ok(v) = std::env::var("STOREFRONT_SUPPORT_CONTACT_URL") {
        instructions.support_contact_url = v;
    }
    if let Ok(v) = std::env::var("STOREFRONT_FOLLOW_UP_HOURS") {
        if let Ok(parsed) = v.parse::<u32>() {
            instructions.follow_up_hours = parsed;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn defaults_survive_a_missing_config_file() {
        let missing = PathBuf::from("/definitely/not/a/real/storefront.toml");
        let instructions = load_instructions(Some(&missing));
        assert_eq!(instructions.provider_name, "Telebirr");
        assert_eq!(instructions.account_number, "0978366565");
        assert_eq!(instructions.follow_up_hours, 24);
    }

    #[test]
    fn file_overrides_replace_only_named_fields() {
        let mut instructions = PaymentInstructions::default();
        let mut file_cfg = HashMap::new();
        file_cfg.insert("account_number".to_string(), "0911000000".to_string());
        file_cfg.insert("follow_up_hours".to_string(), "48".to_string());

        apply_file_overrides(&mut instructions, &file_cfg);

        assert_eq!(instructions.account_number, "0911000000");
        assert_eq!(instructions.follow_up_hours, 48);
        assert_eq!(instructions.provider_name, "Telebirr");
        assert_eq!(instructions.account_holder, "Alemseged");
    }

    #[test]
    fn unparsable_follow_up_window_keeps_the_default() {
        let mut instructions = PaymentInstructions::default();
        let mut file_cfg = HashMap::new();
        file_cfg.insert("follow_up_hours".to_string(), "soonish".to_string());

        apply_file_overrides(&mut instructions, &file_cfg);

        assert_eq!(instructions.follow_up_hours, 24);
    }
}
