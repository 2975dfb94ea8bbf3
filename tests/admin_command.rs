use verifier_bot::commands::admin::register;
use verifier_bot::interactions::panel::{PANEL_DESCRIPTION, verify_panel};

#[test]
fn admin_command_declares_verify_panel_subcommand() {
    let value = serde_json::to_value(register()).expect("serializable command");
    assert_eq!(value["name"], "admin");
    let options = value["options"].as_array().expect("options array");
    assert_eq!(options.len(), 1);
    assert_eq!(options[0]["name"], "verify-panel");
    assert!(
        value["default_member_permissions"].to_string().contains('8'),
        "administrator bit should gate the command"
    );
}

#[test]
fn panel_carries_embed_and_verify_button() {
    let json = serde_json::to_string(&verify_panel()).expect("serializable message");
    assert!(json.contains(PANEL_DESCRIPTION));
    assert!(json.contains("verify_me"));
    assert!(json.contains("\"Verify\""));
}
