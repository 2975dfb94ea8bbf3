use verifier_bot::interactions::ids::{
    ADMIN_COMMAND, VERIFY_BUTTON, is_admin_command, is_verify_button, is_verify_panel,
};

#[test]
fn admin_command_matches_any_case() {
    assert!(is_admin_command(ADMIN_COMMAND));
    assert!(is_admin_command("ADMIN"));
    assert!(is_admin_command("Admin"));
    assert!(!is_admin_command("admins"));
}

#[test]
fn verify_button_matches_any_case() {
    assert!(is_verify_button(VERIFY_BUTTON));
    assert!(is_verify_button("VERIFY_ME"));
    assert!(!is_verify_button("verify"));
    assert!(!is_verify_button(""));
}

#[test]
fn verify_panel_subcommand_is_exact() {
    assert!(is_verify_panel("verify-panel"));
    assert!(!is_verify_panel("verify_panel"));
    assert!(!is_verify_panel(""));
}
