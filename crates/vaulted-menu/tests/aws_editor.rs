// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted sessions against the AWS key editor.

use std::time::Duration;

use proptest::prelude::*;
use vaulted_core::{AwsKey, Vault, VaultedError, MAX_TEMP_CRED_DURATION};
use vaulted_menu::{AwsMenu, KnownRegions, Menu, MenuExit};
use vaulted_test_utils::{ScriptedPrompt, StaticDetector};

const HOUR: u64 = 3600;

fn run(
    vault: &mut Vault,
    prompt: &mut ScriptedPrompt,
    detector: &StaticDetector,
) -> (Result<MenuExit, VaultedError>, String) {
    colored::control::set_override(false);
    let regions = KnownRegions::builtin();
    let mut out = Vec::new();
    let result = {
        let mut menu = Menu::new(vault, prompt, detector, &regions, &mut out);
        AwsMenu::new(&mut menu).handler()
    };
    (result, String::from_utf8(out).unwrap())
}

fn key() -> AwsKey {
    AwsKey {
        id: "AKIAOLD".into(),
        secret: "old-secret".into(),
        mfa: "arn:aws:iam::1:mfa/old".into(),
        role: "arn:aws:iam::1:role/old".into(),
        region: Some("us-east-1".into()),
        forgo_temp_cred_generation: false,
    }
}

fn vault_with(key: Option<AwsKey>, hours: u64) -> Vault {
    Vault {
        aws_key: key,
        ..Vault::with_duration(Duration::from_secs(hours * HOUR))
    }
}

#[test]
fn back_returns_without_changes() {
    let mut vault = vault_with(Some(key()), 1);
    let before = vault.clone();
    let mut prompt = ScriptedPrompt::lines(["b"]);
    let (result, _) = run(&mut vault, &mut prompt, &StaticDetector::none());
    assert_eq!(result.unwrap(), MenuExit::Back);
    assert_eq!(vault, before);
}

#[test]
fn menu_prompt_depends_on_key_presence() {
    let mut prompt = ScriptedPrompt::lines(["b"]);
    let _ = run(&mut Vault::default(), &mut prompt, &StaticDetector::none());
    assert_eq!(prompt.asked(), ["Edit AWS key [k,R,b]: "]);

    let mut prompt = ScriptedPrompt::lines(["b"]);
    let _ = run(&mut vault_with(Some(key()), 1), &mut prompt, &StaticDetector::none());
    assert_eq!(prompt.asked(), ["Edit AWS key [k,m,r,R,t,S,D,b]: "]);
}

#[test]
fn key_commands_without_key_warn_and_continue() {
    for command in ["m", "mfa", "r", "role", "t", "temp", "D", "delete"] {
        let mut vault = vault_with(None, 48);
        let before = vault.clone();
        let detector = StaticDetector::devices(["arn:aws:iam::1:mfa/a"]);
        let mut prompt = ScriptedPrompt::lines([command, "b"]);

        let (result, out) = run(&mut vault, &mut prompt, &detector);

        assert_eq!(result.unwrap(), MenuExit::Back, "{command}");
        assert_eq!(vault, before, "{command}");
        assert!(out.contains("Must associate an AWS key with the vault first"));
        assert_eq!(detector.calls(), 0);
        assert_eq!(prompt.remaining(), 0);
    }
}

#[test]
fn add_key_to_empty_vault_runs_detection() {
    let mut vault = Vault::default();
    let detector = StaticDetector::devices(["arn:aws:iam::1:mfa/me"]);
    let mut prompt = ScriptedPrompt::lines(["k", "AKIANEW", "new-secret", "y", "b"]);

    let (result, out) = run(&mut vault, &mut prompt, &detector);

    assert_eq!(result.unwrap(), MenuExit::Back);
    let key = vault.aws_key.unwrap();
    assert_eq!(key.id, "AKIANEW");
    assert_eq!(key.secret, "new-secret");
    assert_eq!(key.mfa, "arn:aws:iam::1:mfa/me");
    assert!(key.substitutes_temp_creds());
    assert!(out.contains("Vaulted defaults to substituting your credentials"));
    assert!(prompt
        .asked()
        .contains(&"Use MFA device arn:aws:iam::1:mfa/me? (y/n): ".to_string()));
}

#[test]
fn add_key_keeps_other_fields_of_existing_key() {
    let mut vault = vault_with(Some(key()), 1);
    let mut prompt = ScriptedPrompt::lines(["k", "AKIANEW", "new-secret", "b"]);

    let (result, _) = run(&mut vault, &mut prompt, &StaticDetector::none());

    assert_eq!(result.unwrap(), MenuExit::Back);
    let key = vault.aws_key.unwrap();
    assert_eq!(key.id, "AKIANEW");
    assert_eq!(key.mfa, "arn:aws:iam::1:mfa/old");
    assert_eq!(key.role, "arn:aws:iam::1:role/old");
    assert_eq!(key.region(), Some("us-east-1"));
}

#[test]
fn abort_in_detection_restores_previous_key() {
    for previous in [None, Some(key())] {
        let mut vault = vault_with(previous.clone(), 1);
        let detector = StaticDetector::devices(["arn:aws:iam::1:mfa/a", "arn:aws:iam::1:mfa/b"]);
        let mut prompt = ScriptedPrompt::lines(["k", "AKIANEW", "new-secret"])
            .abort()
            .line("b");

        let (result, _) = run(&mut vault, &mut prompt, &detector);

        assert_eq!(result.unwrap(), MenuExit::Back);
        assert_eq!(vault.aws_key, previous);
    }
}

#[test]
fn abort_while_entering_key_id_ends_the_editor() {
    let mut vault = vault_with(Some(key()), 1);
    let mut prompt = ScriptedPrompt::lines(["k"]).abort();
    let (result, _) = run(&mut vault, &mut prompt, &StaticDetector::none());
    assert!(result.unwrap_err().is_user_abort());
    assert_eq!(vault.aws_key, Some(key()));
}

#[test]
fn new_key_clamps_long_duration() {
    let mut vault = vault_with(None, 72);
    let mut prompt = ScriptedPrompt::lines(["k", "AKIANEW", "new-secret", "b"]);
    let (result, out) = run(&mut vault, &mut prompt, &StaticDetector::none());
    assert_eq!(result.unwrap(), MenuExit::Back);
    assert_eq!(vault.duration, MAX_TEMP_CRED_DURATION);
    assert!(out.contains("Vault duration adjusted to 36h"));
}

#[test]
fn mfa_uses_detected_device() {
    let mut vault = vault_with(Some(key()), 1);
    let detector = StaticDetector::devices(["arn:aws:iam::1:mfa/a", "arn:aws:iam::1:mfa/b"]);
    let mut prompt = ScriptedPrompt::lines(["m", "2", "b"]);

    let (result, _) = run(&mut vault, &mut prompt, &detector);

    assert_eq!(result.unwrap(), MenuExit::Back);
    assert_eq!(vault.aws_key.unwrap().mfa, "arn:aws:iam::1:mfa/b");
}

#[test]
fn mfa_falls_back_to_manual_entry() {
    let mut vault = vault_with(Some(key()), 1);
    let detector = StaticDetector::failing("aws cli not installed");
    let mut prompt = ScriptedPrompt::lines(["m", "GAHT12345678", "b"]);

    let (result, out) = run(&mut vault, &mut prompt, &detector);

    assert_eq!(result.unwrap(), MenuExit::Back);
    assert_eq!(vault.aws_key.unwrap().mfa, "GAHT12345678");
    assert!(out.contains("aws cli not installed"));
    assert!(prompt
        .asked()
        .contains(&"MFA ARN or serial number: ".to_string()));
}

#[test]
fn mfa_abort_during_detection_restores_value() {
    let mut vault = vault_with(Some(key()), 1);
    let detector = StaticDetector::devices(["arn:aws:iam::1:mfa/new"]);
    let mut prompt = ScriptedPrompt::lines(["m"]).abort().line("b");

    let (result, _) = run(&mut vault, &mut prompt, &detector);

    assert_eq!(result.unwrap(), MenuExit::Back);
    assert_eq!(vault.aws_key.unwrap().mfa, "arn:aws:iam::1:mfa/old");
}

#[test]
fn mfa_abort_during_manual_entry_restores_value() {
    let mut vault = vault_with(Some(key()), 1);
    let mut prompt = ScriptedPrompt::lines(["m"]).abort().line("b");

    let (result, _) = run(&mut vault, &mut prompt, &StaticDetector::none());

    assert_eq!(result.unwrap(), MenuExit::Back);
    assert_eq!(vault.aws_key.unwrap().mfa, "arn:aws:iam::1:mfa/old");
}

#[test]
fn mfa_prompt_failure_restores_and_propagates() {
    let mut vault = vault_with(Some(key()), 1);
    let mut prompt = ScriptedPrompt::lines(["m"]).fail("terminal closed");

    let (result, _) = run(&mut vault, &mut prompt, &StaticDetector::none());

    assert!(matches!(result, Err(VaultedError::Prompt(_))));
    assert_eq!(vault.aws_key.unwrap().mfa, "arn:aws:iam::1:mfa/old");
}

#[test]
fn role_is_overwritten() {
    let mut vault = vault_with(Some(key()), 1);
    let mut prompt = ScriptedPrompt::lines(["r", "arn:aws:iam::1:role/new", "b"]);
    run(&mut vault, &mut prompt, &StaticDetector::none()).0.unwrap();
    assert_eq!(vault.aws_key.unwrap().role, "arn:aws:iam::1:role/new");
}

#[test]
fn empty_region_clears_to_global() {
    let mut vault = vault_with(Some(key()), 1);
    let mut prompt = ScriptedPrompt::lines(["R", "", "b"]);
    let (result, out) = run(&mut vault, &mut prompt, &StaticDetector::none());
    assert_eq!(result.unwrap(), MenuExit::Back);
    assert_eq!(vault.aws_key.as_ref().unwrap().region(), None);
    assert!(out.contains("Region: <global>"));
}

#[test]
fn empty_region_without_key_changes_nothing() {
    let mut vault = Vault::default();
    let mut prompt = ScriptedPrompt::lines(["region", "", "b"]);
    run(&mut vault, &mut prompt, &StaticDetector::none()).0.unwrap();
    assert_eq!(vault, Vault::default());
}

#[test]
fn region_without_key_creates_minimal_key() {
    let mut vault = Vault::default();
    let mut prompt = ScriptedPrompt::lines(["R", "eu-west-1", "b"]);
    run(&mut vault, &mut prompt, &StaticDetector::none()).0.unwrap();
    assert_eq!(vault.aws_key, Some(AwsKey::with_region("eu-west-1")));
}

#[test]
fn unknown_region_warns_but_is_kept() {
    let mut vault = vault_with(Some(key()), 1);
    let mut prompt = ScriptedPrompt::lines(["R", "mars-north-1", "b"]);
    let (result, out) = run(&mut vault, &mut prompt, &StaticDetector::none());
    assert_eq!(result.unwrap(), MenuExit::Back);
    assert_eq!(vault.aws_key.unwrap().region(), Some("mars-north-1"));
    assert!(out.contains("WARNING: mars-north-1 doesn't appear to be a valid region."));
    assert!(out.contains("Region: mars-north-1 (unrecognized region)"));
}

#[test]
fn disabling_temp_creds_needs_no_confirmation() {
    let mut vault = vault_with(Some(key()), 1);
    let mut prompt = ScriptedPrompt::lines(["t", "b"]);
    run(&mut vault, &mut prompt, &StaticDetector::none()).0.unwrap();
    assert!(vault.aws_key.unwrap().forgo_temp_cred_generation);
}

#[test]
fn enabling_temp_creds_within_ceiling_needs_no_confirmation() {
    let mut forgoing = key();
    forgoing.forgo_temp_cred_generation = true;
    let mut vault = vault_with(Some(forgoing), 36);
    let mut prompt = ScriptedPrompt::lines(["t", "b"]);
    run(&mut vault, &mut prompt, &StaticDetector::none()).0.unwrap();
    assert!(!vault.aws_key.unwrap().forgo_temp_cred_generation);
    assert_eq!(vault.duration, MAX_TEMP_CRED_DURATION);
}

#[test]
fn aborted_temp_confirmation_counts_as_decline() {
    let mut forgoing = key();
    forgoing.forgo_temp_cred_generation = true;
    let mut vault = vault_with(Some(forgoing), 48);
    let before = vault.clone();
    let mut prompt = ScriptedPrompt::lines(["t"]).abort().line("b");

    let (result, out) = run(&mut vault, &mut prompt, &StaticDetector::none());

    assert_eq!(result.unwrap(), MenuExit::Back);
    assert_eq!(vault, before);
    assert!(out.contains("Temporary credentials not enabled."));
}

#[test]
fn show_toggles_secret_display() {
    let mut vault = vault_with(Some(key()), 1);
    let mut prompt = ScriptedPrompt::lines(["S", "hide", "b"]);
    let (_, out) = run(&mut vault, &mut prompt, &StaticDetector::none());

    let renders: Vec<&str> = out.split("AWS Key:").skip(1).collect();
    assert_eq!(renders.len(), 3);
    assert!(renders[0].contains("Secret: <hidden>"));
    assert!(renders[1].contains("Secret: old-secret"));
    assert!(renders[2].contains("Secret: <hidden>"));
}

#[test]
fn delete_requires_yes() {
    let mut vault = vault_with(Some(key()), 1);
    let mut prompt = ScriptedPrompt::lines(["D", "n", "b"]);
    run(&mut vault, &mut prompt, &StaticDetector::none()).0.unwrap();
    assert!(vault.aws_key.is_some());

    let mut prompt = ScriptedPrompt::lines(["remove", "y", "b"]);
    run(&mut vault, &mut prompt, &StaticDetector::none()).0.unwrap();
    assert!(vault.aws_key.is_none());
}

#[test]
fn quit_without_confirmation_keeps_editing() {
    let mut vault = vault_with(Some(key()), 1);
    let mut prompt = ScriptedPrompt::lines(["q", "n", "quit", "maybe", "b"]);
    let (result, _) = run(&mut vault, &mut prompt, &StaticDetector::none());
    assert_eq!(result.unwrap(), MenuExit::Back);
    assert_eq!(prompt.remaining(), 0);
}

#[test]
fn confirmed_quit_signals_save_and_exit() {
    let mut vault = vault_with(Some(key()), 1);
    let mut prompt = ScriptedPrompt::lines(["exit", "y"]);
    let (result, _) = run(&mut vault, &mut prompt, &StaticDetector::none());
    assert_eq!(result.unwrap(), MenuExit::SaveAndExit);
}

#[test]
fn unknown_command_is_reported() {
    let mut vault = Vault::default();
    let mut prompt = ScriptedPrompt::lines(["K", "b"]);
    let (result, out) = run(&mut vault, &mut prompt, &StaticDetector::none());
    assert_eq!(result.unwrap(), MenuExit::Back);
    assert!(out.contains("Command not recognized"));
}

#[test]
fn blank_command_is_not_recognized() {
    let mut vault = vault_with(Some(key()), 1);
    let before = vault.clone();
    let mut prompt = ScriptedPrompt::lines(["", "b"]);
    let (result, out) = run(&mut vault, &mut prompt, &StaticDetector::none());
    assert_eq!(result.unwrap(), MenuExit::Back);
    assert!(out.contains("Command not recognized"));
    assert_eq!(vault, before);
}

#[test]
fn enabling_temp_creds_at_ceiling_needs_no_confirmation() {
    let mut forgoing = key();
    forgoing.forgo_temp_cred_generation = true;
    let mut vault = vault_with(Some(forgoing), 36);
    let mut prompt = ScriptedPrompt::lines(["t", "b"]);

    let (result, out) = run(&mut vault, &mut prompt, &StaticDetector::none());

    assert_eq!(result.unwrap(), MenuExit::Back);
    assert_eq!(vault.duration, MAX_TEMP_CRED_DURATION);
    assert!(vault.substitutes_temp_creds());
    assert!(!out.contains("Do you wish to proceed?"));
    assert_eq!(prompt.remaining(), 0);
    assert!(!prompt.asked().iter().any(|p| p.contains("proceed")));
}

#[test]
fn help_lists_commands() {
    let mut prompt = ScriptedPrompt::lines(["?", "b"]);
    let (_, out) = run(&mut Vault::default(), &mut prompt, &StaticDetector::none());
    assert!(out.contains("R,region - Region"));
    assert!(out.contains("t,temp - Substitute with temporary credentials"));
}

#[test]
fn abort_at_menu_prompt_propagates() {
    let mut vault = vault_with(Some(key()), 1);
    let mut prompt = ScriptedPrompt::new().abort();
    let (result, _) = run(&mut vault, &mut prompt, &StaticDetector::none());
    assert!(matches!(result, Err(VaultedError::UserAbort)));
}

proptest! {
    #[test]
    fn confirming_temp_creds_clamps_to_ceiling(hours in 37u64..10_000) {
        let mut forgoing = key();
        forgoing.forgo_temp_cred_generation = true;
        let mut vault = vault_with(Some(forgoing), hours);
        let mut prompt = ScriptedPrompt::lines(["t", "y", "b"]);

        let (result, out) = run(&mut vault, &mut prompt, &StaticDetector::none());

        prop_assert_eq!(result.unwrap(), MenuExit::Back);
        prop_assert_eq!(vault.duration, MAX_TEMP_CRED_DURATION);
        prop_assert!(vault.substitutes_temp_creds());
        prop_assert!(out.contains("Proceeding will adjust your vault duration to 36h"));
    }

    #[test]
    fn declining_temp_creds_changes_nothing(hours in 37u64..10_000, answer in "[a-xz]?") {
        let mut forgoing = key();
        forgoing.forgo_temp_cred_generation = true;
        let mut vault = vault_with(Some(forgoing), hours);
        let before = vault.clone();
        let mut prompt = ScriptedPrompt::lines(["t", answer.as_str(), "b"]);

        let (result, _) = run(&mut vault, &mut prompt, &StaticDetector::none());

        prop_assert_eq!(result.unwrap(), MenuExit::Back);
        prop_assert_eq!(vault, before);
    }
}
