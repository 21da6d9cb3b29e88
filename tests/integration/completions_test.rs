//! Tests for shell completion generation.

use crate::helpers::run_fasta2af3;

#[test]
fn completions_bash_names_the_binary() {
    let (stdout, _, exit_code) = run_fasta2af3(&["completions", "bash"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("fasta2af3"));
}

#[test]
fn completions_zsh_emits_a_compdef_header() {
    let (stdout, _, exit_code) = run_fasta2af3(&["completions", "zsh"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("#compdef fasta2af3"));
}

#[test]
fn completions_fish_lists_the_subcommands() {
    let (stdout, _, exit_code) = run_fasta2af3(&["completions", "fish"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("convert"));
    assert!(stdout.contains("inspect"));
}

#[test]
fn completions_cover_every_supported_shell() {
    for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
        let (stdout, _, exit_code) = run_fasta2af3(&["completions", shell]);
        assert_eq!(exit_code, 0, "completions failed for {}", shell);
        assert!(!stdout.is_empty(), "empty completions for {}", shell);
    }
}
