//! Command sequences for each workflow.
//!
//! Branch names, the remote and URLs are passed through [`quote`] so that a
//! branch like `fix;rm` cannot break out of its command.

use crate::shell::{browser_opener, quote};

/// Merge `current` into `target`, push `target`, and switch back.
pub fn integrate_commands(current: &str, target: &str, remote: &str) -> Vec<String> {
    let (current, target, remote) = (quote(current), quote(target), quote(remote));
    vec![
        format!("git checkout {}", target),
        format!("git pull --rebase {} {}", remote, target),
        format!("git merge --no-edit {}", current),
        format!("git push {} {}", remote, target),
        format!("git checkout {}", current),
    ]
}

/// Merge `current` into the release branch and switch back.
///
/// Unlike integration the merge opens the editor for the merge message.
pub fn release_commands(current: &str, release: &str, remote: &str) -> Vec<String> {
    let (current, release, remote) = (quote(current), quote(release), quote(remote));
    vec![
        format!("git checkout {}", release),
        format!("git pull --rebase {} {}", remote, release),
        format!("git merge {}", current),
        format!("git push {} {}", remote, release),
        format!("git checkout {}", current),
    ]
}

/// Rebase `current` onto its remote counterpart.
pub fn get_commands(current: &str, remote: &str) -> Vec<String> {
    vec![format!("git pull --rebase {} {}", quote(remote), quote(current))]
}

/// Rebase `current` onto its remote counterpart, then push it.
pub fn put_commands(current: &str, remote: &str) -> Vec<String> {
    let (current, remote) = (quote(current), quote(remote));
    vec![
        format!("git pull --rebase {} {}", remote, current),
        format!("git push {} {}", remote, current),
    ]
}

/// Compare page for `current` on the hosting service.
///
/// Each `/`-separated part of the branch name is percent-encoded, so `#`,
/// `%` and `?` stay inside the path.
pub fn compare_url(repo_url: &str, current: &str) -> String {
    let branch = current
        .split('/')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!("{}/compare/{}?expand=1", repo_url, branch)
}

/// Push `current` and open a pull request page in the browser.
pub fn pull_request_commands(current: &str, repo_url: &str, remote: &str) -> Vec<String> {
    vec![
        format!("git push {} {}", quote(remote), quote(current)),
        format!(
            "{} {}",
            browser_opener(),
            quote(&compare_url(repo_url, current))
        ),
    ]
}
