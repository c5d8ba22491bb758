//! URL derivation for a target repository.

use crate::provider::GitProvider;
use crate::repository::TargetRepository;
use crate::resolve::{resolve_api_base_url, resolve_provider, resolve_web_base_url};

/// HTTPS clone URL, e.g. `https://github.com/owner/repo.git`.
pub fn clone_url(repo: &TargetRepository) -> String {
    format!("{}.git", web_url(repo))
}

/// URL to configure as the git remote; identical to [`clone_url`].
pub fn remote_url(repo: &TargetRepository) -> String {
    clone_url(repo)
}

/// Browser URL of the repository, e.g. `https://git.example.com/owner/repo`.
///
/// For self-hosted providers any `/api` or `/api/v1` suffix of the configured
/// base URL is dropped first.
pub fn web_url(repo: &TargetRepository) -> String {
    format!("{}/{}/{}", resolve_web_base_url(repo), repo.owner, repo.repo)
}

/// Browser URL of an issue.
///
/// # Arguments
/// * `repo` - Target repository
/// * `issue_number` - Issue number as shown by the provider
pub fn issue_url(repo: &TargetRepository, issue_number: u64) -> String {
    format!("{}/issues/{}", web_url(repo), issue_number)
}

/// Browser URL of a pull request.
///
/// GitHub uses `/pull/{n}`, Gitea and Forgejo use `/pulls/{n}`.
///
/// # Arguments
/// * `repo` - Target repository
/// * `pr_number` - Pull request number
pub fn pull_request_url(repo: &TargetRepository, pr_number: u64) -> String {
    let segment = match resolve_provider(repo) {
        GitProvider::Github => "pull",
        GitProvider::Gitea | GitProvider::Forgejo => "pulls",
    };
    format!("{}/{}/{}", web_url(repo), segment, pr_number)
}

/// REST endpoint for the repository, e.g. `https://api.github.com/repos/owner/repo`.
pub fn api_resource_url(repo: &TargetRepository) -> String {
    format!(
        "{}/repos/{}/{}",
        resolve_api_base_url(repo),
        repo.owner,
        repo.repo
    )
}

/// Guesses the provider from a repository URL.
///
/// Best-effort only: anything mentioning `github.com` is GitHub and everything
/// else is assumed to be Gitea. Forgejo is never detected. An explicitly
/// configured provider on a [`TargetRepository`] always takes precedence.
pub fn detect_provider_from_url(repo_url: &str) -> GitProvider {
    if repo_url.contains("github.com") {
        return GitProvider::Github;
    }
    tracing::debug!(url = %repo_url, "Assuming gitea for non-GitHub URL");
    GitProvider::Gitea
}
