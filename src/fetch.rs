use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::Result;
use crate::github::GitHubClient;
use crate::types::repo::RepoRecord;

/// Both spellings the ecosystem uses; first hit wins.
const CITATION_PATHS: [&str; 2] = ["CITATION.cff", "citation.cff"];

/// List the organization and pull per-repository content. The listing is
/// fatal on failure; readme and citation fetches degrade to `None` and the
/// verdicts report the absence.
pub fn fetch_org(client: &GitHubClient, org: &str) -> Result<Vec<RepoRecord>> {
    let raw = client.list_org_repos(org)?;
    info!(org, repos = raw.len(), "fetched repository listing");

    let records = raw
        .into_par_iter()
        .map(|repo| {
            let readme = client.fetch_readme(&repo.full_name);
            let citation = fetch_citation(client, &repo.full_name);
            debug!(
                repo = %repo.full_name,
                readme = readme.is_some(),
                citation = citation.is_some(),
                "fetched repository content"
            );
            RepoRecord::assemble(repo, readme, citation)
        })
        .collect();
    Ok(records)
}

fn fetch_citation(client: &GitHubClient, full_name: &str) -> Option<String> {
    CITATION_PATHS
        .iter()
        .find_map(|path| client.fetch_file(full_name, path))
}
