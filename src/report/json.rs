use crate::criteria::ScoredRepo;

pub fn to_json(repos: &[ScoredRepo]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(repos)
}
