use log::debug;

mod model;

pub use model::Query;

/// Keeps the names that contain `query`, ignoring case.
///
/// A blank query keeps every name. Matches stay in their original order.
pub fn filter<S: AsRef<str> + Clone>(names: &[S], query: &str) -> Vec<S> {
    let query = Query::new(query);
    if query.is_empty() {
        return names.to_vec();
    }

    let matches: Vec<S> = names
        .iter()
        .filter(|name| query.matches(name.as_ref()))
        .cloned()
        .collect();
    debug!("Query matched {} of {} names", matches.len(), names.len());
    matches
}
