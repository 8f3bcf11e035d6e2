//! Query-string encoding for the dog search endpoint

use crate::models::DogSearchQuery;
use url::Url;

/// Key/value pairs for a search, in wire order
///
/// Lists are comma-joined. Unset fields, empty strings and empty lists are
/// left out entirely.
#[must_use]
pub fn search_pairs(query: &DogSearchQuery) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();

    let lists = [("breeds", &query.breeds), ("zipCodes", &query.zip_codes)];
    for (key, values) in lists {
        if let Some(values) = values
            && !values.is_empty()
        {
            pairs.push((key, values.join(",")));
        }
    }

    let numbers = [
        ("ageMin", query.age_min),
        ("ageMax", query.age_max),
        ("size", query.size),
    ];
    for (key, value) in numbers {
        if let Some(value) = value {
            pairs.push((key, value.to_string()));
        }
    }

    let texts = [("from", &query.from), ("sort", &query.sort)];
    for (key, value) in texts {
        if let Some(value) = value
            && !value.is_empty()
        {
            pairs.push((key, value.clone()));
        }
    }

    pairs
}

/// Append the search pairs to `url`, leaving it untouched when there are none
pub fn apply_search_query(url: &mut Url, query: &DogSearchQuery) {
    let pairs = search_pairs(query);
    if pairs.is_empty() {
        return;
    }
    let mut serializer = url.query_pairs_mut();
    for (key, value) in pairs {
        serializer.append_pair(key, &value);
    }
}

/// Rebuild a query from a `next`/`prev` cursor returned by the service
///
/// The cursor is a path with a query string, e.g.
/// `/dogs/search?size=25&from=25&breeds=Pug`. Unknown keys are ignored.
#[must_use]
pub fn query_from_cursor(cursor: &str) -> DogSearchQuery {
    let query_string = cursor.split_once('?').map_or(cursor, |(_, q)| q);
    let mut query = DogSearchQuery::default();

    for (key, value) in url::form_urlencoded::parse(query_string.as_bytes()) {
        let split = || -> Vec<String> {
            value
                .split(',')
                .filter(|v| !v.is_empty())
                .map(ToString::to_string)
                .collect()
        };
        match key.as_ref() {
            "breeds" => query.breeds = Some(split()),
            "zipCodes" => query.zip_codes = Some(split()),
            "ageMin" => query.age_min = value.parse().ok(),
            "ageMax" => query.age_max = value.parse().ok(),
            "size" => query.size = value.parse().ok(),
            "from" => query.from = Some(value.to_string()),
            "sort" => query.sort = Some(value.to_string()),
            _ => {}
        }
    }

    query
}
