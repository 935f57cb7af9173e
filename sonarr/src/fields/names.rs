//! Field names that differ between the API and the provider schema

struct NameException {
    api: &'static str,
    local: &'static str,
}

const NAME_EXCEPTIONS: &[NameException] = &[
    NameException {
        api: "tags",
        local: "fieldTags",
    },
    NameException {
        api: "seedCriteria.seedRatio",
        local: "seedRatio",
    },
    NameException {
        api: "seedCriteria.seedTime",
        local: "seedTime",
    },
    NameException {
        api: "seedCriteria.seasonPackSeedTime",
        local: "seasonPackSeedTime",
    },
];

/// Maps an API field name to the provider's name for it
pub fn to_local(api_name: &str) -> &str {
    NAME_EXCEPTIONS
        .iter()
        .find(|e| e.api == api_name)
        .map_or(api_name, |e| e.local)
}

/// Maps a provider field name to the API's name for it
pub fn to_api(local_name: &str) -> &str {
    NAME_EXCEPTIONS
        .iter()
        .find(|e| e.local == local_name)
        .map_or(local_name, |e| e.api)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_exception_round_trips() {
        for e in NAME_EXCEPTIONS {
            assert_eq!(to_local(e.api), e.local);
            assert_eq!(to_api(e.local), e.api);
            assert_eq!(to_api(to_local(e.api)), e.api);
        }
    }

    #[test]
    fn seed_criteria_fields_are_flattened() {
        assert_eq!(to_local("seedCriteria.seedTime"), "seedTime");
        assert_eq!(to_api("seasonPackSeedTime"), "seedCriteria.seasonPackSeedTime");
    }

    #[test]
    fn other_names_pass_through() {
        assert_eq!(to_local("apiKey"), "apiKey");
        assert_eq!(to_api("apiKey"), "apiKey");
        assert_eq!(to_local("fieldTags"), "fieldTags");
        assert_eq!(to_api("tags"), "tags");
    }
}
