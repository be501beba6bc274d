use super::types::{ListedProfile, ProfileList, ProfileRecord};

/// Client-side snapshot of the server's profile collection: the listing
/// sorted for display plus the default/current markers the response carried.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileCollection {
    pub profiles: Vec<ListedProfile>,
    pub default_id: Option<String>,
    pub current_id: Option<String>,
    pub current_profile_data: Option<ProfileRecord>,
}

impl ProfileCollection {
    /// Ingest a listing response. Profiles are sorted by name,
    /// case-insensitively, and the flagged entries become the markers.
    pub fn from_response(mut list: ProfileList) -> ProfileCollection {
        list.profiles
            .sort_by(|a, b| a.profile.name.to_lowercase().cmp(&b.profile.name.to_lowercase()));

        let default_id = list
            .profiles
            .iter()
            .find(|p| p.is_default)
            .map(|p| p.profile.id.clone());
        let current_id = list
            .profiles
            .iter()
            .find(|p| p.is_current)
            .map(|p| p.profile.id.clone());
        let current_profile_data = list
            .profiles
            .iter()
            .find(|p| p.is_current)
            .map(|p| p.profile.clone());

        ProfileCollection {
            profiles: list.profiles,
            default_id,
            current_id,
            current_profile_data,
        }
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.profiles.iter().any(|p| p.profile.id == id)
    }

    pub fn is_default(&self, id: &str) -> bool {
        self.default_id.as_deref() == Some(id)
    }

    pub fn is_current(&self, id: &str) -> bool {
        self.current_id.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listed(id: &str, name: &str, default: bool, current: bool) -> ListedProfile {
        let mut profile = ProfileRecord::clean();
        profile.id = id.to_string();
        profile.name = name.to_string();
        ListedProfile {
            profile,
            is_default: default,
            is_current: current,
            resource: Some(format!("http://localhost:5000/api/printerprofiles/{id}")),
        }
    }

    #[test]
    fn sorts_case_insensitively_by_name() {
        let list = ProfileList {
            profiles: vec![
                listed("zed", "zeta", false, false),
                listed("alpha", "Alpha", false, false),
                listed("beta", "beta", false, false),
            ],
        };
        let cache = ProfileCollection::from_response(list);
        let names: Vec<&str> = cache.profiles.iter().map(|p| p.profile.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn picks_default_and_current_markers() {
        let list = ProfileList {
            profiles: vec![
                listed("a", "A", true, false),
                listed("b", "B", false, true),
            ],
        };
        let cache = ProfileCollection::from_response(list);
        assert_eq!(cache.default_id.as_deref(), Some("a"));
        assert_eq!(cache.current_id.as_deref(), Some("b"));
        assert!(cache.is_default("a"));
        assert!(!cache.is_default("b"));
        assert!(cache.is_current("b"));
        assert_eq!(
            cache.current_profile_data.as_ref().map(|p| p.id.as_str()),
            Some("b")
        );
        assert!(cache.contains_id("a"));
        assert!(!cache.contains_id("c"));
    }
}
