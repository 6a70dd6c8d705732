use crate::database::models::RoleCategory;

/// Category used for any role not listed in [`ROLE_CATEGORIES`].
pub const DEFAULT_CATEGORY: RoleCategory = RoleCategory::Muted;

/// Known role labels. Matching is exact and case-sensitive.
pub const ROLE_CATEGORIES: &[(&str, RoleCategory)] = &[
    ("Serveur", RoleCategory::Chart1),
    ("Server", RoleCategory::Chart1),
    ("Barman", RoleCategory::Chart2),
    ("Bartender", RoleCategory::Chart2),
    ("Runner", RoleCategory::Chart3),
    ("Cuisine", RoleCategory::Chart4),
    ("Kitchen", RoleCategory::Chart4),
];

pub fn category_for(role: &str) -> RoleCategory {
    ROLE_CATEGORIES
        .iter()
        .find(|(label, _)| *label == role)
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;
    use fake::faker::lorem::en::Sentence;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_roles_map_to_their_palette_slot() {
        assert_eq!(category_for("Server"), RoleCategory::Chart1);
        assert_eq!(category_for("Serveur"), RoleCategory::Chart1);
        assert_eq!(category_for("Barman"), RoleCategory::Chart2);
        assert_eq!(category_for("Runner"), RoleCategory::Chart3);
        assert_eq!(category_for("Cuisine"), RoleCategory::Chart4);
    }

    #[test]
    fn test_unknown_roles_fall_back_to_default() {
        assert_eq!(category_for("Unknown123"), DEFAULT_CATEGORY);
        assert_eq!(category_for(""), DEFAULT_CATEGORY);
        assert_eq!(category_for("server"), DEFAULT_CATEGORY);
        assert_eq!(category_for("Server "), DEFAULT_CATEGORY);
        assert_eq!(category_for("Serv"), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_mapping_is_total_for_generated_labels() {
        for _ in 0..50 {
            let role: String = Sentence(1..4).fake();
            let category = category_for(&role);
            assert_eq!(category, category_for(&role));
            assert!(!category.as_str().is_empty());
        }
    }

    #[test]
    fn test_category_serializes_as_palette_key() {
        assert_eq!(
            serde_json::to_string(&category_for("Kitchen")).unwrap(),
            "\"chart-4\""
        );
        assert_eq!(DEFAULT_CATEGORY.to_string(), "muted");
    }
}
