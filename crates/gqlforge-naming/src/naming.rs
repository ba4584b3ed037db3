use gqlforge_config::{ExportType, GenerationConfig, NameCase};

use crate::artifact::{
    ArtifactKind, CREATE_INPUT_SUFFIX, FILTERS_SUFFIX, OBJECT_TYPE_SUFFIX, RESOLVER_SUFFIX,
    SORTS_SUFFIX, UPDATE_INPUT_SUFFIX,
};
use crate::case::{NamePurpose, derive_name};
use crate::inflect::pluralize;

/// The configured naming policy for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Naming {
    pub file_case: NameCase,
    pub entity_case: NameCase,
    pub property_case: NameCase,
    pub export_type: ExportType,
}

impl Default for Naming {
    fn default() -> Self {
        Naming::from_config(&GenerationConfig::default())
    }
}

impl Naming {
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            file_case: config.file_case(),
            entity_case: config.entity_case(),
            property_case: config.property_case(),
            export_type: config.export_type(),
        }
    }

    /// Class name of the entity model, e.g. `Category`.
    pub fn entity_name(&self, name: &str) -> String {
        derive_name(name, self.entity_case, NamePurpose::TypeName)
    }

    /// `CategoryOT`
    pub fn object_type_name(&self, name: &str) -> String {
        self.suffixed(name, OBJECT_TYPE_SUFFIX)
    }

    /// `CategoryFilters`
    pub fn filters_name(&self, name: &str) -> String {
        self.suffixed(name, FILTERS_SUFFIX)
    }

    /// `CategorySorts`
    pub fn sorts_name(&self, name: &str) -> String {
        self.suffixed(name, SORTS_SUFFIX)
    }

    /// `CategoryCreateInput`
    pub fn create_input_name(&self, name: &str) -> String {
        self.suffixed(name, CREATE_INPUT_SUFFIX)
    }

    /// `CategoryUpdateInput`
    pub fn update_input_name(&self, name: &str) -> String {
        self.suffixed(name, UPDATE_INPUT_SUFFIX)
    }

    /// `CategoryResolver`
    pub fn resolver_name(&self, name: &str) -> String {
        self.suffixed(name, RESOLVER_SUFFIX)
    }

    /// Base file name shared by every artifact of an entity, e.g. `category`.
    pub fn file_name(&self, name: &str) -> String {
        derive_name(name, self.file_case, NamePurpose::FileName)
    }

    /// Per-entity directory name; identical to [`Naming::file_name`].
    pub fn directory_name(&self, name: &str) -> String {
        derive_name(name, self.file_case, NamePurpose::DirectoryName)
    }

    /// Import specifier stem for one artifact, e.g. `category.filter`.
    pub fn artifact_file_stem(&self, name: &str, kind: ArtifactKind) -> String {
        kind.module_name(&self.file_name(name))
    }

    pub fn property_name(&self, name: &str) -> String {
        derive_name(name, self.property_case, NamePurpose::PropertyName)
    }

    /// Property name for list-style members (`categories`).
    pub fn plural_property_name(&self, name: &str) -> String {
        pluralize(&derive_name(name, self.property_case, NamePurpose::TypeName))
    }

    /// Binding used on the left of `from` in an import statement.
    pub fn local_import(&self, name: &str) -> String {
        match self.export_type {
            ExportType::Default => name.to_string(),
            ExportType::Named => format!("{{ {} }}", name),
        }
    }

    /// `"default "` for default exports, empty otherwise.
    pub fn export_keyword(&self) -> &'static str {
        if self.export_type.is_default() {
            "default "
        } else {
            ""
        }
    }

    fn suffixed(&self, name: &str, suffix: &str) -> String {
        format!("{}{}", self.entity_name(name), suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn naming() -> Naming {
        Naming::default()
    }

    #[test]
    fn composite_names_use_singular_base() {
        let n = naming();
        assert_eq!(n.entity_name("Categories"), "Category");
        assert_eq!(n.object_type_name("Categories"), "CategoryOT");
        assert_eq!(n.filters_name("categories"), "CategoryFilters");
        assert_eq!(n.sorts_name("categories"), "CategorySorts");
        assert_eq!(n.create_input_name("Categories"), "CategoryCreateInput");
        assert_eq!(n.update_input_name("Categories"), "CategoryUpdateInput");
        assert_eq!(n.resolver_name("Categories"), "CategoryResolver");
    }

    #[rstest]
    #[case(NameCase::Param, "user_accounts", "user-account")]
    #[case(NameCase::Snake, "UserAccounts", "user_account")]
    #[case(NameCase::Camel, "UserAccounts", "userAccount")]
    #[case(NameCase::Pascal, "user_accounts", "UserAccount")]
    #[case(NameCase::None, "UserAccounts", "UserAccount")]
    fn file_names_follow_file_case(
        #[case] case: NameCase,
        #[case] raw: &str,
        #[case] expected: &str,
    ) {
        let n = Naming {
            file_case: case,
            ..naming()
        };
        assert_eq!(n.file_name(raw), expected);
        assert_eq!(n.directory_name(raw), expected);
    }

    #[test]
    fn artifact_file_stem_appends_suffix() {
        let n = naming();
        assert_eq!(n.artifact_file_stem("users", ArtifactKind::Filter), "user.filter");
        assert_eq!(n.artifact_file_stem("Users", ArtifactKind::Model), "user.model");
    }

    #[test]
    fn property_names_keep_number() {
        let n = naming();
        assert_eq!(n.property_name("created_at"), "createdAt");
        assert_eq!(n.property_name("categories"), "categories");
        assert_eq!(n.plural_property_name("Category"), "categories");
    }

    #[test]
    fn local_import_depends_on_export_type() {
        let named = naming();
        assert_eq!(named.local_import("UserFilters"), "{ UserFilters }");
        assert_eq!(named.export_keyword(), "");

        let default = Naming {
            export_type: ExportType::Default,
            ..naming()
        };
        assert_eq!(default.local_import("UserFilters"), "UserFilters");
        assert_eq!(default.export_keyword(), "default ");
    }

    #[test]
    fn from_config_copies_cases() {
        let config = GenerationConfig {
            convert_case_file: NameCase::Snake,
            convert_case_entity: NameCase::Camel,
            convert_case_property: NameCase::None,
            ..Default::default()
        };
        let n = Naming::from_config(&config);
        assert_eq!(n.file_case, NameCase::Snake);
        assert_eq!(n.entity_name("user_accounts"), "userAccount");
        assert_eq!(n.property_name("first_name"), "first_name");
    }
}
