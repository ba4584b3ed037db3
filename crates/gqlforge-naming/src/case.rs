use gqlforge_config::NameCase;
use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};

use crate::inflect::singularize;

/// What a derived name is going to be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePurpose {
    FileName,
    TypeName,
    PropertyName,
    DirectoryName,
}

impl NamePurpose {
    /// File, type and directory names read as singular nouns; properties keep their
    /// number (`tags` stays `tags`).
    pub fn singularizes(self) -> bool {
        !matches!(self, NamePurpose::PropertyName)
    }
}

/// Convert an identifier to the requested case.
///
/// # Examples
/// ```
/// use gqlforge_config::NameCase;
/// use gqlforge_naming::convert_case;
///
/// assert_eq!(convert_case("user_accounts", NameCase::Pascal), "UserAccounts");
/// assert_eq!(convert_case("UserAccounts", NameCase::Param), "user-accounts");
/// assert_eq!(convert_case("UserAccounts", NameCase::None), "UserAccounts");
/// ```
pub fn convert_case(name: &str, case: NameCase) -> String {
    match case {
        NameCase::Camel => name.to_lower_camel_case(),
        NameCase::Param => name.to_kebab_case(),
        NameCase::Pascal => name.to_upper_camel_case(),
        NameCase::Snake => name.to_snake_case(),
        NameCase::None => name.to_string(),
    }
}

/// Derive a name for `purpose`: convert the case first, then singularize when the
/// purpose calls for a singular noun.
pub fn derive_name(raw: &str, case: NameCase, purpose: NamePurpose) -> String {
    let cased = convert_case(raw, case);
    if purpose.singularizes() {
        singularize(&cased)
    } else {
        cased
    }
}
